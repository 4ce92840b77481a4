//! Document list and add-document form.

use chrono::NaiveDate;
use dioxus::prelude::*;
use store::validate::parse_date_input;
use store::{DocId, Document, DocumentForm, DocumentType, ExpiryStatus};

use crate::icons::{FaCalendar, FaFolder, FaTrash};
use crate::Icon;

const DOCUMENTS_CSS: Asset = asset!("/assets/styling/documents.css");

/// Table of tracked documents with their expiry status.
#[component]
pub fn DocumentTable(
    documents: Vec<Document>,
    today: NaiveDate,
    deleting: bool,
    on_delete: EventHandler<DocId>,
) -> Element {
    rsx! {
        document::Stylesheet { href: DOCUMENTS_CSS }

        table {
            class: "document-table",
            thead {
                tr {
                    th {
                        Icon { icon: FaFolder, width: 14, height: 14 }
                        " DOCUMENTS"
                    }
                    th {
                        Icon { icon: FaCalendar, width: 14, height: 14 }
                        " DATE OF EXPIRY"
                    }
                    th { "STATUS" }
                    th {}
                }
            }
            tbody {
                for doc in documents {
                    DocumentRow {
                        key: "{doc.doc_id}",
                        doc: doc.clone(),
                        today,
                        deleting,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentRow(
    doc: Document,
    today: NaiveDate,
    deleting: bool,
    on_delete: EventHandler<DocId>,
) -> Element {
    let status = doc.status(today);
    let days = doc.days_left(today);
    let badge = match status {
        ExpiryStatus::Expired => "badge expired",
        ExpiryStatus::ExpiringSoon => "badge soon",
        ExpiryStatus::Valid => "badge valid",
    };
    let remaining = match days {
        d if d < 0 => format!("{} days ago", -d),
        0 => "today".to_string(),
        1 => "1 day left".to_string(),
        d => format!("{d} days left"),
    };
    let doc_id = doc.doc_id;

    rsx! {
        tr {
            td { "{doc.document_type}" }
            td { "{doc.expiry_date}" }
            td {
                span { class: badge, "{status.label()}" }
                span { class: "days-left", " {remaining}" }
            }
            td {
                button {
                    class: "delete-btn",
                    title: "Delete",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(doc_id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

/// Type picker and expiry date input. The date picker refuses dates before
/// `min_date`; the save handler validates again.
#[component]
pub fn AddDocumentForm(
    form: Signal<DocumentForm>,
    min_date: NaiveDate,
    saving: bool,
    on_save: EventHandler<()>,
) -> Element {
    let mut form = form;
    let current = form();
    let selected = current.document_type.map(|t| t.label()).unwrap_or("");
    let date_value = current
        .expiry_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "add-document",
            select {
                value: "{selected}",
                onchange: move |evt: FormEvent| {
                    form.write().document_type = evt.value().parse().ok();
                },
                option { value: "", disabled: true, "Select Document Type" }
                for t in DocumentType::ALL {
                    option { key: "{t}", value: t.label(), "{t}" }
                }
            }

            h1 { "Expiry Date" }
            input {
                r#type: "date",
                min: "{min_date}",
                value: "{date_value}",
                oninput: move |evt: FormEvent| {
                    form.write().expiry_date = parse_date_input(&evt.value());
                },
            }

            button {
                disabled: saving,
                onclick: move |_| on_save.call(()),
                if saving { "SAVING..." } else { "SET & SAVE" }
            }
        }
    }
}
