//! # API crate — backend client and user flows for the document tracker
//!
//! Everything the views need to talk to the tracker backend. The backend is an
//! external REST service; this crate only knows its request/response contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait, one async method per endpoint |
//! | [`http`] | [`HttpBackend`], the `reqwest` implementation used by the app |
//! | [`memory`] | [`MemoryBackend`], an in-process test backend that records calls |
//! | [`models`] | Request and response bodies |
//! | [`flows`] | Login, signup and tracker operations built on [`Backend`] |
//! | [`error`] | [`ApiError`] |
//!
//! ## Flows
//!
//! - **Auth**: `login`, `prepare_signup`, `signup`
//! - **Tracker**: `fetch_documents`, `add_document`, `delete_document`, `logout`

pub mod backend;
pub mod error;
pub mod flows;
pub mod http;
pub mod memory;
pub mod models;

pub use backend::Backend;
pub use error::ApiError;
pub use flows::FlowError;
pub use http::HttpBackend;
pub use memory::MemoryBackend;
