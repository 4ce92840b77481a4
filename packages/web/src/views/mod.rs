mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod tracker;
pub use tracker::Tracker;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod not_found;
pub use not_found::NotFound;
