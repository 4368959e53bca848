//! Interactive translation form.
//!
//! Mirrors a single-page web form: a text field, a target language field and
//! a translate action. Every submission is an independent request.

mod session;
mod ui;

pub use session::{FormConfig, FormSession, Submission};
