// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Restock Notify
//!
//! Renders stock reports into a notification email and delivers it over
//! SMTP. Rendering consumes the status labels and reason codes the core
//! already produced; no classification logic lives here.

pub mod error;
pub mod mailer;
pub mod template;

pub use error::NotifyError;
pub use mailer::{Mailer, SmtpConfig};
pub use template::StockEmail;
