//! souk mail — lettre-backed SMTP implementation of the [`Mailer`]
//! collaborator and the HTML templates for transactional email.
//!
//! [`Mailer`]: souk_core::Mailer

pub mod smtp;
pub mod templates;

pub use smtp::{MailConfig, SmtpMailer};
