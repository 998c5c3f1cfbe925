//! souk core — domain models, error taxonomy, and the collaborator
//! traits (persistence, mail) the marketplace flows are written against.

pub mod error;
pub mod mailer;
pub mod models;
pub mod repository;

pub use error::{SoukError, SoukResult};
pub use mailer::Mailer;
