//! souk auth — password credential store, signed-token codec, and the
//! session, verification, and password-reset flows built on them.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, LoginOutput, RegisterInput};
pub use token::{AccessClaims, ResetClaims};
