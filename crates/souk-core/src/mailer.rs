//! Mail collaborator trait.

use crate::error::SoukResult;

/// Outbound mail transport.
///
/// The auth flows hand over a fully rendered HTML body; the transport
/// owns delivery and nothing else. Failures surface as
/// [`SoukError::Mail`](crate::SoukError::Mail).
pub trait Mailer: Send + Sync {
    fn send(
        &self,
        recipients: &[String],
        subject: &str,
        html_body: &str,
    ) -> impl Future<Output = SoukResult<()>> + Send;
}
