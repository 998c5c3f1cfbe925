//! SMTP implementation of the [`Mailer`] collaborator using lettre's
//! async transport.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use souk_core::error::{SoukError, SoukResult};
use souk_core::mailer::Mailer;
use tracing::info;

/// SMTP transport configuration.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay host (e.g. `smtp.gmail.com`).
    pub smtp_host: String,
    /// SMTPS port (default: 465).
    pub smtp_port: u16,
    /// Account username, also used as the from-address.
    pub username: String,
    pub password: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".into(),
            smtp_port: 465,
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Async SMTP mailer over an implicit-TLS relay connection.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> SoukResult<Self> {
        let from: Mailbox = format!("souk <{}>", config.username)
            .parse()
            .map_err(|e| SoukError::Mail(format!("invalid from address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| SoukError::Mail(format!("smtp transport setup failed: {e}")))?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .port(config.smtp_port)
            .pool_config(PoolConfig::new().max_size(4))
            .build();

        Ok(Self { transport, from })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, recipients: &[String], subject: &str, html_body: &str) -> SoukResult<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        for recipient in recipients {
            let to: Mailbox = recipient
                .parse()
                .map_err(|e| SoukError::Mail(format!("invalid recipient address: {e}")))?;
            builder = builder.to(to);
        }

        let message = builder
            .body(html_body.to_string())
            .map_err(|e| SoukError::Mail(format!("failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| SoukError::Mail(e.to_string()))?;

        info!(recipients = recipients.len(), subject, "email dispatched");
        Ok(())
    }
}
