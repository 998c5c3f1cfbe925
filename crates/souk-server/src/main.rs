//! souk server — application entry point.

mod settings;

use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("souk=info".parse().unwrap()))
        .json()
        .init();

    tracing::info!("Starting souk server...");

    // Configuration is loaded exactly once; a missing signing secret is
    // fatal here, never a per-request failure.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    let _mailer = match souk_mail::SmtpMailer::new(&settings.mail) {
        Ok(mailer) => mailer,
        Err(e) => {
            tracing::error!(error = %e, "mail transport setup failed");
            std::process::exit(1);
        }
    };

    tracing::info!(
        base_url = %settings.auth.public_base_url,
        "configuration loaded"
    );

    // TODO: wire a persistent UserRepository/BusinessRepository implementation
    // TODO: mount the HTTP router over AuthService

    tracing::info!("souk server stopped.");
}
