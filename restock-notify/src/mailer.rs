//! SMTP delivery via lettre.

use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::error::NotifyError;
use crate::template::StockEmail;

/// Default SMTP submission port (implicit TLS).
const DEFAULT_SMTP_PORT: u16 = 465;

/// SMTP connection settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Relay host, e.g. `smtp.gmail.com`.
    pub host: String,
    /// Relay port.
    pub port: u16,
    /// Login username.
    pub username: String,
    /// Login password (an app password for Gmail).
    pub password: String,
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
}

impl SmtpConfig {
    /// Creates a config for the given relay with the default port.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_SMTP_PORT,
            username: username.into(),
            password: password.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Sets a non-default port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Sends rendered stock notifications over SMTP.
pub struct Mailer {
    config: SmtpConfig,
}

impl Mailer {
    /// Creates a mailer with the given SMTP settings.
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Delivers one rendered notification.
    pub async fn send(&self, email: &StockEmail) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(self.config.from.parse()?)
            .to(self.config.to.parse()?)
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))?;

        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
            .port(self.config.port)
            .credentials(credentials)
            .build();

        transport.send(message).await?;
        info!(to = %self.config.to, subject = %email.subject, "stock notification sent");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
