//! Outbound mail relay client
//!
//! Wraps an async SMTP transport behind a small trait so booking delivery
//! can be exercised in tests without a relay.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::SmtpConfig;
use crate::error::{AppError, AppResult};

/// A fully-rendered outbound document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub reply_to: Option<String>,
    /// Display name shown next to the from address
    pub from_name: String,
}

/// Seam over the mail relay; each call is one independent delivery attempt
pub trait MailTransport {
    async fn send(&self, email: OutboundEmail) -> Result<(), String>;
}

/// SMTP-backed mail transport
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: Address,
}

impl SmtpMailer {
    /// Build the transport from relay configuration. `secure` selects
    /// implicit TLS; otherwise the connection upgrades via STARTTLS.
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| AppError::Configuration(format!("Invalid SMTP relay: {}", e)))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from_address = config
            .from_address
            .parse::<Address>()
            .map_err(|e| AppError::Configuration(format!("Invalid SMTP from address: {}", e)))?;

        Ok(Self {
            transport,
            from_address,
        })
    }
}

impl MailTransport for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), String> {
        let from = Mailbox::new(Some(email.from_name.clone()), self.from_address.clone());
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| format!("Invalid recipient '{}': {}", email.to, e))?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = &email.reply_to {
            let mailbox: Mailbox = reply_to
                .parse()
                .map_err(|e| format!("Invalid reply-to '{}': {}", reply_to, e))?;
            builder = builder.reply_to(mailbox);
        }

        let message = builder
            .body(email.html_body)
            .map_err(|e| format!("Failed to build message: {}", e))?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| format!("SMTP send failed: {}", e))
    }
}
