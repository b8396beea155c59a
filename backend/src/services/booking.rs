//! Booking intake service
//!
//! Validates a booking inquiry and turns it into two emails: a notification
//! to the business inbox and a confirmation back to the submitter. Delivery
//! is all-or-nothing; if either send fails the whole submission fails.

use std::sync::Arc;

use askama::Template;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared::models::{format_event_date, BookingRequest, PACKAGE_CATALOG};
use shared::validation::validate_booking;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::mailer::{MailTransport, OutboundEmail};

// Mirrors encodeURIComponent so checkout links survive any address
const EMAIL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Template)]
#[template(path = "booking_notification.html")]
struct BookingNotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    event_type: &'a str,
    event_date: String,
    guest_count: Option<u32>,
    saved_mix: Option<&'a str>,
    message: Option<&'a str>,
    business_name: &'a str,
}

#[derive(Template)]
#[template(path = "booking_confirmation.html")]
struct BookingConfirmationTemplate<'a> {
    name: &'a str,
    event_type: &'a str,
    event_type_lower: String,
    event_date: String,
    guest_count: Option<u32>,
    packages: Vec<PackageOffer>,
    business_name: &'a str,
    base_url: &'a str,
    contact_email: &'a str,
}

/// One bookable package as presented in the confirmation email
struct PackageOffer {
    name: &'static str,
    description: &'static str,
    price_display: String,
    checkout_url: String,
}

/// Booking intake service, generic over the mail transport
pub struct BookingService<M: MailTransport> {
    mailer: M,
    config: Arc<Config>,
}

impl<M: MailTransport> BookingService<M> {
    /// Create a new BookingService instance
    pub fn new(mailer: M, config: Arc<Config>) -> Self {
        Self { mailer, config }
    }

    /// Validate, render and deliver both booking emails.
    ///
    /// The business notification goes out first so an inquiry is never
    /// acknowledged to the customer without the business having a copy.
    pub async fn submit_booking(&self, request: BookingRequest) -> AppResult<()> {
        validate_booking(&request).map_err(|msg| AppError::Validation(msg.to_string()))?;

        let (notification, confirmation) = self.render_emails(&request)?;

        self.mailer
            .send(notification)
            .await
            .map_err(AppError::Delivery)?;
        self.mailer
            .send(confirmation)
            .await
            .map_err(AppError::Delivery)?;

        Ok(())
    }

    /// Render both outbound emails without sending anything
    pub fn render_emails(
        &self,
        request: &BookingRequest,
    ) -> AppResult<(OutboundEmail, OutboundEmail)> {
        let site = &self.config.site;
        let base_url = site.base_url.trim_end_matches('/');
        let event_date = format_event_date(request.event_date.as_deref());
        let submitter_email = request.email.trim().to_string();

        let notification_html = BookingNotificationTemplate {
            name: request.name.trim(),
            email: &submitter_email,
            phone: BookingRequest::normalized(&request.phone),
            event_type: request.event_type.trim(),
            event_date: event_date.clone(),
            guest_count: request.guest_count,
            saved_mix: BookingRequest::normalized(&request.saved_mix),
            message: BookingRequest::normalized(&request.message),
            business_name: &site.business_name,
        }
        .render()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Notification render failed: {}", e)))?;

        let confirmation_html = BookingConfirmationTemplate {
            name: request.name.trim(),
            event_type: request.event_type.trim(),
            event_type_lower: request.event_type.trim().to_lowercase(),
            event_date,
            guest_count: request.guest_count,
            packages: self.package_offers(&submitter_email, base_url),
            business_name: &site.business_name,
            base_url,
            contact_email: &site.contact_email,
        }
        .render()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Confirmation render failed: {}", e)))?;

        let notification = OutboundEmail {
            to: site.contact_email.clone(),
            subject: format!(
                "New Event Booking: {} - {}",
                request.event_type.trim(),
                request.name.trim()
            ),
            html_body: notification_html,
            reply_to: Some(submitter_email.clone()),
            from_name: format!("{} Website", site.business_name),
        };

        let confirmation = OutboundEmail {
            to: submitter_email,
            subject: format!(
                "Thank you for your booking request - {}",
                site.business_name
            ),
            html_body: confirmation_html,
            reply_to: None,
            from_name: site.business_name.clone(),
        };

        Ok((notification, confirmation))
    }

    fn package_offers(&self, email: &str, base_url: &str) -> Vec<PackageOffer> {
        let encoded_email = utf8_percent_encode(email, EMAIL_ENCODE_SET);
        PACKAGE_CATALOG
            .iter()
            .map(|package| PackageOffer {
                name: package.name,
                description: package.description,
                price_display: package.price_display(),
                checkout_url: format!(
                    "{}/api/v1/checkout/package?package={}&email={}",
                    base_url, package.id, encoded_email
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, SiteConfig, SmtpConfig, StripeConfig};
    use std::sync::Mutex;

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            site: SiteConfig {
                base_url: "https://velvetpour.co.uk".to_string(),
                business_name: "Velvet Pour".to_string(),
                contact_email: "contact@velvetpour.co.uk".to_string(),
            },
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 587,
                secure: false,
                username: "relay".to_string(),
                password: "secret".to_string(),
                from_address: "noreply@velvetpour.co.uk".to_string(),
            },
            stripe: StripeConfig {
                secret_key: "sk_test_unused".to_string(),
                custom_mix_price_pence: 2500,
            },
        })
    }

    /// Records every delivery; optionally fails after `ok_sends` successes
    struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        ok_sends: usize,
    }

    impl RecordingMailer {
        fn reliable() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                ok_sends: usize::MAX,
            }
        }

        fn failing_after(ok_sends: usize) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                ok_sends,
            }
        }
    }

    impl MailTransport for &RecordingMailer {
        async fn send(&self, email: OutboundEmail) -> Result<(), String> {
            let mut sent = self.sent.lock().unwrap();
            if sent.len() >= self.ok_sends {
                return Err("relay unavailable".to_string());
            }
            sent.push(email);
            Ok(())
        }
    }

    fn request() -> BookingRequest {
        BookingRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("0770 000 000".to_string()),
            event_type: "Wedding".to_string(),
            event_date: Some("2026-06-20".to_string()),
            guest_count: Some(80),
            message: Some("Outdoor ceremony, two bars please.".to_string()),
            saved_mix: Some("recipe=Summer%20Blush&ingredients=rose,strawberry".to_string()),
        }
    }

    #[tokio::test]
    async fn sends_notification_before_confirmation() {
        let mailer = RecordingMailer::reliable();
        let service = BookingService::new(&mailer, test_config());

        service.submit_booking(request()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "contact@velvetpour.co.uk");
        assert_eq!(sent[0].subject, "New Event Booking: Wedding - Ada Lovelace");
        assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(sent[0].from_name, "Velvet Pour Website");
        assert_eq!(sent[1].to, "ada@example.com");
        assert_eq!(
            sent[1].subject,
            "Thank you for your booking request - Velvet Pour"
        );
        assert_eq!(sent[1].from_name, "Velvet Pour");
    }

    #[tokio::test]
    async fn confirmation_failure_fails_the_submission() {
        let mailer = RecordingMailer::failing_after(1);
        let service = BookingService::new(&mailer, test_config());

        let err = service.submit_booking(request()).await.unwrap_err();
        assert!(matches!(err, AppError::Delivery(_)));
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_request_sends_nothing() {
        let mailer = RecordingMailer::reliable();
        let service = BookingService::new(&mailer, test_config());

        let mut invalid = request();
        invalid.email = "not-an-email".to_string();

        let err = service.submit_booking(invalid).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn submitted_text_is_html_escaped() {
        let mailer = RecordingMailer::reliable();
        let service = BookingService::new(&mailer, test_config());

        let mut hostile = request();
        hostile.message = Some("<script>alert('x')</script>".to_string());

        let (notification, _) = service.render_emails(&hostile).unwrap();
        assert!(!notification.html_body.contains("<script>"));
        assert!(notification.html_body.contains("&lt;script&gt;"));
    }

    #[test]
    fn absent_optionals_are_omitted_from_the_notification() {
        let mailer = RecordingMailer::reliable();
        let service = BookingService::new(&mailer, test_config());

        let mut sparse = request();
        sparse.phone = Some("   ".to_string());
        sparse.message = None;
        sparse.saved_mix = None;
        sparse.event_date = None;
        sparse.guest_count = None;

        let (notification, _) = service.render_emails(&sparse).unwrap();
        assert!(!notification.html_body.contains("Phone Number"));
        assert!(!notification.html_body.contains("Additional Message"));
        assert!(!notification.html_body.contains("Saved Mix Reference"));
        // Date and guest count stay visible with a placeholder
        assert!(notification.html_body.contains("Not specified"));
    }

    #[test]
    fn confirmation_lists_every_package_with_a_checkout_link() {
        let mailer = RecordingMailer::reliable();
        let service = BookingService::new(&mailer, test_config());

        let mut plus_address = request();
        plus_address.email = "ada+events@example.com".to_string();

        let (_, confirmation) = service.render_emails(&plus_address).unwrap();
        assert!(confirmation.html_body.contains("Basic Package"));
        assert!(confirmation.html_body.contains("Standard Package"));
        assert!(confirmation.html_body.contains("Premium Package"));
        assert!(confirmation.html_body.contains("£390.00"));
        assert!(confirmation.html_body.contains(
            "https://velvetpour.co.uk/api/v1/checkout/package?package=premium\
             &email=ada%2Bevents%40example.com"
        ));
    }

    #[test]
    fn event_date_is_rendered_long_form() {
        let mailer = RecordingMailer::reliable();
        let service = BookingService::new(&mailer, test_config());

        let (notification, confirmation) = service.render_emails(&request()).unwrap();
        assert!(notification.html_body.contains("Saturday, 20 June 2026"));
        assert!(confirmation.html_body.contains("Saturday, 20 June 2026"));
    }
}
