//! Payment provider client for hosted checkout sessions
//!
//! Talks to the Stripe Checkout Sessions API over its form-encoded REST
//! surface. The provider is treated as a black box: one attempt per call,
//! failures reported and logged, no retry.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Payment provider API client
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
    secret_key: String,
    base_url: String,
}

/// The single line item carried by a checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    pub name: String,
    pub description: String,
    pub unit_amount_pence: i64,
    pub quantity: u32,
}

/// Everything needed to request one hosted session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionSpec {
    pub line_item: CheckoutLineItem,
    /// Contains the provider's `{CHECKOUT_SESSION_ID}` placeholder
    pub success_url: String,
    pub cancel_url: String,
    pub customer_email: Option<String>,
    /// Key/value pairs echoed back by the provider for reconciliation
    pub metadata: Vec<(String, String)>,
}

/// A provider-issued session: opaque id plus the hosted page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Wire shape of the provider's session response
#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
    url: Option<String>,
}

impl CheckoutSessionSpec {
    /// Flatten into the provider's bracketed form parameters
    pub fn to_form_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
            (
                "line_items[0][quantity]".to_string(),
                self.line_item.quantity.to_string(),
            ),
            (
                "line_items[0][price_data][currency]".to_string(),
                "gbp".to_string(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                self.line_item.unit_amount_pence.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                self.line_item.name.clone(),
            ),
            (
                "line_items[0][price_data][product_data][description]".to_string(),
                self.line_item.description.clone(),
            ),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
        ];

        if let Some(email) = &self.customer_email {
            params.push(("customer_email".to_string(), email.clone()));
        }
        for (key, value) in &self.metadata {
            params.push((format!("metadata[{}]", key), value.clone()));
        }

        params
    }
}

impl StripeClient {
    /// Create a new StripeClient
    pub fn new(secret_key: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            base_url: "https://api.stripe.com/v1".to_string(),
        }
    }

    /// Create a new StripeClient with custom base URL (for testing)
    pub fn with_base_url(secret_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            base_url,
        }
    }

    /// Request a hosted checkout session from the provider
    pub async fn create_checkout_session(
        &self,
        spec: &CheckoutSessionSpec,
    ) -> AppResult<CheckoutSession> {
        let url = format!("{}/checkout/sessions", self.base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&spec.to_form_params())
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Checkout session request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!(
                "Checkout session error: {} - {}",
                status, body
            )));
        }

        let data: StripeSessionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse session response: {}", e)))?;

        let redirect_url = data
            .url
            .ok_or_else(|| AppError::Provider("Session response carried no URL".to_string()))?;

        Ok(CheckoutSession {
            id: data.id,
            url: redirect_url,
        })
    }
}
