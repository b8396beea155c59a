//! Checkout session service
//!
//! Turns a checkout request (fixed package or custom mix) into a provider
//! session request and returns the hosted payment page URL. Session building
//! is kept pure so it is testable without the network.

use std::sync::Arc;

use shared::models::{find_package, CheckoutRequest, CustomMixCheckout, PackageCheckout};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::payments::{
    CheckoutLineItem, CheckoutSession, CheckoutSessionSpec, StripeClient,
};

/// Checkout session service
pub struct CheckoutService {
    stripe: StripeClient,
    config: Arc<Config>,
}

impl CheckoutService {
    /// Create a new CheckoutService instance
    pub fn new(stripe: StripeClient, config: Arc<Config>) -> Self {
        Self { stripe, config }
    }

    /// Create a hosted checkout session for the given request
    pub async fn create_session(&self, request: CheckoutRequest) -> AppResult<CheckoutSession> {
        let spec = self.build_session_spec(&request)?;
        self.stripe.create_checkout_session(&spec).await
    }

    /// Create a session for a package id, as used by the link entry point
    pub async fn create_package_session(
        &self,
        package_id: &str,
        customer_email: Option<String>,
    ) -> AppResult<CheckoutSession> {
        let request = CheckoutRequest::Package(PackageCheckout {
            package_id: package_id.to_string(),
            customer_email,
        });
        self.create_session(request).await
    }

    /// Build the provider request from a checkout request
    pub fn build_session_spec(&self, request: &CheckoutRequest) -> AppResult<CheckoutSessionSpec> {
        match request {
            CheckoutRequest::Package(checkout) => self.package_spec(checkout),
            CheckoutRequest::CustomMix(checkout) => self.custom_mix_spec(checkout),
        }
    }

    fn package_spec(&self, checkout: &PackageCheckout) -> AppResult<CheckoutSessionSpec> {
        let package = find_package(&checkout.package_id)
            .ok_or_else(|| AppError::UnknownPackage(checkout.package_id.clone()))?;

        Ok(CheckoutSessionSpec {
            line_item: CheckoutLineItem {
                name: package.name.to_string(),
                description: package.description.to_string(),
                unit_amount_pence: package.price_pence,
                quantity: 1,
            },
            success_url: self.success_url(),
            cancel_url: format!("{}/services", self.base_url()),
            customer_email: checkout.customer_email.clone(),
            metadata: vec![
                ("packageId".to_string(), package.id.to_string()),
                ("packageName".to_string(), package.name.to_string()),
            ],
        })
    }

    fn custom_mix_spec(&self, checkout: &CustomMixCheckout) -> AppResult<CheckoutSessionSpec> {
        let mix_name = checkout.mix_name.trim();
        if mix_name.is_empty() {
            return Err(AppError::Validation(
                "Missing required field: mixName".to_string(),
            ));
        }
        if checkout.ingredient_names.is_empty() {
            return Err(AppError::Validation(
                "A custom mix needs at least one ingredient".to_string(),
            ));
        }

        let ingredient_list = checkout.ingredient_names.join(", ");
        let description = format!(
            "Custom Mix: {} - Ingredients: {} ({} calories)",
            mix_name, ingredient_list, checkout.total_calories
        );

        Ok(CheckoutSessionSpec {
            line_item: CheckoutLineItem {
                name: mix_name.to_string(),
                description,
                // Flat price regardless of ingredient count; configurable
                unit_amount_pence: self.config.stripe.custom_mix_price_pence,
                quantity: 1,
            },
            success_url: self.success_url(),
            cancel_url: format!("{}/ingredients", self.base_url()),
            customer_email: None,
            metadata: vec![
                ("mixName".to_string(), mix_name.to_string()),
                ("ingredients".to_string(), ingredient_list),
                (
                    "totalCalories".to_string(),
                    checkout.total_calories.to_string(),
                ),
            ],
        })
    }

    fn base_url(&self) -> &str {
        self.config.site.base_url.trim_end_matches('/')
    }

    fn success_url(&self) -> String {
        // {CHECKOUT_SESSION_ID} is substituted by the provider
        format!(
            "{}/order-success?session_id={{CHECKOUT_SESSION_ID}}",
            self.base_url()
        )
    }
}
