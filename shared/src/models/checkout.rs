//! Checkout request wire types

use serde::{Deserialize, Serialize};

/// A checkout submission: either a fixed package or an ad-hoc custom mix.
///
/// The wire format is untagged; the package variant is tried first, matching
/// the precedence a request carrying both shapes gets on the original site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CheckoutRequest {
    Package(PackageCheckout),
    CustomMix(CustomMixCheckout),
}

/// Checkout of one of the three fixed pricing tiers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageCheckout {
    /// Textual package id; looked up against the catalog at session build
    /// time so an unknown id reports a domain error, not a decode error.
    pub package_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Checkout of a visitor-assembled custom mix
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomMixCheckout {
    pub mix_name: String,
    pub ingredient_names: Vec<String>,
    #[serde(default)]
    pub total_calories: u32,
}
