//! Shared types and models for the Velvet Pour catering platform
//!
//! This crate contains the static catalogs, pure calculators and validation
//! rules shared between the backend and the browser (via WASM).

pub mod models;
pub mod validation;
pub mod wellness;

pub use models::*;
pub use validation::*;
pub use wellness::*;
