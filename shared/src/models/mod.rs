//! Domain models for the Velvet Pour catering platform

mod booking;
mod checkout;
mod ingredient;
mod mix;
mod package;

pub use booking::*;
pub use checkout::*;
pub use ingredient::*;
pub use mix::*;
pub use package::*;
