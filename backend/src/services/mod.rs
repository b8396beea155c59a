//! Business services for checkout and booking intake

pub mod booking;
pub mod checkout;
