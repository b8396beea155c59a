//! HTTP request handlers

pub mod booking;
pub mod catalog;
pub mod checkout;
pub mod health;
