//! Clients for external collaborators

pub mod mailer;
pub mod payments;
