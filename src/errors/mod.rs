//! Error handling for the Chahar Barg backend.

pub mod domain;

pub use domain::DomainError;
