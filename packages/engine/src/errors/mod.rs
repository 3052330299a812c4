//! Error handling for the Mexican Dice engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
