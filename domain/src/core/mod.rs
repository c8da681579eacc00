//! Core domain types shared across modules

pub mod error;
pub mod model;

pub use self::error::DomainError;
pub use self::model::Model;
