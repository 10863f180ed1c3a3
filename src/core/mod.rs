//! Core module containing the error taxonomy and the validation toolkit

pub mod error;
pub mod validation;

pub use error::{BistroError, BistroResult, EntityError, RequestError, ValidationError};
