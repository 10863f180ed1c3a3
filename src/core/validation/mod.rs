//! Validation and filtering toolkit
//!
//! Explicit, typed validation functions that entity constructors compose in
//! a fixed order. A failing rule short-circuits construction and reports the
//! specific constraint violated. Filters normalize input before validation.

pub mod filters;
pub mod validators;
