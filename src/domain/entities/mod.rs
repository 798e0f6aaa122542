//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewMapping`] carries caller input, [`Mapping`] is what the store returns.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
