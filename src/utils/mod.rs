//! Utility functions used across the application.
//!
//! - [`alias_generator`] - Random alias candidate generation
//! - [`db_error`] - Classification of PostgreSQL constraint violations
//! - [`validation`] - Target URL and alias validation

pub mod alias_generator;
pub mod db_error;
pub mod validation;
