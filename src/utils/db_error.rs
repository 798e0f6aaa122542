//! Classification of PostgreSQL unique constraint violations.

/// Constraint guarding `mappings.target_url`.
pub const TARGET_URL_CONSTRAINT: &str = "mappings_target_url_key";

/// Constraint guarding `mappings.alias`.
pub const ALIAS_CONSTRAINT: &str = "mappings_alias_key";

/// Which uniqueness rule an insert broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    TargetUrl,
    Alias,
}

/// Inspects a driver error for a violation of one of the mapping constraints.
///
/// Returns `None` for every other error, including unique violations on
/// constraints this module does not know about.
pub fn unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    classify_constraint(db_err.constraint()?)
}

fn classify_constraint(constraint: &str) -> Option<UniqueViolation> {
    match constraint {
        TARGET_URL_CONSTRAINT => Some(UniqueViolation::TargetUrl),
        ALIAS_CONSTRAINT => Some(UniqueViolation::Alias),
        _ => None,
    }
}
