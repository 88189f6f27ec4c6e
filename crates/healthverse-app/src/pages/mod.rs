//! Per-role screen models.
//!
//! Each screen owns its local state, seeded from `mock_data`, and exposes the
//! operations its controls trigger. None of this state outlives the screen;
//! only the session is persisted.

pub mod doctor;
pub mod patient;
pub mod pharmacy;

use healthverse_contracts::error::{HealthverseError, HealthverseResult};

/// Next identifier of the form `{prefix}{n}`, one past the highest numeric
/// suffix already in use.
pub(crate) fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let highest = existing
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{}", highest + 1)
}

/// Case-insensitive substring match used by every search box.
pub(crate) fn matches_query(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.trim().to_lowercase())
}

pub(crate) fn require(field: &str, value: &str) -> HealthverseResult<()> {
    if value.trim().is_empty() {
        return Err(HealthverseError::Validation {
            reason: format!("{field} is required"),
        });
    }
    Ok(())
}

pub(crate) fn not_found(kind: &str, id: &str) -> HealthverseError {
    HealthverseError::NotFound {
        kind: kind.to_string(),
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{matches_query, next_id};

    #[test]
    fn next_id_skips_past_highest_suffix() {
        assert_eq!(next_id("m", ["m1", "m2", "m3"].into_iter()), "m4");
        assert_eq!(next_id("m", ["m1", "m7"].into_iter()), "m8");
        assert_eq!(next_id("med", ["med2", "m9", "medx"].into_iter()), "med3");
        assert_eq!(next_id("ord", std::iter::empty()), "ord1");
    }

    #[test]
    fn query_matching_ignores_case_and_padding() {
        assert!(matches_query("Lisinopril", " lisi "));
        assert!(matches_query("Vitamin D", ""));
        assert!(!matches_query("Ibuprofen", "aspirin"));
    }
}
