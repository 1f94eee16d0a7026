use std::str::FromStr;

use crate::error::AppError;
use crate::models::entity::EntityKind;

/// Resolves a path segment into a known entity kind before any storage
/// access. An unknown kind is a 400, distinct from a missing record's 404.
pub fn parse_entity_kind(raw: &str) -> Result<EntityKind, AppError> {
    EntityKind::from_str(raw)
        .map_err(|_| AppError::BadRequest(format!("Unknown entity kind: {}", raw)))
}

/// Trims a text filter, dropping it entirely when empty.
pub fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entity_kind_accepts_known_kinds() {
        assert!(matches!(
            parse_entity_kind("calibrations"),
            Ok(EntityKind::Calibrations)
        ));
    }

    #[test]
    fn parse_entity_kind_rejects_unknown_kinds() {
        assert!(matches!(
            parse_entity_kind("widgets"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn normalize_filter_trims_and_drops_empty() {
        assert_eq!(normalize_filter(Some("  ali  ".into())), Some("ali".into()));
        assert_eq!(normalize_filter(Some("   ".into())), None);
        assert_eq!(normalize_filter(None), None);
    }
}
