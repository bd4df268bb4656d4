use crate::build_estimation::domain::Category;
use crate::shared::error::BuildError;

/// A request to put component `component_id` into `category`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub category: Category,
    pub component_id: String,
}

impl Selection {
    pub fn new(category: Category, component_id: impl Into<String>) -> Self {
        Self {
            category,
            component_id: component_id.into(),
        }
    }
}

impl std::str::FromStr for Selection {
    type Err = BuildError;

    /// Parses `CATEGORY=ID`, e.g. `gpu=rtx-4070-super`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| BuildError::InvalidSelection {
            input: s.to_string(),
            reason,
        };

        let (category, id) = s
            .split_once('=')
            .ok_or_else(|| invalid("missing '='".to_string()))?;

        let category: Category = category
            .parse()
            .map_err(|_| invalid(format!("unknown category '{}'", category.trim())))?;

        let id = id.trim();
        if id.is_empty() {
            return Err(invalid("component id is empty".to_string()));
        }

        Ok(Self::new(category, id))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.category, self.component_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_selection_from_str() {
        let selection = Selection::from_str("gpu=rtx-4070-super").unwrap();
        assert_eq!(selection.category, Category::Graphics);
        assert_eq!(selection.component_id, "rtx-4070-super");
    }

    #[test]
    fn test_selection_from_str_trims_whitespace() {
        let selection = Selection::from_str(" power-supply = psu-750-gold ").unwrap();
        assert_eq!(selection.category, Category::PowerSupply);
        assert_eq!(selection.component_id, "psu-750-gold");
    }

    #[test]
    fn test_selection_missing_equals() {
        let err = Selection::from_str("gpu").unwrap_err();
        assert!(err.to_string().contains("missing '='"));
    }

    #[test]
    fn test_selection_unknown_category() {
        let err = Selection::from_str("mouse=mx-master").unwrap_err();
        assert!(matches!(err, BuildError::InvalidSelection { .. }));
        assert!(err.to_string().contains("unknown category 'mouse'"));
    }

    #[test]
    fn test_selection_empty_id() {
        let err = Selection::from_str("cpu=").unwrap_err();
        assert!(err.to_string().contains("component id is empty"));
    }

    #[test]
    fn test_selection_display_uses_canonical_category() {
        let selection = Selection::from_str("ram=ddr5-32-6000").unwrap();
        assert_eq!(selection.to_string(), "memory=ddr5-32-6000");
    }
}
