//! Restriction Entity
//!
//! A named dietary constraint with a category and optional severity.

use serde::{Deserialize, Serialize};

use super::entity::{Draft, Entity};

/// Restriction category (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionType {
    Allergy,
    #[default]
    Dietary,
    Preference,
}

impl RestrictionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestrictionType::Allergy => "allergy",
            RestrictionType::Dietary => "dietary",
            RestrictionType::Preference => "preference",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "allergy" => RestrictionType::Allergy,
            "preference" => RestrictionType::Preference,
            _ => RestrictionType::Dietary,
        }
    }
}

/// How strictly a restriction applies (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "mild" => Severity::Mild,
            "severe" => Severity::Severe,
            _ => Severity::Moderate,
        }
    }
}

/// A dietary restriction
///
/// An absent severity is a valid state of its own, distinct from all three
/// levels; it only affects display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub id: u32,
    pub name: String,
    pub kind: RestrictionType,
    pub severity: Option<Severity>,
}

impl Entity for Restriction {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload for a restriction, excluding the id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestrictionDraft {
    pub name: String,
    pub kind: RestrictionType,
    pub severity: Option<Severity>,
}

impl RestrictionDraft {
    pub fn new(name: impl Into<String>, kind: RestrictionType, severity: Severity) -> Self {
        Self {
            name: name.into(),
            kind,
            severity: Some(severity),
        }
    }
}

impl Draft for RestrictionDraft {
    type Entry = Restriction;

    fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    fn build(self, id: u32) -> Restriction {
        Restriction {
            id,
            name: self.name.trim().to_string(),
            kind: self.kind,
            severity: self.severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&RestrictionType::Allergy).unwrap(),
            "\"allergy\""
        );
        assert_eq!(
            serde_json::to_string(&Severity::Severe).unwrap(),
            "\"severe\""
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"mild\"").unwrap(),
            Severity::Mild
        );
    }

    #[test]
    fn test_type_round_trip() {
        assert_eq!(RestrictionType::Preference.as_str(), "preference");
        assert_eq!(
            RestrictionType::from_str("allergy"),
            RestrictionType::Allergy
        );
        // Unknown input falls back to the form default
        assert_eq!(RestrictionType::from_str("???"), RestrictionType::Dietary);
    }

    #[test]
    fn test_draft_keeps_absent_severity() {
        let draft = RestrictionDraft {
            name: "Gluten".to_string(),
            kind: RestrictionType::Dietary,
            severity: None,
        };
        let restriction = draft.build(1);
        assert_eq!(restriction.severity, None);
    }
}
