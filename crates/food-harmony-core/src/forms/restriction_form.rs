//! Restriction Form Session
//!
//! Draft state for the dietary-restrictions add/edit form. The form always
//! submits a concrete severity (default Moderate); an absent severity can
//! only enter the store through data, never through this form.

use crate::domain::{Restriction, RestrictionDraft, RestrictionType, Severity};

use super::FormMode;

/// What a successful submit asks the store to do
#[derive(Debug, Clone, PartialEq)]
pub enum RestrictionFormOutput {
    Created(RestrictionDraft),
    Updated(u32, RestrictionDraft),
}

/// Session state for the restriction add/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestrictionFormSession {
    mode: FormMode,
    pub name: String,
    pub kind: RestrictionType,
    pub severity: Severity,
}

impl RestrictionFormSession {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Open a blank create form with the default type and severity
    pub fn open_create(&mut self) {
        *self = Self {
            mode: FormMode::Creating,
            ..Self::default()
        };
    }

    /// Open an edit form pre-populated from `restriction`; an absent
    /// severity shows as Moderate, as the original form does
    pub fn open_edit(&mut self, restriction: &Restriction) {
        *self = Self {
            mode: FormMode::Editing(restriction.id),
            name: restriction.name.clone(),
            kind: restriction.kind,
            severity: restriction.severity.unwrap_or_default(),
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Commit the draft. `None` when the trimmed name is empty (form stays
    /// open); otherwise resets to defaults and returns to idle.
    pub fn submit(&mut self) -> Option<RestrictionFormOutput> {
        if self.name.trim().is_empty() {
            return None;
        }
        let draft = RestrictionDraft {
            name: self.name.clone(),
            kind: self.kind,
            severity: Some(self.severity),
        };
        let output = match self.mode {
            FormMode::Idle => return None,
            FormMode::Creating => RestrictionFormOutput::Created(draft),
            FormMode::Editing(id) => RestrictionFormOutput::Updated(id, draft),
        };
        *self = Self::default();
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_form() {
        let mut form = RestrictionFormSession::default();
        form.open_create();
        assert_eq!(form.kind, RestrictionType::Dietary);
        assert_eq!(form.severity, Severity::Moderate);
    }

    #[test]
    fn test_edit_prefills_and_substitutes_missing_severity() {
        let restriction = Restriction {
            id: 9,
            name: "Gluten".to_string(),
            kind: RestrictionType::Dietary,
            severity: None,
        };
        let mut form = RestrictionFormSession::default();
        form.open_edit(&restriction);

        assert_eq!(form.mode(), FormMode::Editing(9));
        assert_eq!(form.name, "Gluten");
        assert_eq!(form.severity, Severity::Moderate);
    }

    #[test]
    fn test_submit_resets_and_targets_id() {
        let restriction = Restriction {
            id: 2,
            name: "Dairy".to_string(),
            kind: RestrictionType::Allergy,
            severity: Some(Severity::Mild),
        };
        let mut form = RestrictionFormSession::default();
        form.open_edit(&restriction);
        form.severity = Severity::Severe;

        match form.submit() {
            Some(RestrictionFormOutput::Updated(id, draft)) => {
                assert_eq!(id, 2);
                assert_eq!(draft.severity, Some(Severity::Severe));
            }
            other => panic!("expected an update, got {:?}", other),
        }
        assert_eq!(form.mode(), FormMode::Idle);
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_empty_name_refused() {
        let mut form = RestrictionFormSession::default();
        form.open_create();
        assert!(form.submit().is_none());
        assert_eq!(form.mode(), FormMode::Creating);
    }
}
