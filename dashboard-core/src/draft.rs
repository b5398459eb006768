use crate::incident::Severity;
use crate::store::IncidentStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only failure in the system: a submit with a missing text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,
    #[error("description is required")]
    EmptyDescription,
}

/// Pending input for a new incident, held apart from the store until a
/// successful submit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl IncidentDraft {
    /// Submit the draft into the store.
    ///
    /// On success the draft resets to `("", "", Low)`. On rejection every
    /// field is left exactly as the user typed it.
    pub fn submit(&mut self, store: &mut IncidentStore) -> Result<u64, ValidationError> {
        let id = store.add(&self.title, &self.description, self.severity)?;
        *self = Self::default();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_empty_low() {
        let draft = IncidentDraft::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.severity, Severity::Low);
    }

    #[test]
    fn successful_submit_resets_the_draft() {
        let mut store = IncidentStore::seeded();
        let mut draft = IncidentDraft {
            title: "Prompt Injection via Support Tickets".into(),
            description: "Crafted ticket text steered the triage model.".into(),
            severity: Severity::High,
        };

        let id = draft.submit(&mut store).expect("submit");
        assert_eq!(store.incidents()[0].id, id);
        assert_eq!(store.incidents()[0].severity, Severity::High);
        assert_eq!(draft, IncidentDraft::default());
    }

    #[test]
    fn rejected_submit_keeps_fields_intact() {
        let mut store = IncidentStore::seeded();
        let mut draft = IncidentDraft {
            title: String::new(),
            description: "described but untitled".into(),
            severity: Severity::Medium,
        };

        let err = draft.submit(&mut store);
        assert_eq!(err, Err(ValidationError::EmptyTitle));
        assert_eq!(store.len(), 3);
        assert_eq!(draft.description, "described but untitled");
        assert_eq!(draft.severity, Severity::Medium);
    }

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "title is required");
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "description is required"
        );
    }
}
