use crate::draft::ValidationError;
use crate::incident::{seed_incidents, Incident, Severity};
use chrono::{DateTime, Utc};

/// The authoritative ordered sequence of incidents for one dashboard.
///
/// New records go to the head of the sequence; nothing is ever removed.
/// Ids come from a monotonic counter so uniqueness holds no matter how
/// quickly records are created.
#[derive(Clone, Debug, PartialEq)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
    next_id: u64,
}

impl IncidentStore {
    /// Store preloaded with the three fixed records.
    pub fn seeded() -> Self {
        Self::from_incidents(seed_incidents())
    }

    /// Store over arbitrary records; the id counter resumes past the
    /// largest id present.
    pub fn from_incidents(incidents: Vec<Incident>) -> Self {
        let next_id = incidents.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self { incidents, next_id }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Create a record reported now and insert it at the head.
    ///
    /// Both text fields must be non-empty after trimming; a rejected add
    /// leaves the store untouched. Returns the fresh id.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        severity: Severity,
    ) -> Result<u64, ValidationError> {
        self.add_at(title, description, severity, Utc::now())
    }

    /// [`add`](Self::add) with an explicit report instant.
    pub fn add_at(
        &mut self,
        title: &str,
        description: &str,
        severity: Severity,
        reported_at: DateTime<Utc>,
    ) -> Result<u64, ValidationError> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.incidents
            .insert(0, Incident::new(id, title, description, severity, reported_at));
        Ok(id)
    }

    /// Flip the details flag of the matching record. Ids are never removed,
    /// so an absent id should not happen; it is a silent no-op if it does.
    pub fn toggle_details(&mut self, id: u64) {
        if let Some(incident) = self.incidents.iter_mut().find(|i| i.id == id) {
            incident.show_details = !incident.show_details;
        }
    }
}
