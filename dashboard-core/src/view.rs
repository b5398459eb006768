use crate::incident::{Incident, Severity};
use crate::store::IncidentStore;
use serde::{Deserialize, Serialize};

/// What the severity filter select is set to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Lenient parse for the filter `<select>` values; fallback `All`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "low" => SeverityFilter::Only(Severity::Low),
            "medium" => SeverityFilter::Only(Severity::Medium),
            "high" => SeverityFilter::Only(Severity::High),
            _ => SeverityFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(severity) => severity.as_str(),
        }
    }

    fn admits(&self, incident: &Incident) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(severity) => incident.severity == *severity,
        }
    }
}

/// Direction of the date sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSort {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl DateSort {
    /// Lenient parse for the sort `<select>` values; fallback `NewestFirst`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "oldest" => DateSort::OldestFirst,
            _ => DateSort::NewestFirst,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateSort::NewestFirst => "newest",
            DateSort::OldestFirst => "oldest",
        }
    }
}

/// Derive the display list: filter by severity, then stable-sort by report
/// instant. The store is never mutated; ties keep the store's relative
/// order. Recomputed on every render, so it must stay pure.
pub fn visible_incidents(
    store: &IncidentStore,
    filter: SeverityFilter,
    sort: DateSort,
) -> Vec<Incident> {
    let mut rows: Vec<Incident> = store
        .incidents()
        .iter()
        .filter(|incident| filter.admits(incident))
        .cloned()
        .collect();

    rows.sort_by(|a, b| match sort {
        DateSort::NewestFirst => b.reported_at.cmp(&a.reported_at),
        DateSort::OldestFirst => a.reported_at.cmp(&b.reported_at),
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::instant;

    fn seeded() -> IncidentStore {
        IncidentStore::seeded()
    }

    #[test]
    fn filter_all_returns_every_record() {
        let store = seeded();
        let rows = visible_incidents(&store, SeverityFilter::All, DateSort::NewestFirst);
        assert_eq!(rows.len(), store.len());
    }

    #[test]
    fn filter_only_returns_exactly_matching_subset() {
        let store = seeded();
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            let rows = visible_incidents(
                &store,
                SeverityFilter::Only(severity),
                DateSort::NewestFirst,
            );
            assert!(rows.iter().all(|i| i.severity == severity));
            let expected = store
                .incidents()
                .iter()
                .filter(|i| i.severity == severity)
                .count();
            assert_eq!(rows.len(), expected);
        }
    }

    #[test]
    fn newest_first_orders_descending() {
        let store = seeded();
        let rows = visible_incidents(&store, SeverityFilter::All, DateSort::NewestFirst);
        assert!(rows.windows(2).all(|w| w[0].reported_at >= w[1].reported_at));
        assert_eq!(rows[0].title, "LLM Hallucination in Critical Info");
    }

    #[test]
    fn oldest_first_orders_ascending() {
        let store = seeded();
        let rows = visible_incidents(&store, SeverityFilter::All, DateSort::OldestFirst);
        assert!(rows.windows(2).all(|w| w[0].reported_at <= w[1].reported_at));
        assert_eq!(rows[0].title, "Biased Recommendation Algorithm");
    }

    #[test]
    fn equal_instants_keep_store_order() {
        let shared = instant(1_742_032_800);
        let store = IncidentStore::from_incidents(vec![
            Incident::new(1, "first in store", "d", Severity::Low, shared),
            Incident::new(2, "second in store", "d", Severity::Low, shared),
        ]);

        for sort in [DateSort::NewestFirst, DateSort::OldestFirst] {
            let rows = visible_incidents(&store, SeverityFilter::All, sort);
            let ids: Vec<u64> = rows.iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![1, 2], "stability violated under {sort:?}");
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        let store = seeded();
        let first = visible_incidents(&store, SeverityFilter::Only(Severity::High), DateSort::OldestFirst);
        let second = visible_incidents(&store, SeverityFilter::Only(Severity::High), DateSort::OldestFirst);
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_does_not_mutate_the_store() {
        let store = seeded();
        let before = store.clone();
        let _ = visible_incidents(&store, SeverityFilter::Only(Severity::Low), DateSort::OldestFirst);
        assert_eq!(store, before);
    }

    #[test]
    fn parse_round_trips_select_values() {
        assert_eq!(SeverityFilter::parse("All"), SeverityFilter::All);
        assert_eq!(
            SeverityFilter::parse("High"),
            SeverityFilter::Only(Severity::High)
        );
        assert_eq!(SeverityFilter::parse("garbage"), SeverityFilter::All);
        assert_eq!(DateSort::parse("oldest"), DateSort::OldestFirst);
        assert_eq!(DateSort::parse("newest"), DateSort::NewestFirst);
        assert_eq!(DateSort::parse(""), DateSort::NewestFirst);
    }
}
