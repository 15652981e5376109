//! The hierarchical rollup at the heart of the crate: events grouped by year
//! and awards grouped by event are folded into category counters at three
//! nested scopes, each scope emitting one document. Year counters are the sum
//! of the year's event counters, overall counters the sum of the year
//! counters; the rollup is a single upward `merge` rather than three copies
//! of the counting loop.

use std::collections::BTreeMap;

use crate::{
    document::{event_doc_id, overall_doc_id, year_doc_id, Document},
    model::{Award, AwardType, Event, EventType, Team},
};

/// Aggregation granularity of an emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Event,
    Year,
    Overall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScopedDocument {
    pub scope: Scope,
    pub document: Document,
}

/// Sparse counters for one aggregation scope. Maps are keyed by whatever
/// type codes actually occur, so absent categories never materialize as
/// zero-valued fields.
#[derive(Debug, Clone, Default)]
struct ScopeCounters {
    award_types: BTreeMap<AwardType, u64>,
    event_award_types: BTreeMap<(EventType, AwardType), u64>,
    event_types: BTreeMap<EventType, u64>,
    bb_count: u64,
    divwin_count: u64,
    cmpwin_count: u64,
}

impl ScopeCounters {
    fn record_award(&mut self, award: &Award) {
        *self.award_types.entry(award.award_type).or_default() += 1;
        *self
            .event_award_types
            .entry((award.event_type, award.award_type))
            .or_default() += 1;
        if award.award_type.is_blue_banner() {
            self.bb_count += 1;
        }
        // Division and championship wins are mutually exclusive per award.
        if award.award_type == AwardType::WINNER {
            if award.event_type == EventType::CMP_DIVISION {
                self.divwin_count += 1;
            } else if award.event_type == EventType::CMP_FINALS {
                self.cmpwin_count += 1;
            }
        }
    }

    fn record_event(&mut self, event_type: EventType) {
        *self.event_types.entry(event_type).or_default() += 1;
    }

    /// Fold a child scope into this one. Event counters merge into the
    /// year, year counters into the overall.
    fn merge(&mut self, child: &ScopeCounters) {
        for (award_type, count) in &child.award_types {
            *self.award_types.entry(*award_type).or_default() += count;
        }
        for (key, count) in &child.event_award_types {
            *self.event_award_types.entry(*key).or_default() += count;
        }
        for (event_type, count) in &child.event_types {
            *self.event_types.entry(*event_type).or_default() += count;
        }
        self.bb_count += child.bb_count;
        self.divwin_count += child.divwin_count;
        self.cmpwin_count += child.cmpwin_count;
    }

    fn write_award_fields(&self, doc: &mut Document) {
        for (award_type, count) in &self.award_types {
            doc.number(format!("award_{}_count", award_type), *count as f64);
        }
        for ((event_type, award_type), count) in &self.event_award_types {
            doc.number(
                format!("event_award_{}_{}_count", event_type, award_type),
                *count as f64,
            );
        }
    }

    /// Year and overall documents additionally carry the per-event-type
    /// participation counts and the two win counters.
    fn write_rollup_fields(&self, doc: &mut Document) {
        doc.number("bb_count", self.bb_count as f64)
            .number("divwin_count", self.divwin_count as f64)
            .number("cmpwin_count", self.cmpwin_count as f64);
        self.write_award_fields(doc);
        for (event_type, count) in &self.event_types {
            doc.number(format!("event_{}_count", event_type), *count as f64);
        }
    }
}

/// Walk the grouped records and emit one document per in-season event, one
/// per year containing at least one in-season event, and exactly one overall
/// document. The overall document is always emitted, even for a team with no
/// events, so a team that lost all activity gets its counters reset instead
/// of going stale.
pub fn build_team_documents(
    team: &Team,
    events_by_year: &BTreeMap<u32, Vec<Event>>,
    awards_by_event: &BTreeMap<String, Vec<Award>>,
) -> Vec<ScopedDocument> {
    static NO_AWARDS: Vec<Award> = Vec::new();

    let mut documents = Vec::new();
    let mut overall = ScopeCounters::default();

    for (year, events) in events_by_year {
        let mut year_counters = ScopeCounters::default();

        for event in events {
            if !event.event_type.is_season() {
                continue;
            }
            year_counters.record_event(event.event_type);

            let mut event_counters = ScopeCounters::default();
            let awards = awards_by_event.get(&event.key).unwrap_or(&NO_AWARDS);
            for award in awards {
                event_counters.record_award(award);
            }

            let mut doc =
                Document::with_team_fields(event_doc_id(&team.key, &event.key), team);
            doc.number("year", *year as f64)
                .atom("event_key", event.key.clone())
                .number("bb_count", event_counters.bb_count as f64);
            event_counters.write_award_fields(&mut doc);
            documents.push(ScopedDocument {
                scope: Scope::Event,
                document: doc,
            });

            year_counters.merge(&event_counters);
        }

        // A year whose events were all filtered out produces no document.
        if year_counters.event_types.is_empty() {
            continue;
        }

        let mut doc = Document::with_team_fields(year_doc_id(&team.key, *year), team);
        doc.number("year", *year as f64);
        year_counters.write_rollup_fields(&mut doc);
        documents.push(ScopedDocument {
            scope: Scope::Year,
            document: doc,
        });

        overall.merge(&year_counters);
    }

    let mut doc = Document::with_team_fields(overall_doc_id(&team.key), team);
    overall.write_rollup_fields(&mut doc);
    documents.push(ScopedDocument {
        scope: Scope::Overall,
        document: doc,
    });

    documents
}
