use std::collections::BTreeMap;

use crate::model::{Award, Event};

/// Partition a team's events by year. Every input event lands in exactly one
/// bucket; no filtering happens here (the aggregator owns the season filter).
pub fn events_by_year(events: Vec<Event>) -> BTreeMap<u32, Vec<Event>> {
    let mut grouped: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
    for event in events {
        grouped.entry(event.year).or_default().push(event);
    }
    grouped
}

/// Partition a team's awards by the event that granted them.
pub fn awards_by_event(awards: Vec<Award>) -> BTreeMap<String, Vec<Award>> {
    let mut grouped: BTreeMap<String, Vec<Award>> = BTreeMap::new();
    for award in awards {
        grouped.entry(award.event_key.clone()).or_default().push(award);
    }
    grouped
}
