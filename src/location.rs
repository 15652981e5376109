use tracing::debug;

use crate::{
    document::Document,
    error::Result,
    index::SearchIndex,
    model::{Event, Team},
};

/// Write the team's point-location document, keyed by the team key. A team
/// without a normalized location produces no write; any stale document is
/// left as-is rather than deleted.
pub async fn update_team_location(
    index: &dyn SearchIndex,
    index_name: &str,
    team: &Team,
) -> Result<()> {
    let Some(location) = team.location else {
        debug!(team = %team.key, "no normalized location, skipping location write");
        return Ok(());
    };
    let mut doc = Document::new(team.key.clone());
    doc.geo("location", location);
    index.put(index_name, &doc).await
}

pub async fn remove_team_location(
    index: &dyn SearchIndex,
    index_name: &str,
    team_key: &str,
) -> Result<()> {
    index.delete(index_name, team_key).await
}

/// Event location documents additionally carry the event's year so lookups
/// can be restricted to a season.
pub async fn update_event_location(
    index: &dyn SearchIndex,
    index_name: &str,
    event: &Event,
) -> Result<()> {
    let Some(location) = event.location else {
        debug!(event = %event.key, "no normalized location, skipping location write");
        return Ok(());
    };
    let mut doc = Document::new(event.key.clone());
    doc.number("year", event.year as f64).geo("location", location);
    index.put(index_name, &doc).await
}

pub async fn remove_event_location(
    index: &dyn SearchIndex,
    index_name: &str,
    event_key: &str,
) -> Result<()> {
    index.delete(index_name, event_key).await
}
