use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    aggregate::build_team_documents,
    config::Config,
    error::{IndexError, Result},
    group::{awards_by_event, events_by_year},
    index::{HttpSearchIndex, SearchIndex},
    location,
    model::{Event, Team},
    source::RecordSource,
};

/// Orchestrates one team's aggregation run: fetch both record collections
/// concurrently, group, aggregate, and write every scoped document to its
/// configured index namespace.
pub struct TeamIndexer {
    index: Arc<dyn SearchIndex>,
    source: Arc<dyn RecordSource>,
    config: Config,
}

impl TeamIndexer {
    pub fn new(index: Arc<dyn SearchIndex>, source: Arc<dyn RecordSource>, config: Config) -> Self {
        Self {
            index,
            source,
            config,
        }
    }

    /// Wire up against the HTTP index service named in the config.
    pub fn with_http_index(source: Arc<dyn RecordSource>, config: Config) -> Self {
        let index = HttpSearchIndex::new(
            config.endpoint.clone(),
            config.headers.clone(),
            config.timeout(),
        );
        Self::new(Arc::new(index), source, config)
    }

    /// Recompute and overwrite the team's overall, per-year, and per-event
    /// documents. If either fetch fails the run aborts before any write;
    /// a failed write surfaces immediately and documents already written in
    /// this run stay in place (no cross-document transaction).
    pub async fn update_team(&self, team: &Team) -> Result<()> {
        let (events, awards) = tokio::try_join!(
            self.source.events_for_team(&team.key),
            self.source.awards_for_team(&team.key),
        )
        .map_err(|err| match err {
            fetch @ IndexError::Fetch { .. } => fetch,
            other => IndexError::Fetch {
                team: team.key.clone(),
                message: other.to_string(),
            },
        })?;

        let events_by_year = events_by_year(events);
        let awards_by_event = awards_by_event(awards);
        let documents = build_team_documents(team, &events_by_year, &awards_by_event);

        let written = documents.len();
        for scoped in documents {
            let index_name = self.config.indexes.for_scope(scoped.scope);
            debug!(index = index_name, doc_id = %scoped.document.doc_id, "writing document");
            self.index.put(index_name, &scoped.document).await?;
        }
        info!(team = %team.key, documents = written, "team indexes updated");
        Ok(())
    }

    pub async fn update_team_location(&self, team: &Team) -> Result<()> {
        location::update_team_location(
            self.index.as_ref(),
            &self.config.indexes.team_location,
            team,
        )
        .await
    }

    pub async fn remove_team_location(&self, team_key: &str) -> Result<()> {
        location::remove_team_location(
            self.index.as_ref(),
            &self.config.indexes.team_location,
            team_key,
        )
        .await
    }

    pub async fn update_event_location(&self, event: &Event) -> Result<()> {
        location::update_event_location(
            self.index.as_ref(),
            &self.config.indexes.event_location,
            event,
        )
        .await
    }

    pub async fn remove_event_location(&self, event_key: &str) -> Result<()> {
        location::remove_event_location(
            self.index.as_ref(),
            &self.config.indexes.event_location,
            event_key,
        )
        .await
    }
}
