use async_trait::async_trait;

use crate::{
    error::Result,
    model::{Award, Event},
};

/// Data-access seam supplying the two flat record collections for a team.
/// Implementations may return an empty list but must not return truncated
/// results without signaling an error.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn events_for_team(&self, team_key: &str) -> Result<Vec<Event>>;

    async fn awards_for_team(&self, team_key: &str) -> Result<Vec<Award>>;
}
