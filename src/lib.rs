//! Hierarchical statistical rollups for competition teams, synchronized into
//! a document search index.
//!
//! Two flat record collections — a team's events and its awards — are
//! regrouped into an overall → year → event tree, category counters are
//! accumulated at every level, and one document per scope is written to the
//! index service, alongside point-location documents for teams and event
//! venues.

pub mod aggregate;
pub mod config;
pub mod document;
pub mod error;
pub mod group;
pub mod index;
pub mod indexer;
pub mod location;
pub mod logging;
pub mod model;
pub mod source;

pub use aggregate::{build_team_documents, Scope, ScopedDocument};
pub use config::{Config, IndexNames};
pub use document::{Document, FieldValue};
pub use error::{IndexError, Result};
pub use index::{HttpSearchIndex, MemoryIndex, SearchIndex};
pub use indexer::TeamIndexer;
pub use model::{Award, AwardType, Event, EventType, LatLng, Team};
pub use source::RecordSource;
