use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{LatLng, Team};

/// A typed field value as understood by the document-index service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Number(f64),
    Text(String),
    /// Stored verbatim, never tokenized. Used for exact-match ids.
    Atom(String),
    Geo(LatLng),
}

/// A document keyed by id with a sparse, deterministically ordered field map.
/// Re-running aggregation on unchanged input produces a byte-identical
/// document, so puts are idempotent overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn number(&mut self, name: impl Into<String>, value: impl Into<f64>) -> &mut Self {
        self.fields.insert(name.into(), FieldValue::Number(value.into()));
        self
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    pub fn atom(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), FieldValue::Atom(value.into()));
        self
    }

    pub fn geo(&mut self, name: impl Into<String>, value: LatLng) -> &mut Self {
        self.fields.insert(name.into(), FieldValue::Geo(value));
        self
    }

    /// The fields every team-scoped document inherits: number, name,
    /// nickname, and the location geo point when one is known.
    pub fn with_team_fields(doc_id: impl Into<String>, team: &Team) -> Self {
        let mut doc = Self::new(doc_id);
        doc.number("number", team.team_number as f64)
            .text("name", team.name.clone())
            .text("nickname", team.nickname.clone());
        if let Some(location) = team.location {
            doc.geo("location", location);
        }
        doc
    }
}

/// Deterministic document ids, shared between writers so re-runs overwrite
/// rather than duplicate.
pub fn overall_doc_id(team_key: &str) -> String {
    team_key.to_string()
}

pub fn year_doc_id(team_key: &str, year: u32) -> String {
    format!("{}_{}", team_key, year)
}

pub fn event_doc_id(team_key: &str, event_key: &str) -> String {
    format!("{}_{}", team_key, event_key)
}
