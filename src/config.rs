use std::{collections::BTreeMap, fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    aggregate::Scope,
    error::Result,
};

pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:7700";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Index-service connection settings plus the five index namespace names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub indexes: IndexNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
            indexes: IndexNames::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Names of the five index namespaces the synchronizer writes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexNames {
    pub team: String,
    pub team_year: String,
    pub team_event: String,
    pub team_location: String,
    pub event_location: String,
}

impl Default for IndexNames {
    fn default() -> Self {
        Self {
            team: "team".to_string(),
            team_year: "teamYear".to_string(),
            team_event: "teamEvent".to_string(),
            team_location: "teamLocation".to_string(),
            event_location: "eventLocation".to_string(),
        }
    }
}

impl IndexNames {
    /// The namespace an aggregation document of the given scope lands in.
    pub fn for_scope(&self, scope: Scope) -> &str {
        match scope {
            Scope::Overall => &self.team,
            Scope::Year => &self.team_year,
            Scope::Event => &self.team_event,
        }
    }
}
