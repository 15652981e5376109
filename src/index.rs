use std::{collections::BTreeMap, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;

use crate::{
    document::Document,
    error::{IndexError, Result},
};

/// Seam to the document-index service. Injected into the indexer so tests
/// can substitute an in-memory double.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Full replace of the document at its id; never merges with a prior
    /// document's fields.
    async fn put(&self, index: &str, document: &Document) -> Result<()>;

    async fn delete(&self, index: &str, doc_id: &str) -> Result<()>;
}

/// HTTP-backed index client. Documents are addressed as
/// `{endpoint}/indexes/{index}/documents/{doc_id}`.
pub struct HttpSearchIndex {
    endpoint: String,
    headers: BTreeMap<String, String>,
    client: Client,
}

impl HttpSearchIndex {
    pub fn new(
        endpoint: impl Into<String>,
        headers: BTreeMap<String, String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build http client");
        Self {
            endpoint: endpoint.into(),
            headers,
            client,
        }
    }

    fn resolved_endpoint(&self) -> String {
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("http://{}", endpoint)
        }
    }

    fn document_url(&self, index: &str, doc_id: &str) -> String {
        format!(
            "{}/indexes/{}/documents/{}",
            self.resolved_endpoint(),
            index,
            doc_id
        )
    }
}

#[async_trait]
impl SearchIndex for HttpSearchIndex {
    async fn put(&self, index: &str, document: &Document) -> Result<()> {
        let mut request = self
            .client
            .put(self.document_url(index, &document.doc_id))
            .json(&document.fields);
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }
        let response = request.send().await.map_err(|err| IndexError::Write {
            index: index.to_string(),
            doc_id: document.doc_id.clone(),
            message: err.to_string(),
        })?;
        if !response.status().is_success() {
            return Err(IndexError::Write {
                index: index.to_string(),
                doc_id: document.doc_id.clone(),
                message: format!("unexpected status {}", response.status()),
            });
        }
        Ok(())
    }

    async fn delete(&self, index: &str, doc_id: &str) -> Result<()> {
        let mut request = self.client.delete(self.document_url(index, doc_id));
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }
        let response = request.send().await.map_err(|err| IndexError::Delete {
            index: index.to_string(),
            doc_id: doc_id.to_string(),
            message: err.to_string(),
        })?;
        if !response.status().is_success() {
            return Err(IndexError::Delete {
                index: index.to_string(),
                doc_id: doc_id.to_string(),
                message: format!("unexpected status {}", response.status()),
            });
        }
        Ok(())
    }
}

/// In-memory index keyed by namespace then document id. Used as a test
/// double and for embedded runs without an index service.
#[derive(Default)]
pub struct MemoryIndex {
    indexes: Mutex<BTreeMap<String, BTreeMap<String, Document>>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: &str, doc_id: &str) -> Option<Document> {
        self.indexes
            .lock()
            .get(index)
            .and_then(|docs| docs.get(doc_id).cloned())
    }

    pub fn documents(&self, index: &str) -> Vec<Document> {
        self.indexes
            .lock()
            .get(index)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, index: &str) -> usize {
        self.indexes
            .lock()
            .get(index)
            .map(BTreeMap::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, index: &str) -> bool {
        self.len(index) == 0
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn put(&self, index: &str, document: &Document) -> Result<()> {
        self.indexes
            .lock()
            .entry(index.to_string())
            .or_default()
            .insert(document.doc_id.clone(), document.clone());
        Ok(())
    }

    async fn delete(&self, index: &str, doc_id: &str) -> Result<()> {
        if let Some(docs) = self.indexes.lock().get_mut(index) {
            docs.remove(doc_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_index_put_replaces_whole_document() {
        let index = MemoryIndex::new();
        let mut first = Document::new("frc254");
        first.number("bb_count", 3.0).text("name", "old");
        index.put("team", &first).await.unwrap();

        let mut second = Document::new("frc254");
        second.number("bb_count", 1.0);
        index.put("team", &second).await.unwrap();

        let stored = index.get("team", "frc254").expect("document present");
        assert_eq!(stored, second);
        assert!(!stored.fields.contains_key("name"));
    }

    #[tokio::test]
    async fn memory_index_delete_is_unconditional() {
        let index = MemoryIndex::new();
        index.delete("team", "missing").await.unwrap();
        let doc = Document::new("frc254");
        index.put("team", &doc).await.unwrap();
        index.delete("team", "frc254").await.unwrap();
        assert!(index.is_empty("team"));
    }

    #[test]
    fn endpoints_without_a_scheme_default_to_http() {
        let index = HttpSearchIndex::new(
            "localhost:7700/",
            BTreeMap::new(),
            Duration::from_secs(5),
        );
        assert_eq!(
            index.document_url("team", "frc254"),
            "http://localhost:7700/indexes/team/documents/frc254"
        );
    }

    #[test]
    fn https_endpoints_are_left_alone() {
        let index = HttpSearchIndex::new(
            "https://search.example.com",
            BTreeMap::new(),
            Duration::from_secs(5),
        );
        assert_eq!(
            index.document_url("teamYear", "frc254_2020"),
            "https://search.example.com/indexes/teamYear/documents/frc254_2020"
        );
    }
}
