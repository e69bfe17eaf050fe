//! Trending store backed by an Appwrite document collection.
//!
//! Each document holds one search term with its count and the movie that
//! topped the first search for it. Reads and writes go through the Appwrite
//! REST API with JSON-encoded `queries[]` parameters.

use async_trait::async_trait;
use moviehub_core::config::AppwriteConfig;
use moviehub_core::{Movie, SearchRecord, TrendingEntry, TrendingError, TrendingStore};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

/// Appwrite-backed search-frequency store.
///
/// Counter updates are read-modify-write against the collection, so two
/// clients reporting the same term at the same moment can lose an increment.
#[derive(Debug, Clone)]
pub struct AppwriteTrendingStore {
    client: reqwest::Client,
    endpoint: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    api_key: Option<String>,
    image_base_url: String,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingDocument>,
}

#[derive(Debug, Deserialize)]
struct TrendingDocument {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "searchTerm")]
    search_term: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    movie_id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster_url: String,
}

impl From<TrendingDocument> for SearchRecord {
    fn from(document: TrendingDocument) -> Self {
        Self {
            id: document.id,
            search_term: document.search_term,
            count: document.count,
            movie_id: document.movie_id,
            title: document.title,
            poster_url: document.poster_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AppwriteErrorBody {
    message: Option<String>,
}

fn equal_query(attribute: &str, value: &str) -> String {
    json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

fn limit_query(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

fn order_desc_query(attribute: &str) -> String {
    json!({ "method": "orderDesc", "attribute": attribute }).to_string()
}

fn network_error(e: reqwest::Error) -> TrendingError {
    TrendingError::Network {
        reason: format!("HTTP request failed: {e}"),
    }
}

impl AppwriteTrendingStore {
    /// Creates a store from configuration.
    ///
    /// Returns `None` unless project, database and collection ids are all
    /// configured.
    pub fn from_config(
        config: &AppwriteConfig,
        image_base_url: impl Into<String>,
        limit: usize,
    ) -> Option<Self> {
        let (project, database, collection) = config.collection_path()?;

        Some(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: project.to_string(),
            database_id: database.to_string(),
            collection_id: collection.to_string(),
            api_key: config.api_key.clone(),
            image_base_url: image_base_url.into(),
            limit,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Response-Format", "1.5.0");

        match &self.api_key {
            Some(key) => builder.header("X-Appwrite-Key", key),
            None => builder,
        }
    }

    /// Turns a non-success response into `TrendingError::Backend`, keeping
    /// the datastore's own message when it sent one.
    async fn check_status(response: Response) -> Result<Response, TrendingError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AppwriteErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);

        Err(TrendingError::Backend {
            reason: format!("HTTP {}: {}", status.as_u16(), message),
        })
    }

    async fn list_documents(
        &self,
        queries: &[String],
    ) -> Result<Vec<TrendingDocument>, TrendingError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();

        let response = self
            .request(Method::GET, &self.documents_url())
            .query(&params)
            .send()
            .await
            .map_err(network_error)?;

        let list: DocumentList = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| TrendingError::Parse {
                reason: format!("JSON parsing failed: {e}"),
            })?;

        Ok(list.documents)
    }

    async fn increment(&self, document: &TrendingDocument) -> Result<(), TrendingError> {
        let url = format!("{}/{}", self.documents_url(), document.id);
        let response = self
            .request(Method::PATCH, &url)
            .json(&json!({ "data": { "count": document.count + 1 } }))
            .send()
            .await
            .map_err(network_error)?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn create(&self, query: &str, top_movie: &Movie) -> Result<(), TrendingError> {
        let response = self
            .request(Method::POST, &self.documents_url())
            .json(&json!({
                "documentId": "unique()",
                "data": {
                    "searchTerm": query,
                    "count": 1,
                    "movie_id": top_movie.id,
                    "title": top_movie.title,
                    "poster_url": top_movie.poster_url(&self.image_base_url),
                }
            }))
            .send()
            .await
            .map_err(network_error)?;

        Self::check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl TrendingStore for AppwriteTrendingStore {
    async fn report_search(&self, query: &str, top_movie: &Movie) -> Result<(), TrendingError> {
        let existing = self
            .list_documents(&[equal_query("searchTerm", query)])
            .await?;

        match existing.first() {
            Some(document) => {
                tracing::debug!(
                    "Incrementing search count for {:?} to {}",
                    query,
                    document.count + 1
                );
                self.increment(document).await
            }
            None => {
                tracing::debug!("Creating search record for {:?}", query);
                self.create(query, top_movie).await
            }
        }
    }

    async fn trending(&self) -> Result<Vec<TrendingEntry>, TrendingError> {
        let documents = self
            .list_documents(&[limit_query(self.limit), order_desc_query("count")])
            .await?;

        let mut records: Vec<SearchRecord> = documents.into_iter().map(Into::into).collect();
        // Stable sort: equal counts keep the order the datastore returned.
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(self.limit);

        Ok(records.iter().map(SearchRecord::to_trending_entry).collect())
    }
}
