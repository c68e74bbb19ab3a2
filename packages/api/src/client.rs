//! # HTTP record store
//!
//! [`HttpRecordStore`] implements [`RecordStore`] against the mock REST API:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list` | `GET {base}/userrecord/` |
//! | `create` | `POST {base}/userrecord/` with a JSON [`RecordBody`] |
//! | `update` | `PUT {base}/userrecord/{key}` with a JSON [`RecordBody`] |
//! | `delete` | `DELETE {base}/userrecord/{key}` |
//!
//! Any non-2xx status becomes [`StoreError::Status`], except a 404 on a keyed
//! request which becomes [`StoreError::NotFound`]. There are no retries and no
//! timeouts beyond the transport defaults.

use reqwest::{Client, Response, StatusCode, Url};
use store::{Record, RecordBody, RecordKey, RecordStore, StoreError};

use crate::config::ApiConfig;
use crate::error::{transport_error, ApiError};

#[derive(Clone, Debug)]
pub struct HttpRecordStore {
    client: Client,
    collection: Url,
}

impl HttpRecordStore {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::with_client(Client::builder().build()?, config))
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            collection: config.collection_url(),
        }
    }

    /// `{base}/userrecord/{key}`, with the key percent-encoded as one segment.
    pub fn record_url(&self, key: &RecordKey) -> Url {
        let mut url = self.collection.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(key.as_str());
        }
        url
    }
}

async fn check(response: Response, key: Option<&RecordKey>) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let (StatusCode::NOT_FOUND, Some(key)) = (status, key) {
        return Err(StoreError::NotFound(key.clone()));
    }
    let message = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

impl RecordStore for HttpRecordStore {
    async fn list(&self) -> Result<Vec<Record>, StoreError> {
        tracing::debug!(url = %self.collection, "GET records");
        let response = self
            .client
            .get(self.collection.clone())
            .send()
            .await
            .map_err(transport_error)?;
        check(response, None)
            .await?
            .json::<Vec<Record>>()
            .await
            .map_err(transport_error)
    }

    async fn create(&self, body: &RecordBody) -> Result<Record, StoreError> {
        tracing::debug!(url = %self.collection, "POST record");
        let response = self
            .client
            .post(self.collection.clone())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        check(response, None)
            .await?
            .json::<Record>()
            .await
            .map_err(transport_error)
    }

    async fn update(&self, key: &RecordKey, body: &RecordBody) -> Result<Record, StoreError> {
        let url = self.record_url(key);
        tracing::debug!(%url, "PUT record");
        let response = self
            .client
            .put(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        check(response, Some(key))
            .await?
            .json::<Record>()
            .await
            .map_err(transport_error)
    }

    async fn delete(&self, key: &RecordKey) -> Result<(), StoreError> {
        let url = self.record_url(key);
        tracing::debug!(%url, "DELETE record");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        check(response, Some(key)).await?;
        Ok(())
    }
}
