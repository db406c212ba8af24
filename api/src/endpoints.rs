use apiconn_core::{
    models::{join_segments, Segment},
    ConnectorError, Result,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiConnector;

impl ApiConnector {
    /// Full URL for a request: the base URL followed by `p1/.../pn/`
    pub fn request_url(&self, segments: &[Segment<'_>]) -> String {
        format!("{}{}", self.base_url(), join_segments(segments))
    }

    /// GET the resource at `segments` and return its JSON body
    pub async fn get_data(&self, segments: &[Segment<'_>]) -> Result<Value> {
        self.get_as(segments).await
    }

    /// GET the resource at `segments` and deserialize its body into `T`
    pub async fn get_as<T>(&self, segments: &[Segment<'_>]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(segments);
        tracing::debug!(url = %url, "sending GET");

        let response = self
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|e| ConnectorError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConnectorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConnectorError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ConnectorError::Parse(e.to_string()))
    }

    /// Like [`get_data`](Self::get_data), but logs failures and returns `None`
    pub async fn get_data_or_log(&self, segments: &[Segment<'_>]) -> Option<Value> {
        match self.get_data(segments).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(
                    url = %self.request_url(segments),
                    kind = %err.kind().name(),
                    error = %err,
                    "request failed"
                );
                None
            }
        }
    }
}
