use apiconn_core::{models::Segment, ConnectorError, Result};
use serde_json::{Map, Value};

use crate::client::ApiConnector;

/// Connector that keeps the last successfully fetched response.
///
/// A failed [`make_request`](Self::make_request) leaves the stored value as it
/// was and records the error, so [`is_stale`](Self::is_stale) reports `true`
/// until the next successful call.
pub struct StoredConnector {
    connector: ApiConnector,
    response_json: Value,
    last_error: Option<ConnectorError>,
}

impl StoredConnector {
    pub fn new(
        server_address: impl Into<String>,
        server_port: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::from_connector(ApiConnector::new(server_address, server_port, path))
    }

    pub fn from_connector(connector: ApiConnector) -> Self {
        Self {
            connector,
            response_json: Value::Object(Map::new()),
            last_error: None,
        }
    }

    /// Fetch `segments` and store the parsed body
    pub async fn make_request(&mut self, segments: &[Segment<'_>]) -> Result<&Value> {
        match self.connector.get_data(segments).await {
            Ok(value) => {
                self.response_json = value;
                self.last_error = None;
                Ok(&self.response_json)
            }
            Err(err) => {
                tracing::warn!(
                    url = %self.connector.request_url(segments),
                    kind = %err.kind().name(),
                    error = %err,
                    "request failed, keeping previous response"
                );
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Last stored response, `{}` until a request succeeds
    pub fn get_data(&self) -> &Value {
        &self.response_json
    }

    pub fn last_error(&self) -> Option<&ConnectorError> {
        self.last_error.as_ref()
    }

    pub fn is_stale(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn connector(&self) -> &ApiConnector {
        &self.connector
    }

    pub fn base_path(&self) -> &str {
        self.connector.base_path()
    }
}
