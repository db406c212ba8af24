use apiconn_core::models::Target;
use reqwest::Client;

/// Connector bound to one `address:port/path/` base URL
pub struct ApiConnector {
    client: Client,
    target: Target,
    base_url: String,
}

impl ApiConnector {
    pub fn new(
        server_address: impl Into<String>,
        server_port: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::from_target(Target::new(server_address, server_port, path))
    }

    pub fn from_target(target: Target) -> Self {
        let base_url = target.base_url();
        Self {
            client: Client::new(),
            target,
            base_url,
        }
    }

    pub fn server_address(&self) -> &str {
        &self.target.server_address
    }

    pub fn server_port(&self) -> &str {
        &self.target.server_port
    }

    pub fn path(&self) -> &str {
        &self.target.path
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Base path without the scheme, e.g. `localhost:8080/api/`
    pub fn base_path(&self) -> &str {
        &self.base_url[apiconn_core::models::SCHEME.len()..]
    }

    /// Base path including the `http://` scheme
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
