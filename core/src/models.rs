use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Scheme prefixed to every base path when a request goes on the wire
pub const SCHEME: &str = "http://";

/// Server address, port and base path of an API endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub server_address: String,
    pub server_port: String,
    pub path: String,
}

impl Target {
    pub fn new(
        server_address: impl Into<String>,
        server_port: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            server_address: server_address.into(),
            server_port: server_port.into(),
            path: path.into(),
        }
    }

    /// `address:port/path/`, without a scheme.
    ///
    /// One leading `/` is dropped from `path` and a trailing `/` is added if
    /// missing. An empty path yields the root, `address:port/`.
    pub fn base_path(&self) -> String {
        let path = self.path.strip_prefix('/').unwrap_or(&self.path);

        let mut base = format!("{}:{}/{}", self.server_address, self.server_port, path);
        if !base.ends_with('/') {
            base.push('/');
        }
        base
    }

    /// Base path with the `http://` scheme, as used for requests
    pub fn base_url(&self) -> String {
        format!("{}{}", SCHEME, self.base_path())
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            server_address: "localhost".to_string(),
            server_port: "8080".to_string(),
            path: "/".to_string(),
        }
    }
}

/// One positional request parameter, rendered through `Display`.
///
/// The rendered text is percent-encoded, so `/`, `#`, `?` and spaces stay
/// inside their segment.
pub type Segment<'a> = &'a (dyn Display + Sync);

/// Render segments as `p1/p2/.../pn/`.
///
/// No segments yields an empty string so the request stays on the base URL.
pub fn join_segments(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| format!("{}/", urlencoding::encode(&s.to_string())))
        .collect()
}
