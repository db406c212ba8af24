mod client;
mod endpoints;
mod stored;

pub use client::ApiConnector;
pub use stored::StoredConnector;

pub use apiconn_core::{models::Segment, ConnectorError, ErrorKind, Result};
