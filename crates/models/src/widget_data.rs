use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{ContentSelection, Endpoint, ScanResult};

/// Latest endpoint payloads keyed by endpoint path, as a host hands them to a widget.
pub type EndpointData = BTreeMap<String, Value>;

/// Typed view of the endpoint data the widget renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetData {
    pub files: ScanResult,
    pub content: ContentSelection,
}

impl WidgetData {
    #[must_use]
    pub fn new(files: ScanResult, content: ContentSelection) -> Self {
        Self { files, content }
    }

    /// Reads the files and content payloads out of `data`.
    ///
    /// Missing or malformed payloads fall back to their empty defaults.
    #[must_use]
    pub fn from_endpoint_data(data: &EndpointData) -> Self {
        Self {
            files: payload(data, Endpoint::Files),
            content: payload(data, Endpoint::Content),
        }
    }
}

fn payload<T: DeserializeOwned + Default>(data: &EndpointData, endpoint: Endpoint) -> T {
    data.get(endpoint.path())
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}
