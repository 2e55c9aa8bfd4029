use happybird_config::Settings;
use happybird_models::{Endpoint, EndpointData, ScanResult, WidgetData};
use serde_json::Value;
use tracing::debug;

use crate::{ContentAccessor, EndpointError, Scanner, StatsAggregator};

/// Dispatches endpoint calls by [`Endpoint`] or by path.
///
/// Every call recomputes from the filesystem; the registry itself is immutable
/// and can be shared across threads.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    scanner: Scanner,
    stats: StatsAggregator,
    content: ContentAccessor,
}

impl EndpointRegistry {
    #[must_use]
    pub fn new(scanner: Scanner) -> Self {
        Self {
            stats: StatsAggregator::new(scanner.clone()),
            scanner,
            content: ContentAccessor,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Scanner::from_settings(settings))
    }

    #[must_use]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    #[must_use]
    pub fn files(&self) -> ScanResult {
        self.scanner.scan()
    }

    /// # Errors
    ///
    /// Returns [`EndpointError::Serialize`] if the payload cannot be encoded as JSON.
    pub fn call(&self, endpoint: Endpoint) -> Result<Value, EndpointError> {
        debug!("Endpoint call: {}", endpoint);
        let value = match endpoint {
            Endpoint::Files => serde_json::to_value(self.files())?,
            Endpoint::Content => serde_json::to_value(self.content.content())?,
            Endpoint::Stats => serde_json::to_value(self.stats.stats())?,
        };
        Ok(value)
    }

    /// # Errors
    ///
    /// Returns [`EndpointError::UnknownEndpoint`] for paths that are not registered.
    pub fn call_path(&self, path: &str) -> Result<Value, EndpointError> {
        let endpoint = Endpoint::from_path(path).ok_or_else(|| EndpointError::UnknownEndpoint(path.to_string()))?;
        self.call(endpoint)
    }

    /// Calls each endpoint once and keys the payloads by path.
    ///
    /// # Errors
    ///
    /// Returns the first serialization failure.
    pub fn fetch(&self, endpoints: &[Endpoint]) -> Result<EndpointData, EndpointError> {
        endpoints
            .iter()
            .map(|&endpoint| Ok((endpoint.path().to_string(), self.call(endpoint)?)))
            .collect()
    }

    /// Typed data for a widget render, without the JSON round trip.
    #[must_use]
    pub fn widget_data(&self) -> WidgetData {
        WidgetData::new(self.files(), self.content.content())
    }
}
