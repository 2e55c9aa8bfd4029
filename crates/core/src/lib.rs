mod content;
mod endpoints;
mod error;
mod resolver;
mod scanner;
mod statistics;

pub use content::ContentAccessor;
pub use endpoints::EndpointRegistry;
pub use error::{EndpointError, ScanError};
pub use resolver::PathResolver;
pub use scanner::{ScanOptions, Scanner, mock_result};
pub use statistics::StatsAggregator;
