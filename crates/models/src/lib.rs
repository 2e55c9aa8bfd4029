mod content;
mod endpoint;
mod file_record;
mod mode;
mod scan;
mod statistics;
mod widget_data;

pub use content::ContentSelection;
pub use endpoint::Endpoint;
pub use file_record::{FileRecord, UNKNOWN_OWNER};
pub use mode::ServingMode;
pub use scan::ScanResult;
pub use statistics::StatsSummary;
pub use widget_data::{EndpointData, WidgetData};
