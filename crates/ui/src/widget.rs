use happybird_models::{Endpoint, EndpointData, ServingMode, WidgetData};
use tracing::debug;

use crate::{Fragment, WidgetId, markup, script};

/// Widget listing the `happybird.txt` files found in the SyftBox tree.
#[derive(Debug, Clone)]
pub struct HappyBirdWatcher {
    id: WidgetId,
    refresh_interval: u64,
}

impl Default for HappyBirdWatcher {
    fn default() -> Self {
        Self::new(5)
    }
}

impl HappyBirdWatcher {
    const ENDPOINTS: [Endpoint; 2] = [Endpoint::Files, Endpoint::Content];

    /// `refresh_interval` is shown to the user; the host owns the actual timer.
    #[must_use]
    pub fn new(refresh_interval: u64) -> Self {
        Self::with_id(WidgetId::generate(), refresh_interval)
    }

    #[must_use]
    pub fn with_id(id: WidgetId, refresh_interval: u64) -> Self {
        Self { id, refresh_interval }
    }

    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    #[must_use]
    pub fn refresh_interval(&self) -> u64 {
        self.refresh_interval
    }

    /// Endpoints whose payloads the host must supply.
    #[must_use]
    pub fn endpoints(&self) -> &'static [Endpoint] {
        &Self::ENDPOINTS
    }

    #[must_use]
    pub fn fragment(&self, data: &WidgetData, mode: &ServingMode) -> Fragment {
        Fragment::build(data, mode, self.refresh_interval)
    }

    /// Initial render from endpoint payloads keyed by path.
    #[must_use]
    pub fn render_content(&self, data: &EndpointData, mode: &ServingMode) -> String {
        self.render_data(&WidgetData::from_endpoint_data(data), mode)
    }

    #[must_use]
    pub fn render_data(&self, data: &WidgetData, mode: &ServingMode) -> String {
        debug!(
            "Rendering widget {} ({} files, mode {})",
            self.id, data.files.total_count, mode
        );
        markup::render(&self.fragment(data, mode), &self.id)
    }

    #[must_use]
    pub fn update_script(&self) -> String {
        script::update_script(&self.id, self.refresh_interval)
    }

    #[must_use]
    pub fn handler_script(&self) -> String {
        script::handler_script(&self.id)
    }
}
