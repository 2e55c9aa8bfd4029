use happybird_models::ContentSelection;

/// Serves the content endpoint.
///
/// Always reports that nothing is selected.
// TODO: accept a requested path, check it resolves under the scanned root, and read it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentAccessor;

impl ContentAccessor {
    #[must_use]
    pub fn content(&self) -> ContentSelection {
        ContentSelection::empty()
    }
}
