use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is loaded before
/// the window opens and is read-only for both renderers; File → Open replaces
/// it wholesale.
pub struct AppState {
    /// Loaded dataset, in source-file order.
    pub dataset: Dataset,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and clear any stale error.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.status_message = None;
    }
}
