use async_trait::async_trait;
use thiserror::Error;

/// Whether a source is currently offering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceState {
    Normal,
    #[default]
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("{source_name} completion failed: {reason}")]
    Failed {
        source_name: String,
        reason: String,
    },
}

/// A provider of suggestions for the command line
///
/// `filter` recomputes the options for a new input and resets the
/// selection. The remaining operations are synchronous and only touch the
/// source's own selection state, so sources keep that state behind
/// interior mutability and can be shared across tasks.
#[async_trait]
pub trait CompletionSource: Send + Sync {
    /// Heading shown above this source's options
    fn title(&self) -> &str;

    async fn filter(&self, query: &str) -> Result<(), CompletionError>;

    /// Select the next option, wrapping around
    fn next(&self);

    /// Select the previous option, wrapping around
    fn prev(&self);

    /// The selected option, if any
    fn completion(&self) -> Option<String>;

    fn clear_completion(&self);

    fn state(&self) -> SourceState;

    fn options(&self) -> Vec<String>;

    fn selected(&self) -> Option<usize>;
}
