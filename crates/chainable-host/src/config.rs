#![forbid(unsafe_code)]

//! Renderer configuration.

/// Default limit on nested composite components.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for a [`Renderer`](crate::Renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererConfig {
    /// Maximum number of nested composite elements expanded on one path.
    ///
    /// Exceeding it fails the render with
    /// [`RenderError::DepthExceeded`](crate::RenderError::DepthExceeded)
    /// instead of overflowing the stack on runaway recursion.
    pub max_depth: usize,
}

impl RendererConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
