use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

/// A props map did not hold what a component asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    #[error("missing prop: {key}")]
    Missing { key: String },

    #[error("prop is not a callback: {key}")]
    NotCallback { key: String },

    #[error("callback prop {key} does not accept {expected} (it accepts {actual})")]
    CallbackType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("prop is a callback, not data: {key}")]
    NotData { key: String },
}

/// Rendering a node tree failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("props error: {0}")]
    Props(#[from] PropsError),

    #[error("component nesting exceeded the depth limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("component {component} failed: {message}")]
    Component { component: String, message: String },
}

impl RenderError {
    #[must_use]
    pub fn component(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Component {
            component: component.into(),
            message: message.into(),
        }
    }

    /// The props error behind this failure, if any.
    #[must_use]
    pub fn as_props(&self) -> Option<&PropsError> {
        match self {
            Self::Props(err) => Some(err),
            _ => None,
        }
    }
}
