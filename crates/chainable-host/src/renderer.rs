#![forbid(unsafe_code)]

//! Recursive renderer.
//!
//! [`Renderer::render`] walks a [`Node`] tree depth-first. Composite
//! [`Element`]s are rendered with their props and the result is walked in
//! turn, so the produced [`Output`] only holds host-level content. Render
//! callbacks stored in props run when the component that owns them renders.
//!
//! # Invariants
//!
//! 1. Children render in order; the first error aborts the walk and is
//!    returned unchanged.
//! 2. A path of nested composite elements longer than
//!    [`RendererConfig::max_depth`] fails with
//!    [`RenderError::DepthExceeded`].
//!
//! # Tracing
//!
//! With the `tracing` feature every composite expansion runs inside a
//! `host.render` debug span carrying `component` and `depth`, and a depth
//! overflow emits a `WARN` event.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::RendererConfig;
use crate::error::{RenderError, Result};
use crate::logging::warn;
use crate::node::{Element, Node};

/// Host-level render output.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Output {
    #[default]
    Empty,
    Text(String),
    Fragment(Vec<Output>),
    Host {
        tag: String,
        attrs: BTreeMap<String, Value>,
        children: Vec<Output>,
    },
}

impl Output {
    /// Concatenated text of every text leaf, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => out.push_str(text),
            Self::Fragment(children) | Self::Host { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Expands node trees into [`Output`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Render `node` and everything below it.
    pub fn render(&self, node: &Node) -> Result<Output> {
        self.render_at(node, 0)
    }

    fn render_at(&self, node: &Node, depth: usize) -> Result<Output> {
        match node {
            Node::Empty => Ok(Output::Empty),
            Node::Text(text) => Ok(Output::Text(text.clone())),
            Node::Fragment(children) => Ok(Output::Fragment(self.render_all(children, depth)?)),
            Node::Host(host) => Ok(Output::Host {
                tag: host.tag.clone(),
                attrs: host.attrs.clone(),
                children: self.render_all(&host.children, depth)?,
            }),
            Node::Element(element) => self.expand(element, depth + 1),
        }
    }

    fn render_all(&self, children: &[Node], depth: usize) -> Result<Vec<Output>> {
        children
            .iter()
            .map(|child| self.render_at(child, depth))
            .collect()
    }

    fn expand(&self, element: &Element, depth: usize) -> Result<Output> {
        let limit = self.config.max_depth;
        if depth > limit {
            warn!(
                message = "host.depth_exceeded",
                component = element.name(),
                limit
            );
            return Err(RenderError::DepthExceeded { limit });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("host.render", component = element.name(), depth).entered();

        let rendered = element.component().render(element.props())?;
        self.render_at(&rendered, depth)
    }
}
