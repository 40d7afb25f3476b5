#![forbid(unsafe_code)]

//! Renderable nodes.
//!
//! A [`Node`] is what a component's render returns. Composite components
//! appear as [`Node::Element`] and are expanded by the
//! [`Renderer`](crate::Renderer); everything else is host-level content.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::component::ComponentType;
use crate::logging::trace;
use crate::props::Props;

/// A renderable node.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// A text leaf.
    Text(String),
    /// Several nodes rendered in order.
    Fragment(Vec<Node>),
    /// A host-level tagged node.
    Host(HostNode),
    /// A composite component instance, expanded at render time.
    Element(Element),
}

impl Node {
    /// A text leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A fragment of nodes.
    #[must_use]
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment(children.into_iter().collect())
    }

    /// The element inside, if this is a component instance.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<HostNode> for Node {
    fn from(host: HostNode) -> Self {
        Self::Host(host)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A host-level tagged node with data attributes and children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostNode {
    pub tag: String,
    pub attrs: BTreeMap<String, Value>,
    pub children: Vec<Node>,
}

impl HostNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A component instance: a component type plus the props it was created
/// with.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    component: ComponentType,
    props: Props,
}

impl Element {
    #[must_use]
    pub fn component(&self) -> &ComponentType {
        &self.component
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Display name of the component type.
    #[must_use]
    pub fn name(&self) -> &str {
        self.component.name()
    }
}

/// Create an instance of `component` configured with `props`.
///
/// The component does not render here; the instance is rendered when a
/// [`Renderer`](crate::Renderer) reaches it.
#[must_use]
pub fn create_element(component: &ComponentType, props: Props) -> Node {
    trace!(
        message = "host.create_element",
        component = component.name(),
        props = props.len()
    );
    Node::Element(Element {
        component: component.clone(),
        props,
    })
}
