#![forbid(unsafe_code)]

//! Test helpers (enabled by the `test-helpers` feature).
//!
//! [`RecordingComponent`] is a render-prop stub: every render records the
//! props it was instantiated with, then hands a fixed value to the callback
//! stored under its render key.

use std::cell::RefCell;
use std::rc::Rc;

use crate::component::{Component, ComponentType};
use crate::error::Result;
use crate::node::{HostNode, Node};
use crate::props::{CHILDREN, Props};

/// A render-prop component that records its instantiations.
///
/// Clones share the same record, so a test can keep one handle and pass
/// [`RecordingComponent::component_type`] to the code under test.
#[derive(Clone)]
pub struct RecordingComponent<A> {
    name: String,
    key: String,
    value: A,
    calls: Rc<RefCell<Vec<Props>>>,
}

impl<A: Clone + 'static> RecordingComponent<A> {
    /// Stub named `name` that renders `value` through its `children`
    /// callback.
    #[must_use]
    pub fn new(name: impl Into<String>, value: A) -> Self {
        Self {
            name: name.into(),
            key: CHILDREN.to_owned(),
            value,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Read the callback from `key` instead of `children`.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The component type to hand to code under test.
    #[must_use]
    pub fn component_type(&self) -> ComponentType {
        ComponentType::new(self.clone())
    }

    /// Props of every render so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Props> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<A: Clone + 'static> Component for RecordingComponent<A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props) -> Result<Node> {
        self.calls.borrow_mut().push(props.clone());
        let callback = props.callback::<A>(&self.key)?;
        Ok(HostNode::new(self.name.clone())
            .child(callback(self.value.clone()))
            .into())
    }
}

/// A leaf component rendering its `text` prop inside a `leaf` host node.
#[must_use]
pub fn text_leaf() -> ComponentType {
    ComponentType::from_fn("TextLeaf", |props: &Props| {
        let text = props.data("text")?;
        let text = match text.as_str() {
            Some(s) => s.to_owned(),
            None => text.to_string(),
        };
        Ok(HostNode::new("leaf").child(Node::text(text)).into())
    })
}
