#![forbid(unsafe_code)]

//! Components and component types.

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::node::Node;
use crate::props::Props;

/// A pure function from props to a renderable node.
pub trait Component {
    /// Display name, used in render traces and error messages.
    fn name(&self) -> &str;

    /// Render with the given props.
    fn render(&self, props: &Props) -> Result<Node>;
}

/// A shared handle to a component implementation.
///
/// Two handles are equal when they point at the same implementation.
#[derive(Clone)]
pub struct ComponentType {
    inner: Rc<dyn Component>,
}

impl ComponentType {
    #[must_use]
    pub fn new(component: impl Component + 'static) -> Self {
        Self {
            inner: Rc::new(component),
        }
    }

    /// A component from a name and a render closure.
    #[must_use]
    pub fn from_fn(
        name: impl Into<String>,
        render: impl Fn(&Props) -> Result<Node> + 'static,
    ) -> Self {
        Self::new(FnComponent {
            name: name.into(),
            render,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn render(&self, props: &Props) -> Result<Node> {
        self.inner.render(props)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentType").field(&self.name()).finish()
    }
}

struct FnComponent<F> {
    name: String,
    render: F,
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&Props) -> Result<Node>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props) -> Result<Node> {
        (self.render)(props)
    }
}
