#![forbid(unsafe_code)]

//! Higher-order components backed by a chainable.
//!
//! A [`HigherOrderComponent`] is a component transformer: [`wrap`] takes a
//! component and returns a new one that renders the chainable and, inside
//! its continuation, instantiates the wrapped component with its own props
//! merged with the props the mapper derives from the chainable's value.
//!
//! ```text
//!   wrap(Inner) rendered with own props P
//!     -> chainable.render(|a| create_element(Inner, {...P, ...mapper(a)}))
//! ```
//!
//! # Invariants
//!
//! 1. Mapper output wins over own props on key collisions.
//! 2. The wrapper renders the chainable once per instantiation and the mapper
//!    once per value delivered.
//! 3. The wrapper is named `with_chainable(<inner name>)`.
//!
//! # Typing
//!
//! Props are untyped, so the wrapped component's expectation that the
//! mapper-provided keys are filled in is a convention; nothing removes those
//! keys from what callers are allowed to pass.
//!
//! [`wrap`]: HigherOrderComponent::wrap

use std::fmt;
use std::rc::Rc;

use chainable_core::ChainableComponent;
use chainable_host::{ComponentType, Node, Props, create_element};

/// Turns a chainable and a prop mapper into a component transformer.
pub struct HigherOrderComponent<A> {
    chainable: ChainableComponent<A, Node>,
    prop_mapper: Rc<dyn Fn(A) -> Props>,
}

impl<A> Clone for HigherOrderComponent<A> {
    fn clone(&self) -> Self {
        Self {
            chainable: self.chainable.clone(),
            prop_mapper: Rc::clone(&self.prop_mapper),
        }
    }
}

impl<A> fmt::Debug for HigherOrderComponent<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HigherOrderComponent")
            .field("chainable", &self.chainable)
            .finish_non_exhaustive()
    }
}

impl<A: 'static> HigherOrderComponent<A> {
    #[must_use]
    pub fn new(
        chainable: &ChainableComponent<A, Node>,
        prop_mapper: impl Fn(A) -> Props + 'static,
    ) -> Self {
        Self {
            chainable: chainable.clone(),
            prop_mapper: Rc::new(prop_mapper),
        }
    }

    /// Wrap `inner`, injecting mapper props on every render.
    #[must_use]
    pub fn wrap(&self, inner: &ComponentType) -> ComponentType {
        let name = format!("with_chainable({})", inner.name());
        let chainable = self.chainable.clone();
        let prop_mapper = Rc::clone(&self.prop_mapper);
        let inner = inner.clone();
        ComponentType::from_fn(name, move |own: &Props| {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "hoc.render",
                inner = inner.name(),
                own_props = own.len()
            );
            let own = own.clone();
            let prop_mapper = Rc::clone(&prop_mapper);
            let inner = inner.clone();
            Ok(chainable.render(move |value| {
                create_element(&inner, own.clone().merged(prop_mapper(value)))
            }))
        })
    }
}

/// Build a [`HigherOrderComponent`] from `chainable` and `prop_mapper`.
#[must_use]
pub fn to_higher_order_component<A: 'static>(
    chainable: &ChainableComponent<A, Node>,
    prop_mapper: impl Fn(A) -> Props + 'static,
) -> HigherOrderComponent<A> {
    HigherOrderComponent::new(chainable, prop_mapper)
}
