#![forbid(unsafe_code)]

//! Method-call syntax for the outbound conversions.

use chainable_core::ChainableComponent;
use chainable_host::{ComponentType, Node, Props};

use crate::hoc::{HigherOrderComponent, to_higher_order_component};
use crate::render_prop::to_render_prop;

/// Conversions available on any chainable rendering host nodes.
pub trait ChainableComponentExt<A> {
    /// See [`to_render_prop`].
    fn to_render_prop(&self) -> ComponentType;

    /// See [`to_higher_order_component`].
    fn to_higher_order_component(
        &self,
        prop_mapper: impl Fn(A) -> Props + 'static,
    ) -> HigherOrderComponent<A>;
}

impl<A: 'static> ChainableComponentExt<A> for ChainableComponent<A, Node> {
    fn to_render_prop(&self) -> ComponentType {
        to_render_prop(self)
    }

    fn to_higher_order_component(
        &self,
        prop_mapper: impl Fn(A) -> Props + 'static,
    ) -> HigherOrderComponent<A> {
        to_higher_order_component(self, prop_mapper)
    }
}
