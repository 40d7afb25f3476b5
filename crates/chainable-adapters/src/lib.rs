#![forbid(unsafe_code)]

//! Conversions between chainable components and the two UI composition
//! idioms they unify.
//!
//! Into the algebra:
//! - [`from_render_prop`]: a render-prop component taking its callback under
//!   `children`.
//! - [`from_non_standard_render_prop`]: the same, under any props key.
//!
//! Out of the algebra:
//! - [`to_render_prop`]: a render-prop component backed by a chainable.
//! - [`to_higher_order_component`]: a [`HigherOrderComponent`] that injects
//!   props derived from the chainable's value into any wrapped component.
//!
//! [`ChainableComponentExt`] exposes both outbound conversions as methods on
//! any `ChainableComponent<A, Node>`.
//!
//! # Assumptions
//!
//! Wrapped render-prop components are expected to invoke their callback
//! exactly once, synchronously, while rendering. Nothing checks this: a
//! component that never calls back, or calls back twice, yields missing or
//! duplicated values in everything composed on top of it.

pub mod ext;
pub mod hoc;
pub mod render_prop;

pub use ext::ChainableComponentExt;
pub use hoc::{HigherOrderComponent, to_higher_order_component};
pub use render_prop::{from_non_standard_render_prop, from_render_prop, to_render_prop};
