#![forbid(unsafe_code)]

//! Chainable components public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users: the
//! continuation algebra from `chainable-core`, the reference host from
//! `chainable-host`, and the render-prop / higher-order component adapters.
//!
//! ```
//! use chainable::prelude::*;
//!
//! let sum = chain! {
//!     a <= of::<i32, Node>(2);
//!     b <= of(3);
//!     of(a + b)
//! };
//! let output = Renderer::default()
//!     .render(&sum.render(|n| Node::text(n.to_string())))
//!     .unwrap();
//! assert_eq!(output.text_content(), "5");
//! ```

pub use chainable_core::chain;

pub mod prelude {
    pub use chainable_adapters as adapters;
    pub use chainable_core as core;
    pub use chainable_host as host;

    pub use chainable_adapters::{
        ChainableComponentExt, HigherOrderComponent, from_non_standard_render_prop,
        from_render_prop, to_higher_order_component, to_render_prop,
    };
    pub use chainable_core::{ChainableComponent, Continuation, all, chain, from_render, of};
    pub use chainable_host::{
        CHILDREN, Callback, Component, ComponentType, Node, Output, Props, RenderError,
        Renderer, RendererConfig, create_element,
    };
}
