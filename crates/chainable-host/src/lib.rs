#![forbid(unsafe_code)]

//! Reference component host: props, lazy elements, and a recursive renderer.
//!
//! This crate is the narrow slice of a UI framework that chainable
//! components talk to:
//!
//! - [`Component`] / [`ComponentType`]: a pure function from [`Props`] to a
//!   renderable [`Node`].
//! - [`create_element`]: build a component instance from a type and props.
//!   Creation is lazy; nothing renders until the [`Renderer`] walks the tree.
//! - [`Props`]: a props map holding plain data ([`serde_json::Value`]) and
//!   type-erased render callbacks ([`Callback`]).
//! - [`Renderer`]: expands composite elements depth-first into [`Output`],
//!   which only contains host-level nodes.
//!
//! A render-prop component reads a callback from its props (conventionally
//! under [`CHILDREN`]) and returns whatever the callback returns as part of
//! its own output.

pub mod component;
pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod props;
pub mod renderer;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use component::{Component, ComponentType};
pub use config::RendererConfig;
pub use error::{PropsError, RenderError, Result};
pub use node::{Element, HostNode, Node, create_element};
pub use props::{CHILDREN, Callback, PropValue, Props};
pub use renderer::{Output, Renderer};
