#![forbid(unsafe_code)]

//! Core: the chainable component value and its composition algebra.
//!
//! A [`ChainableComponent<A, N>`] is a single operation, `render`, which takes
//! a continuation `A -> N` and returns a renderable node `N`. Everything else
//! in this crate is derived from that one operation:
//!
//! - [`ChainableComponent::map`], [`ChainableComponent::ap`] and
//!   [`ChainableComponent::chain`] (plus their `fantasyland_*` aliases) build
//!   new values out of existing ones.
//! - [`of`] lifts a plain value into the algebra.
//! - [`all`] combines a fixed-size collection of chainables into one chainable
//!   of the collected values.
//! - [`chain!`] is do-notation over [`ChainableComponent::chain`].
//!
//! The node type `N` is opaque here. Conversions to and from concrete
//! render-prop and higher-order components live in `chainable-adapters`.
//!
//! # Example
//!
//! ```
//! use chainable_core::{ChainableComponent, all, of};
//!
//! let greeting: ChainableComponent<&str, String> = of("hello");
//! let shout = greeting.map(|s| s.to_uppercase());
//! assert_eq!(shout.render(|s| format!("<{s}>")), "<HELLO>");
//!
//! let both = all((of::<_, String>(1), of("two")));
//! assert_eq!(both.render(|(n, s)| format!("{n}-{s}")), "1-two");
//! ```

pub mod all;
pub mod chainable;
mod macros;

pub use all::{AllOf, Append, all};
pub use chainable::{ChainableComponent, Continuation, from_render, of};
