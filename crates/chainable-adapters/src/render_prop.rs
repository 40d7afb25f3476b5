#![forbid(unsafe_code)]

//! Render-prop conversions.
//!
//! A render-prop component receives a callback in its props and uses the
//! callback's return value as part of its own output. Wrapping one as a
//! chainable makes the render call site the continuation: `render(f)`
//! instantiates the component with `f` as its callback.

use chainable_core::{ChainableComponent, Continuation};
use chainable_host::{CHILDREN, Callback, ComponentType, Node, Props, create_element};

/// Display name of components produced by [`to_render_prop`].
pub const RENDER_PROP_NAME: &str = "ChainableRenderProp";

/// Wrap a render-prop component whose callback lives under `children`.
///
/// `render(f)` creates `inner` with `{...parameters, children: f}`.
#[must_use]
pub fn from_render_prop<A: 'static>(
    inner: &ComponentType,
    parameters: Option<Props>,
) -> ChainableComponent<A, Node> {
    from_non_standard_render_prop(CHILDREN, inner, parameters)
}

/// Wrap a render-prop component whose callback lives under `render_method`.
///
/// `render(f)` creates `inner` with `{...parameters, [render_method]: f}`;
/// the callback replaces any parameter stored under the same key.
#[must_use]
pub fn from_non_standard_render_prop<A: 'static>(
    render_method: impl Into<String>,
    inner: &ComponentType,
    parameters: Option<Props>,
) -> ChainableComponent<A, Node> {
    let render_method = render_method.into();
    let inner = inner.clone();
    let parameters = parameters.unwrap_or_default();
    ChainableComponent::from_render(move |continuation: Continuation<A, Node>| {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "render_prop.mount",
            component = inner.name(),
            key = render_method.as_str()
        );
        let props = parameters
            .clone()
            .with_callback(render_method.clone(), Callback::new(continuation));
        create_element(&inner, props)
    })
}

/// A render-prop component backed by `chainable`.
///
/// Rendering it with a `children` callback `f` returns
/// `chainable.render(f)`. A missing or mistyped `children` prop fails the
/// render with the host's props error.
#[must_use]
pub fn to_render_prop<A: 'static>(chainable: &ChainableComponent<A, Node>) -> ComponentType {
    let chainable = chainable.clone();
    ComponentType::from_fn(RENDER_PROP_NAME, move |props: &Props| {
        let children = props.callback::<A>(CHILDREN)?;
        Ok(chainable.render_with(children))
    })
}
