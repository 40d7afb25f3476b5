#![forbid(unsafe_code)]

//! The chainable component value.
//!
//! # Design
//!
//! [`ChainableComponent<A, N>`] wraps one reference-counted closure,
//! `render`, of shape `(Continuation<A, N>) -> N`. Combinators never touch
//! the wrapped closure; they build a new closure that calls it. Cloning a
//! chainable shares the same closure.
//!
//! # Invariants
//!
//! 1. `render` is stored exactly as supplied. No validation happens here.
//! 2. Every combinator returns a fresh value and leaves its inputs intact.
//! 3. `ap` renders the receiver first (outer) and the function-producing
//!    chainable second (inner). The nesting of render calls decides the
//!    nesting of the produced UI tree, so this order is fixed.
//! 4. The `fantasyland_*` operations are the unaliased operations under a
//!    second name.
//!
//! # Continuation discipline
//!
//! A well-behaved `render` invokes its continuation exactly once. The type
//! does not enforce this: continuations are [`Fn`], so a render that calls
//! them zero or several times is representable. `map`, `ap` and `chain`
//! only satisfy their laws for single-shot renders.
//!
//! # Failure Modes
//!
//! - **Continuation panics**: the panic unwinds through every composed
//!   layer to the caller of [`ChainableComponent::render`]. Nothing here
//!   catches it.

use std::fmt;
use std::rc::Rc;

/// A continuation receiving the contextual value and producing a node.
pub type Continuation<A, N> = Rc<dyn Fn(A) -> N>;

type RenderFn<A, N> = Rc<dyn Fn(Continuation<A, N>) -> N>;

/// A value of type `A` available only inside a continuation that produces a
/// renderable `N`.
///
/// Cloning a `ChainableComponent` creates a new handle to the **same**
/// render closure.
pub struct ChainableComponent<A, N> {
    render: RenderFn<A, N>,
}

impl<A, N> Clone for ChainableComponent<A, N> {
    fn clone(&self) -> Self {
        Self {
            render: Rc::clone(&self.render),
        }
    }
}

impl<A, N> fmt::Debug for ChainableComponent<A, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainableComponent")
            .field("value", &std::any::type_name::<A>())
            .field("node", &std::any::type_name::<N>())
            .finish_non_exhaustive()
    }
}

impl<A: 'static, N: 'static> ChainableComponent<A, N> {
    /// Wrap a continuation-accepting function.
    ///
    /// The function is stored as-is and becomes this value's `render`.
    #[must_use]
    pub fn from_render(render: impl Fn(Continuation<A, N>) -> N + 'static) -> Self {
        Self {
            render: Rc::new(render),
        }
    }

    /// A chainable whose render passes `value` straight to the continuation.
    ///
    /// This is the unit of the algebra: `of(a).chain(f)` renders like `f(a)`
    /// and `of(a).map(f)` renders like `of(f(a))`.
    #[must_use]
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_render(move |continuation| continuation(value.clone()))
    }

    /// Alias of [`ChainableComponent::of`].
    #[must_use]
    pub fn fantasyland_of(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(value)
    }

    /// Combine a fixed-size collection of chainables into one chainable of
    /// the collected values, preserving input order.
    ///
    /// See [`all`](crate::all::all) for the accepted shapes.
    #[must_use]
    pub fn all<T>(values: T) -> Self
    where
        T: crate::all::AllOf<N, Output = A>,
    {
        values.all()
    }

    /// Render with a plain closure as the continuation.
    pub fn render(&self, continuation: impl Fn(A) -> N + 'static) -> N {
        (self.render)(Rc::new(continuation))
    }

    /// Render with an already shared continuation.
    ///
    /// The continuation is handed to the wrapped render function unchanged,
    /// so adapters that store it (for example as a render-prop callback)
    /// keep pointer identity with what the caller supplied.
    pub fn render_with(&self, continuation: Continuation<A, N>) -> N {
        (self.render)(continuation)
    }

    /// Transform the contextual value without changing control flow.
    ///
    /// `render(g)` of the result is `self.render(a => g(f(a)))`.
    #[must_use]
    pub fn map<B: 'static>(&self, f: impl Fn(A) -> B + 'static) -> ChainableComponent<B, N> {
        let this = self.clone();
        let f = Rc::new(f);
        ChainableComponent::from_render(move |g: Continuation<B, N>| {
            let f = Rc::clone(&f);
            this.render(move |a| g(f(a)))
        })
    }

    /// Apply the function produced by `other` to the value produced by
    /// `self`.
    ///
    /// `render(g)` of the result is
    /// `self.render(a => other.render(f => g(f(a))))`: the receiver's render
    /// is the outer one.
    #[must_use]
    pub fn ap<B, F>(&self, other: ChainableComponent<F, N>) -> ChainableComponent<B, N>
    where
        A: Clone,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let this = self.clone();
        ChainableComponent::from_render(move |g: Continuation<B, N>| {
            let other = other.clone();
            this.render(move |a: A| {
                let g = Rc::clone(&g);
                other.render(move |f: F| g(f(a.clone())))
            })
        })
    }

    /// Sequence a chainable that depends on this one's value.
    ///
    /// `render(g)` of the result is `self.render(a => f(a).render(g))`.
    #[must_use]
    pub fn chain<B: 'static>(
        &self,
        f: impl Fn(A) -> ChainableComponent<B, N> + 'static,
    ) -> ChainableComponent<B, N> {
        let this = self.clone();
        let f = Rc::new(f);
        ChainableComponent::from_render(move |g: Continuation<B, N>| {
            let f = Rc::clone(&f);
            this.render(move |a| f(a).render_with(Rc::clone(&g)))
        })
    }

    /// Alias of [`ChainableComponent::map`].
    #[must_use]
    pub fn fantasyland_map<B: 'static>(
        &self,
        f: impl Fn(A) -> B + 'static,
    ) -> ChainableComponent<B, N> {
        self.map(f)
    }

    /// Alias of [`ChainableComponent::ap`].
    #[must_use]
    pub fn fantasyland_ap<B, F>(&self, other: ChainableComponent<F, N>) -> ChainableComponent<B, N>
    where
        A: Clone,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        self.ap(other)
    }

    /// Alias of [`ChainableComponent::chain`].
    #[must_use]
    pub fn fantasyland_chain<B: 'static>(
        &self,
        f: impl Fn(A) -> ChainableComponent<B, N> + 'static,
    ) -> ChainableComponent<B, N> {
        self.chain(f)
    }
}

/// Wrap a continuation-accepting function into a [`ChainableComponent`].
#[must_use]
pub fn from_render<A: 'static, N: 'static>(
    render: impl Fn(Continuation<A, N>) -> N + 'static,
) -> ChainableComponent<A, N> {
    ChainableComponent::from_render(render)
}

/// Lift a plain value into a [`ChainableComponent`].
#[must_use]
pub fn of<A: Clone + 'static, N: 'static>(value: A) -> ChainableComponent<A, N> {
    ChainableComponent::of(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
