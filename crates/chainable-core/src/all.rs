#![forbid(unsafe_code)]

//! N-ary combination of chainables.
//!
//! [`all`] turns an ordered collection of chainables into one chainable of
//! the ordered collection of their values. It is a left fold over
//! [`ChainableComponent::ap`]: starting from `of(empty)`, every step renders
//! the running aggregate on the outside and the next chainable on the
//! inside, then appends the next value to the end of the partial
//! collection.
//!
//! Accepted shapes:
//!
//! - heterogeneous tuples `(ChainableComponent<T1, N>, ..)` of arity 1 to 9,
//!   producing `(T1, ..)`;
//! - `Vec<ChainableComponent<A, N>>` and `[ChainableComponent<A, N>; K]`,
//!   producing `Vec<A>`.
//!
//! The tuple ceiling is a practical limit. Longer homogeneous sequences go
//! through `Vec`.
//!
//! # Cost
//!
//! Every element adds one level of nested render calls, so the length of a
//! `Vec` or array is bounded by the thread's stack: around a thousand
//! elements render on a default 2 MiB test thread, several thousand do not.
//! Because continuations are [`Fn`], each `ap` step clones the partial
//! collection before appending to it, which makes building a `Vec<A>` of
//! length `n` cost O(n²) clones of `A`.

use crate::chainable::ChainableComponent;

/// Append a value to the end of an ordered collection.
///
/// Implemented for `Vec<T>` and for tuples of arity 0 to 8, where appending
/// produces the tuple one element longer.
pub trait Append<T> {
    /// The collection after appending.
    type Output;

    /// Append `value` as the last element.
    fn append(self, value: T) -> Self::Output;
}

impl<T> Append<T> for Vec<T> {
    type Output = Vec<T>;

    fn append(mut self, value: T) -> Self::Output {
        self.push(value);
        self
    }
}

macro_rules! impl_append_tuple {
    ($($P:ident),*) => {
        impl<$($P,)* T> Append<T> for ($($P,)*) {
            type Output = ($($P,)* T,);

            #[allow(non_snake_case)]
            fn append(self, value: T) -> Self::Output {
                let ($($P,)*) = self;
                ($($P,)* value,)
            }
        }
    };
}

impl_append_tuple!();
impl_append_tuple!(P1);
impl_append_tuple!(P1, P2);
impl_append_tuple!(P1, P2, P3);
impl_append_tuple!(P1, P2, P3, P4);
impl_append_tuple!(P1, P2, P3, P4, P5);
impl_append_tuple!(P1, P2, P3, P4, P5, P6);
impl_append_tuple!(P1, P2, P3, P4, P5, P6, P7);
impl_append_tuple!(P1, P2, P3, P4, P5, P6, P7, P8);

impl<P, N> ChainableComponent<P, N>
where
    P: Clone + 'static,
    N: 'static,
{
    /// One fold step: render `next` inside `self` and append its value.
    fn push<T>(&self, next: &ChainableComponent<T, N>) -> ChainableComponent<P::Output, N>
    where
        P: Append<T>,
        P::Output: 'static,
        T: Clone + 'static,
    {
        self.ap(next.map(|value: T| move |prefix: P| prefix.append(value.clone())))
    }
}

/// A collection of chainables that [`all`] can combine.
pub trait AllOf<N> {
    /// The ordered collection of produced values.
    type Output;

    /// Combine into one chainable producing every value in input order.
    fn all(self) -> ChainableComponent<Self::Output, N>;
}

impl<A, N> AllOf<N> for Vec<ChainableComponent<A, N>>
where
    A: Clone + 'static,
    N: 'static,
{
    type Output = Vec<A>;

    fn all(self) -> ChainableComponent<Vec<A>, N> {
        let start = ChainableComponent::of(Vec::with_capacity(self.len()));
        self.iter().fold(start, |agg, next| agg.push(next))
    }
}

impl<A, N, const K: usize> AllOf<N> for [ChainableComponent<A, N>; K]
where
    A: Clone + 'static,
    N: 'static,
{
    type Output = Vec<A>;

    fn all(self) -> ChainableComponent<Vec<A>, N> {
        Vec::from(self).all()
    }
}

macro_rules! impl_all_of_tuple {
    ($($T:ident => $value:ident),+) => {
        impl<N: 'static, $($T: Clone + 'static),+> AllOf<N> for ($(ChainableComponent<$T, N>,)+) {
            type Output = ($($T,)+);

            fn all(self) -> ChainableComponent<Self::Output, N> {
                let ($($value,)+) = self;
                let agg = ChainableComponent::of(());
                $(let agg = agg.push(&$value);)+
                agg
            }
        }
    };
}

impl_all_of_tuple!(T1 => c1);
impl_all_of_tuple!(T1 => c1, T2 => c2);
impl_all_of_tuple!(T1 => c1, T2 => c2, T3 => c3);
impl_all_of_tuple!(T1 => c1, T2 => c2, T3 => c3, T4 => c4);
impl_all_of_tuple!(T1 => c1, T2 => c2, T3 => c3, T4 => c4, T5 => c5);
impl_all_of_tuple!(T1 => c1, T2 => c2, T3 => c3, T4 => c4, T5 => c5, T6 => c6);
impl_all_of_tuple!(T1 => c1, T2 => c2, T3 => c3, T4 => c4, T5 => c5, T6 => c6, T7 => c7);
impl_all_of_tuple!(
    T1 => c1, T2 => c2, T3 => c3, T4 => c4, T5 => c5, T6 => c6, T7 => c7, T8 => c8
);
impl_all_of_tuple!(
    T1 => c1, T2 => c2, T3 => c3, T4 => c4, T5 => c5, T6 => c6, T7 => c7, T8 => c8, T9 => c9
);

/// Combine an ordered collection of chainables into one chainable of their
/// values.
///
/// ```
/// use chainable_core::{ChainableComponent, all, of};
///
/// let c: ChainableComponent<Vec<i32>, String> = all(vec![of(1), of(2), of(3)]);
/// assert_eq!(c.render(|v| format!("{v:?}")), "[1, 2, 3]");
/// ```
#[must_use]
pub fn all<T, N>(values: T) -> ChainableComponent<T::Output, N>
where
    T: AllOf<N>,
{
    values.all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainable::{Continuation, from_render, of};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn wrapping<A: Clone + 'static>(tag: &'static str, value: A) -> ChainableComponent<A, String> {
        from_render(move |k: Continuation<A, String>| format!("{tag}[{}]", k(value.clone())))
    }

    #[test]
    fn all_of_units_yields_ordered_vec_once() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let calls_clone = Rc::clone(&calls);
        let seen_clone = Rc::clone(&seen);

        let combined: ChainableComponent<Vec<i32>, ()> = all(vec![of(1), of(2), of(3)]);
        combined.render(move |values| {
            calls_clone.set(calls_clone.get() + 1);
            *seen_clone.borrow_mut() = values;
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn all_of_long_vec_stays_within_stack() {
        let combined: ChainableComponent<Vec<usize>, usize> =
            all((0..512).map(of).collect::<Vec<_>>());
        assert_eq!(combined.render(|v| v.iter().sum()), (0..512).sum());
    }

    #[test]
    fn all_clones_partial_collection_once_per_step() {
        struct Counted(Rc<Cell<usize>>);

        impl Clone for Counted {
            fn clone(&self) -> Self {
                self.0.set(self.0.get() + 1);
                Self(Rc::clone(&self.0))
            }
        }

        let clones = Rc::new(Cell::new(0));
        let n = 6;
        let items = (0..n)
            .map(|_| of::<_, ()>(Counted(Rc::clone(&clones))))
            .collect::<Vec<_>>();
        let combined = all(items);
        clones.set(0);
        combined.render(move |values| assert_eq!(values.len(), n));
        // Step k clones the k-element prefix, then the new element twice:
        // once as `of` hands it over and once as it is appended.
        assert_eq!(clones.get(), (0..n).map(|k| k + 2).sum::<usize>());
    }

    #[test]
    fn all_of_empty_vec_yields_empty_vec() {
        let combined: ChainableComponent<Vec<u8>, usize> = all(Vec::new());
        assert_eq!(combined.render(|v| v.len()), 0);
    }

    #[test]
    fn all_nests_first_element_outermost() {
        let combined = all(vec![wrapping("a", 1), wrapping("b", 2), wrapping("c", 3)]);
        assert_eq!(combined.render(|v| format!("{v:?}")), "a[b[c[[1, 2, 3]]]]");
    }

    #[test]
    fn all_of_heterogeneous_tuple() {
        let combined = all((wrapping("n", 1u8), wrapping("s", "two"), wrapping("f", 3.5f32)));
        assert_eq!(
            combined.render(|(n, s, f)| format!("{n}/{s}/{f}")),
            "n[s[f[1/two/3.5]]]"
        );
    }

    #[test]
    fn all_of_single_tuple() {
        let combined: ChainableComponent<(char,), String> = all((of('x'),));
        assert_eq!(combined.render(|(c,)| c.to_string()), "x");
    }

    #[test]
    fn all_of_nine_tuple_keeps_order() {
        let combined: ChainableComponent<_, String> = all((
            of(1),
            of(2),
            of(3),
            of(4),
            of(5),
            of(6),
            of(7),
            of(8),
            of(9),
        ));
        let rendered = combined.render(|(a, b, c, d, e, f, g, h, i)| {
            [a, b, c, d, e, f, g, h, i]
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });
        assert_eq!(rendered, "1,2,3,4,5,6,7,8,9");
    }

    #[test]
    fn all_of_array_matches_vec() {
        let from_array = all([wrapping("a", 'x'), wrapping("b", 'y')]);
        let from_vec = all(vec![wrapping("a", 'x'), wrapping("b", 'y')]);
        let render = |v: Vec<char>| v.into_iter().collect::<String>();
        assert_eq!(from_array.render(render), from_vec.render(render));
    }

    #[test]
    fn associated_all_matches_free_function() {
        let assoc: ChainableComponent<(i32, bool), String> =
            ChainableComponent::all((of(4), of(true)));
        assert_eq!(assoc.render(|(n, b)| format!("{n}{b}")), "4true");
    }

    #[test]
    fn append_extends_tuples_and_vecs() {
        assert_eq!(().append(1), (1,));
        assert_eq!((1, "a").append('c'), (1, "a", 'c'));
        assert_eq!(Append::append(vec![1, 2], 3), vec![1, 2, 3]);
    }
}
