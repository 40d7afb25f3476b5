#![forbid(unsafe_code)]

//! Do-notation over [`ChainableComponent::chain`](crate::ChainableComponent::chain).

/// Sequence chainables without nesting closures by hand.
///
/// Each `name <= expr;` step binds the value produced by the chainable
/// `expr` and continues inside its render. The binding is a single-token
/// pattern: an identifier, `_`, or a parenthesized tuple pattern such as
/// `(width, height)`. `let pattern = expr;` binds a plain value. The final
/// expression must itself be a chainable.
///
/// ```
/// use chainable_core::{ChainableComponent, chain, of};
///
/// let width: ChainableComponent<u32, String> = of(3);
/// let height: ChainableComponent<u32, String> = of(4);
///
/// let area = chain! {
///     w <= width;
///     h <= height;
///     let product = w * h;
///     of(product)
/// };
/// assert_eq!(area.render(|a| a.to_string()), "12");
/// ```
///
/// Bound names are captured by the nested continuations, which may run more
/// than once, so a non-`Copy` binding used after a later step must be
/// cloned there.
#[macro_export]
macro_rules! chain {
    (let $pattern:pat = $value:expr; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::chain!($($rest)+)
    }};
    ($binding:tt <= $chainable:expr; $($rest:tt)+) => {
        $crate::ChainableComponent::chain(&$chainable, move |$binding| $crate::chain!($($rest)+))
    };
    ($tail:expr $(;)?) => {
        $tail
    };
}

#[cfg(test)]
mod tests {
    use crate::all::all;
    use crate::chainable::{ChainableComponent, Continuation, from_render, of};

    fn wrapping<A: Clone + 'static>(tag: &'static str, value: A) -> ChainableComponent<A, String> {
        from_render(move |k: Continuation<A, String>| format!("{tag}[{}]", k(value.clone())))
    }

    #[test]
    fn chain_macro_matches_nested_chain_calls() {
        let first = wrapping("first", 2);
        let second = wrapping("second", 5);

        let by_hand = first.chain({
            let second = second.clone();
            move |a| second.chain(move |b| of(a + b))
        });
        let via_macro = chain! {
            a <= first;
            b <= second;
            of(a + b)
        };

        assert_eq!(via_macro.render(|n| n.to_string()), "first[second[7]]");
        assert_eq!(
            via_macro.render(|n| n.to_string()),
            by_hand.render(|n| n.to_string())
        );
    }

    #[test]
    fn chain_macro_supports_let_bindings() {
        let name = wrapping("name", "ada");
        let greeting = chain! {
            n <= name;
            let upper = n.to_uppercase();
            of(upper)
        };
        assert_eq!(greeting.render(|s| s), "name[ADA]");
    }

    #[test]
    fn chain_macro_destructures_tuple_bindings() {
        let size = all((wrapping("w", 3), wrapping("h", 4)));
        let area = chain! {
            (w, h) <= size;
            of(w * h)
        };
        assert_eq!(area.render(|n| n.to_string()), "w[h[12]]");
    }

    #[test]
    fn chain_macro_ignores_wildcard_bindings() {
        let outer = wrapping("outer", 'x');
        let inner = wrapping("inner", 2);
        let kept = chain! {
            _ <= outer;
            n <= inner;
            of(n + 1)
        };
        assert_eq!(kept.render(|n| n.to_string()), "outer[inner[3]]");
    }

    #[test]
    fn chain_macro_single_expression_is_identity() {
        let c: ChainableComponent<i32, String> = chain!(of(1));
        assert_eq!(c.render(|n| n.to_string()), "1");
    }
}
