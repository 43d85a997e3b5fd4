use crate::Callable;

/// A callable that feeds the result of one callable into another.
///
/// Created by [`compose()`]. Invoking a `Composed` always runs `inner` first
/// with the full argument list, then runs `outer` with a single argument:
/// `inner`'s result. Both run against the captured context. When used as a
/// [`Callable`] the receiver handed in is ignored in favour of the captured one.
#[derive(Debug, Clone)]
pub struct Composed<O, I, C> {
    outer: O,
    inner: I,
    context: Option<C>,
}

/// Composes `outer` after `inner`.
///
/// `compose(f, g, ctx).invoke(args)` evaluates `f(ctx, [g(ctx, args)])`.
///
/// # Example
///
/// ```
/// use scraps_fn::{callable, compose};
///
/// let sum = callable(|_: Option<&()>, args: Vec<i32>| args.iter().sum::<i32>());
/// let describe = callable(|_: Option<&()>, args: Vec<i32>| format!("total {}", args[0]));
///
/// let summary = compose(describe, sum, None);
/// assert_eq!(summary.invoke(vec![1, 2, 3]), "total 6");
/// ```
pub fn compose<O, I, C>(outer: O, inner: I, context: Option<C>) -> Composed<O, I, C> {
    Composed {
        outer,
        inner,
        context,
    }
}

impl<O, I, C> Composed<O, I, C> {
    /// Runs `inner` with `args`, then `outer` with `inner`'s result.
    pub fn invoke<A>(&self, args: Vec<A>) -> O::Output
    where
        I: Callable<C, A>,
        O: Callable<C, I::Output>,
    {
        let context = self.context.as_ref();
        let intermediate = self.inner.call_with(context, args);
        self.outer.call_with(context, vec![intermediate])
    }
}

impl<O, I, C, A> Callable<C, A> for Composed<O, I, C>
where
    I: Callable<C, A>,
    O: Callable<C, I::Output>,
{
    type Output = O::Output;

    fn call_with(&self, _receiver: Option<&C>, args: Vec<A>) -> Self::Output {
        self.invoke(args)
    }
}

/// A composer with an execution context configured ahead of time.
///
/// Created by [`compose_as()`].
#[derive(Debug, Clone)]
pub struct ComposeAs<C> {
    context: Option<C>,
}

/// Returns a composer that passes `context` to every composition it builds.
pub fn compose_as<C>(context: Option<C>) -> ComposeAs<C> {
    ComposeAs { context }
}

impl<C: Clone> ComposeAs<C> {
    /// Composes `outer` after `inner` using the configured context.
    pub fn compose<O, I>(&self, outer: O, inner: I) -> Composed<O, I, C> {
        compose(outer, inner, self.context.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{callable, partial};

    #[test]
    fn inner_receives_all_args_outer_receives_one() {
        let inner_args = RefCell::new(Vec::new());
        let outer_args = RefCell::new(Vec::new());

        let product = callable(|_: Option<&()>, args: Vec<i32>| {
            inner_args.borrow_mut().push(args.clone());
            args.iter().product::<i32>()
        });
        let negate = callable(|_: Option<&()>, args: Vec<i32>| {
            outer_args.borrow_mut().push(args.clone());
            -args[0]
        });

        let composed = compose(&negate, &product, None);
        assert_eq!(composed.invoke(vec![3, 4]), -12);

        assert_eq!(inner_args.borrow().as_slice(), &[vec![3, 4]]);
        assert_eq!(outer_args.borrow().as_slice(), &[vec![12]]);
    }

    #[test]
    fn inner_runs_before_outer() {
        let order = RefCell::new(Vec::new());

        let inner = callable(|_: Option<&()>, _: Vec<u8>| {
            order.borrow_mut().push("inner");
            "from inner"
        });
        let outer = callable(|_: Option<&()>, args: Vec<&'static str>| {
            order.borrow_mut().push("outer");
            args[0].len()
        });

        let composed = compose(outer, inner, None);
        assert_eq!(composed.invoke(Vec::new()), 10);
        assert_eq!(order.into_inner(), vec!["inner", "outer"]);
    }

    #[test]
    fn context_is_receiver_for_both() {
        let receivers = RefCell::new(Vec::new());

        let inner = callable(|factor: Option<&i32>, args: Vec<i32>| {
            receivers.borrow_mut().push(factor.copied());
            args[0] * factor.copied().unwrap_or(1)
        });
        let outer = callable(|offset: Option<&i32>, args: Vec<i32>| {
            receivers.borrow_mut().push(offset.copied());
            args[0] + offset.copied().unwrap_or(0)
        });

        let composed = compose(outer, inner, Some(10));
        assert_eq!(composed.invoke(vec![4]), 50);
        assert_eq!(receivers.into_inner(), vec![Some(10), Some(10)]);
    }

    #[test]
    fn output_types_can_change() {
        let count = callable(|_: Option<&()>, args: Vec<&'static str>| args.len());
        let is_pair = callable(|_: Option<&()>, args: Vec<usize>| args[0] == 2);

        let composed = compose(is_pair, count, None);
        assert!(composed.invoke(vec!["a", "b"]));
        assert!(!composed.invoke(vec!["a"]));
    }

    #[test]
    fn composes_bound_callables() {
        let add = callable(|_: Option<&()>, args: Vec<i32>| args.iter().sum::<i32>());
        let add_ten = partial(&add, None, vec![10]);
        let double = callable(|_: Option<&()>, args: Vec<i32>| args[0] * 2);

        let composed = compose(double, add_ten, None);
        assert_eq!(composed.invoke(vec![1, 2]), 26);
    }

    #[test]
    fn compose_as_binds_context() {
        let scale = callable(|factor: Option<&i32>, args: Vec<i32>| {
            args[0] * factor.copied().unwrap_or(1)
        });

        let composer = compose_as(Some(3));
        let composed = composer.compose(&scale, &scale);

        assert_eq!(composed.invoke(vec![2]), 18);
    }
}
