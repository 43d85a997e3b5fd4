use crate::Callable;

/// A callable with a receiver and leading arguments bound ahead of time.
///
/// Created by [`partial()`]. Invoking a `Bound` with trailing arguments calls
/// the target with `leading ++ trailing`, using the captured context as the
/// receiver. When used as a [`Callable`] the receiver handed in is ignored in
/// favour of the captured one.
#[derive(Debug, Clone)]
pub struct Bound<F, C, A> {
    target: F,
    context: Option<C>,
    leading: Vec<A>,
}

/// Binds an execution context and leading arguments to `target`.
///
/// No arity validation happens here; the target decides what to do with too
/// many or too few arguments. An empty `leading` list produces a wrapper that
/// only binds the context.
///
/// # Example
///
/// ```
/// use scraps_fn::{callable, partial};
///
/// let join = callable(|sep: Option<&&'static str>, parts: Vec<&'static str>| {
///     parts.join(sep.copied().unwrap_or(" "))
/// });
///
/// let path = partial(join, Some("/"), vec!["usr", "local"]);
/// assert_eq!(path.invoke(vec!["bin"]), "usr/local/bin");
/// ```
pub fn partial<F, C, A>(target: F, context: Option<C>, leading: Vec<A>) -> Bound<F, C, A>
where
    F: Callable<C, A>,
{
    Bound {
        target,
        context,
        leading,
    }
}

impl<F, C, A> Bound<F, C, A>
where
    F: Callable<C, A>,
    A: Clone,
{
    /// Calls the target with the bound arguments followed by `trailing`.
    pub fn invoke(&self, trailing: Vec<A>) -> F::Output {
        let mut args = Vec::with_capacity(self.leading.len() + trailing.len());
        args.extend(self.leading.iter().cloned());
        args.extend(trailing);
        self.target.call_with(self.context.as_ref(), args)
    }

    /// Returns the captured execution context.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Returns the captured leading arguments.
    pub fn leading(&self) -> &[A] {
        &self.leading
    }
}

impl<F, C, A> Callable<C, A> for Bound<F, C, A>
where
    F: Callable<C, A>,
    A: Clone,
{
    type Output = F::Output;

    fn call_with(&self, _receiver: Option<&C>, args: Vec<A>) -> Self::Output {
        self.invoke(args)
    }
}
