/// A function-like value invoked with an optional receiver and an argument list.
///
/// `Callable` is the building block every combinator in this crate produces
/// and consumes. A callable receives:
///
/// - `receiver`: the execution context it runs against, if any. Callables that
///   do not need one simply ignore it.
/// - `args`: the ordered argument list. Variadic call sites are modelled as a
///   `Vec<A>` so that leading and trailing arguments can be concatenated.
///
/// Any closure of the shape `Fn(Option<&C>, Vec<A>) -> O` is a `Callable`
/// through a blanket implementation, so most code never implements this trait
/// by hand. Use [`callable()`] to pin a closure's signature when the compiler
/// cannot infer it from context.
///
/// # Example
///
/// ```
/// use scraps_fn::{Callable, callable};
///
/// struct Greeter {
///     greeting: &'static str,
/// }
///
/// let greet = callable(|greeter: Option<&Greeter>, names: Vec<String>| {
///     let greeting = greeter.map_or("hi", |g| g.greeting);
///     format!("{greeting}, {}", names.join(" and "))
/// });
///
/// let hello = Greeter { greeting: "hello" };
/// let names = vec!["ann".to_string(), "bo".to_string()];
/// assert_eq!(greet.call_with(Some(&hello), names), "hello, ann and bo");
/// assert_eq!(greet.call_with(None, vec!["cy".to_string()]), "hi, cy");
/// ```
pub trait Callable<C, A> {
    type Output;

    /// Invokes the callable against `receiver` with the given arguments.
    fn call_with(&self, receiver: Option<&C>, args: Vec<A>) -> Self::Output;
}

impl<C, A, O, F> Callable<C, A> for F
where
    F: Fn(Option<&C>, Vec<A>) -> O,
{
    type Output = O;

    fn call_with(&self, receiver: Option<&C>, args: Vec<A>) -> O {
        self(receiver, args)
    }
}

/// Pins a closure to the `Callable` calling convention.
///
/// Returns the closure unchanged. Passing a closure through this function lets
/// the compiler infer its parameter types, which it cannot do when the closure
/// is handed straight to a function bounded only by [`Callable`].
pub fn callable<C, A, O, F>(function: F) -> F
where
    F: Fn(Option<&C>, Vec<A>) -> O,
{
    function
}

/// Returns its input unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// A callable that reverses its argument list before forwarding it.
///
/// Created by [`flip()`]. The receiver handed to a `Flipped` is passed through
/// to the target untouched.
#[derive(Debug, Clone)]
pub struct Flipped<F> {
    target: F,
}

/// Wraps `target` so that it receives its arguments in reverse order.
///
/// # Example
///
/// ```
/// use scraps_fn::{Callable, callable, flip};
///
/// let minus = callable(|_: Option<&()>, args: Vec<i32>| args[0] - args[1]);
/// let flipped = flip(minus);
///
/// assert_eq!(flipped.call_with(None, vec![10, 3]), -7);
/// ```
pub fn flip<F>(target: F) -> Flipped<F> {
    Flipped { target }
}

impl<C, A, F> Callable<C, A> for Flipped<F>
where
    F: Callable<C, A>,
{
    type Output = F::Output;

    fn call_with(&self, receiver: Option<&C>, mut args: Vec<A>) -> Self::Output {
        args.reverse();
        self.target.call_with(receiver, args)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn closures_are_callables() {
        let sum = callable(|_: Option<&()>, args: Vec<i32>| args.iter().sum::<i32>());
        assert_eq!(sum.call_with(None, vec![1, 2, 3]), 6);
    }

    #[test]
    fn closure_references_are_callables() {
        fn run<F: Callable<(), u8>>(target: F, args: Vec<u8>) -> F::Output {
            target.call_with(None, args)
        }

        let count = callable(|_: Option<&()>, args: Vec<u8>| args.len());

        assert_eq!(run(&count, vec![1, 2]), 2);
        assert_eq!(run(&&count, vec![7]), 1);
    }

    #[test]
    fn receiver_reaches_closure() {
        let scale = callable(|factor: Option<&i32>, args: Vec<i32>| {
            args[0] * factor.copied().unwrap_or(1)
        });

        assert_eq!(scale.call_with(Some(&4), vec![5]), 20);
        assert_eq!(scale.call_with(None, vec![5]), 5);
    }

    #[test]
    fn identity_returns_input() {
        assert_eq!(identity(7), 7);
        assert_eq!(identity("same"), "same");
    }

    #[test]
    fn flip_reverses_and_forwards_receiver() {
        let seen = RefCell::new(Vec::new());
        let record = callable(|tag: Option<&u32>, args: Vec<char>| {
            seen.borrow_mut().push((tag.copied(), args.clone()));
            args.len()
        });

        let flipped = flip(record);
        assert_eq!(flipped.call_with(Some(&9), vec!['a', 'b', 'c']), 3);

        assert_eq!(
            seen.into_inner(),
            vec![(Some(9), vec!['c', 'b', 'a'])],
        );
    }
}
