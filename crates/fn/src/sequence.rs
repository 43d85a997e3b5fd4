//! Left-to-right pipelines built from partial application and composition.
//!
//! [`sequence()`] threads a value through an ordered list of steps: the first
//! step receives the pipeline's arguments, every later step receives the
//! previous step's result as its single argument.
//!
//! The pipeline is assembled back to front. The final entry becomes the tail
//! through plain partial application, and each earlier entry is partially
//! applied with the context and composed in front of what has been built so
//! far. Construction runs right to left, yet execution order matches the input
//! order.
//!
//! # Absent entries
//!
//! Entries are `Option`s. An absent entry anywhere but the end of the list is
//! skipped and contributes no transformation. The final entry is never skipped
//! because it anchors the pipeline; an absent final entry is rejected with
//! [`SequenceError::AbsentFinalStep`].

mod error;

pub use error::SequenceError;

use tracing::{debug, warn};

use crate::{Callable, compose, partial};

/// A boxed pipeline step that maps an argument list to a value of the same type.
pub type Step<'a, C, A> = Box<dyn Fn(Option<&C>, Vec<A>) -> A + 'a>;

/// Boxes `function` as a present pipeline entry.
///
/// Lets the compiler infer the closure's parameter types from the step shape.
pub fn step<'a, C, A, F>(function: F) -> Option<Step<'a, C, A>>
where
    F: Fn(Option<&C>, Vec<A>) -> A + 'a,
{
    Some(Box::new(function))
}

/// A callable that runs a list of steps from left to right.
///
/// Created by [`sequence()`].
pub struct Pipeline<'a, C, A> {
    head: Step<'a, C, A>,
    len: usize,
}

impl<C, A> Pipeline<'_, C, A> {
    /// Runs the pipeline with the given initial arguments.
    pub fn invoke(&self, args: Vec<A>) -> A {
        (self.head)(None, args)
    }

    /// Returns the number of steps that transform the value.
    ///
    /// Absent entries that were skipped are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no step transforms the value, which construction never allows.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<C, A> Callable<C, A> for Pipeline<'_, C, A> {
    type Output = A;

    fn call_with(&self, _receiver: Option<&C>, args: Vec<A>) -> A {
        self.invoke(args)
    }
}

impl<C, A> std::fmt::Debug for Pipeline<'_, C, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").field("len", &self.len).finish()
    }
}

/// Builds a pipeline that runs `steps` in order against `context`.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if `steps` is empty, or
/// [`SequenceError::AbsentFinalStep`] if the last entry is `None`.
///
/// # Example
///
/// ```
/// use scraps_fn::{sequence, step};
///
/// let pipeline = sequence::<(), i32>(
///     vec![
///         step(|_, args: Vec<i32>| args[0] + 1),
///         step(|_, args: Vec<i32>| args[0] * 2),
///         step(|_, args: Vec<i32>| args[0] - 3),
///     ],
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(pipeline.invoke(vec![5]), 9);
/// ```
pub fn sequence<'a, C, A>(
    steps: Vec<Option<Step<'a, C, A>>>,
    context: Option<C>,
) -> Result<Pipeline<'a, C, A>, SequenceError>
where
    C: Clone + 'a,
    A: Clone + 'a,
{
    let total = steps.len();
    let mut entries = steps.into_iter().rev();

    let Some(last) = entries.next() else {
        warn!("rejected sequence with no steps");
        return Err(SequenceError::Empty);
    };
    let Some(last) = last else {
        warn!(index = total - 1, "rejected sequence with an absent final step");
        return Err(SequenceError::AbsentFinalStep { index: total - 1 });
    };

    let tail = partial(last, context.clone(), Vec::new());
    let mut head: Step<'a, C, A> = Box::new(move |_: Option<&C>, args: Vec<A>| tail.invoke(args));
    let mut len = 1;

    for entry in entries {
        let Some(earlier) = entry else {
            continue;
        };

        let inner = partial(earlier, context.clone(), Vec::new());
        let composed = compose(head, inner, context.clone());
        head = Box::new(move |_: Option<&C>, args: Vec<A>| composed.invoke(args));
        len += 1;
    }

    debug!(steps = len, skipped = total - len, "built sequence");

    Ok(Pipeline { head, len })
}

/// A sequencer with an execution context configured ahead of time.
///
/// Created by [`sequence_as()`].
#[derive(Debug, Clone)]
pub struct SequenceAs<C> {
    context: Option<C>,
}

/// Returns a sequencer that passes `context` to every pipeline it builds.
pub fn sequence_as<C>(context: Option<C>) -> SequenceAs<C> {
    SequenceAs { context }
}

impl<C: Clone> SequenceAs<C> {
    /// Builds a pipeline using the configured context.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`sequence()`].
    pub fn sequence<'a, A>(
        &self,
        steps: Vec<Option<Step<'a, C, A>>>,
    ) -> Result<Pipeline<'a, C, A>, SequenceError>
    where
        C: 'a,
        A: Clone + 'a,
    {
        sequence(steps, self.context.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn runs_left_to_right() {
        let pipeline = sequence::<(), i32>(
            vec![
                step(|_, args: Vec<i32>| args[0] + 1),
                step(|_, args: Vec<i32>| args[0] * 2),
                step(|_, args: Vec<i32>| args[0] - 3),
            ],
            None,
        )
        .unwrap();

        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.invoke(vec![5]), 9); // (5 + 1) * 2 - 3
    }

    #[test]
    fn float_pipeline() {
        let pipeline = sequence::<(), f64>(
            vec![
                step(|_, args: Vec<f64>| args[0].sqrt()),
                step(|_, args: Vec<f64>| args[0] / 3.0),
                step(|_, args: Vec<f64>| args[0] + 0.1),
            ],
            None,
        )
        .unwrap();

        assert_relative_eq!(pipeline.invoke(vec![2.0]), 2f64.sqrt() / 3.0 + 0.1);
    }

    #[test]
    fn first_step_sees_all_args_later_steps_see_one() {
        let seen = RefCell::new(Vec::new());

        let pipeline = sequence::<(), i32>(
            vec![
                step(|_, args: Vec<i32>| {
                    seen.borrow_mut().push(args.clone());
                    args.iter().sum()
                }),
                step(|_, args: Vec<i32>| {
                    seen.borrow_mut().push(args.clone());
                    args[0] * 10
                }),
            ],
            None,
        )
        .unwrap();

        assert_eq!(pipeline.invoke(vec![1, 2, 3]), 60);
        assert_eq!(seen.borrow().as_slice(), &[vec![1, 2, 3], vec![6]]);
    }

    #[test]
    fn single_step_is_partial_application() {
        let pipeline = sequence::<(), usize>(vec![step(|_, args: Vec<usize>| args.len())], None)
            .unwrap();

        assert_eq!(pipeline.invoke(vec![7, 8, 9]), 3);
    }

    #[test]
    fn context_is_receiver_for_every_step() {
        let receivers = RefCell::new(Vec::new());

        let pipeline = sequence::<i32, i32>(
            vec![
                step(|offset: Option<&i32>, args: Vec<i32>| {
                    receivers.borrow_mut().push(offset.copied());
                    args[0] + offset.copied().unwrap_or(0)
                }),
                step(|offset: Option<&i32>, args: Vec<i32>| {
                    receivers.borrow_mut().push(offset.copied());
                    args[0] * offset.copied().unwrap_or(1)
                }),
            ],
            Some(4),
        )
        .unwrap();

        assert_eq!(pipeline.invoke(vec![1]), 20);
        assert_eq!(receivers.borrow().as_slice(), &[Some(4), Some(4)]);
    }

    #[test]
    fn absent_interior_entries_are_skipped() {
        let pipeline = sequence::<(), i32>(
            vec![
                step(|_, args: Vec<i32>| args[0] + 1),
                None,
                step(|_, args: Vec<i32>| args[0] * 2),
                None,
                step(|_, args: Vec<i32>| args[0] - 3),
            ],
            None,
        )
        .unwrap();

        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.invoke(vec![5]), 9);
    }

    #[test]
    fn absent_leading_entry_passes_args_to_next_step() {
        let pipeline = sequence::<(), i32>(
            vec![
                None,
                step(|_, args: Vec<i32>| args.iter().product()),
                step(|_, args: Vec<i32>| args[0] + 1),
            ],
            None,
        )
        .unwrap();

        assert_eq!(pipeline.invoke(vec![2, 3, 4]), 25);
    }

    #[test]
    fn absent_final_entry_is_rejected() {
        let result = sequence::<(), i32>(
            vec![step(|_, args: Vec<i32>| args[0] + 1), None],
            None,
        );

        assert_eq!(result.unwrap_err(), SequenceError::AbsentFinalStep { index: 1 });
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = sequence::<(), i32>(Vec::new(), None);
        assert_eq!(result.unwrap_err(), SequenceError::Empty);
    }

    #[test]
    fn pipeline_is_callable() {
        let pipeline = sequence::<(), i32>(
            vec![
                step(|_, args: Vec<i32>| args[0] + 1),
                step(|_, args: Vec<i32>| args[0] * 3),
            ],
            None,
        )
        .unwrap();

        let doubled = compose(
            |_: Option<&()>, args: Vec<i32>| args[0] * 2,
            pipeline,
            None,
        );
        assert_eq!(doubled.invoke(vec![1]), 12);
    }

    #[test]
    fn sequence_as_binds_context() {
        let sequencer = sequence_as(Some(String::from("!")));

        let pipeline = sequencer
            .sequence(vec![
                step(|_, args: Vec<String>| args.concat()),
                step(|suffix: Option<&String>, args: Vec<String>| {
                    format!("{}{}", args[0], suffix.map_or("", String::as_str))
                }),
            ])
            .unwrap();

        assert_eq!(
            pipeline.invoke(vec!["hi".to_string(), " there".to_string()]),
            "hi there!",
        );
    }
}
