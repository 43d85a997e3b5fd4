//! Continuation-passing flows of error-first steps.
//!
//! A flow is an ordered list of steps followed by a terminal. Each step is
//! called with the shared context, the incoming error value, and a [`Next`]
//! continuation; it keeps the flow going by calling [`Next::proceed`] with the
//! error value for whatever runs next. The terminal is called with the context
//! and the final error value.
//!
//! # Construction
//!
//! [`flow()`] wraps the terminal first, then wraps each step from last to
//! first so that every step's continuation is the already-wrapped successor.
//! The wrapped first step is then started immediately with no error. There is
//! no separate start call.
//!
//! # Error values
//!
//! The error value is a convention between steps. The engine never inspects
//! it and never stops the chain because of it; steps decide whether to
//! continue.
//!
//! # Suspension
//!
//! Steps run synchronously on the calling thread. When every step calls
//! `proceed` before returning, the whole chain has finished by the time
//! `flow()` returns. A step that stores its continuation and calls it later
//! suspends the chain: `flow()` returns as soon as the synchronous part is
//! done, and whoever holds the continuation drives the rest. A step that
//! drops its continuation stalls the chain forever, with no error, timeout,
//! or completion signal. Flows are single use and independent of each other.
//!
//! # Stack depth
//!
//! A step that calls `proceed` synchronously runs the rest of the chain
//! inside that call, so stack depth grows with every such step. A flow of
//! many thousands of synchronous steps can overflow the stack. Deferring a
//! continuation to a task queue unwinds the stack at that point.

mod error;
mod next;

pub use error::FlowError;
pub use next::Next;

use tracing::{debug, trace, warn};

/// A boxed flow step.
pub type FlowStep<'a, C, E> = Box<dyn FnOnce(Option<&C>, Option<E>, Next<'a, E>) + 'a>;

/// Boxes `function` as a flow step.
///
/// Lets the compiler infer the closure's parameter types from the step shape.
pub fn flow_step<'a, C, E, F>(function: F) -> FlowStep<'a, C, E>
where
    F: FnOnce(Option<&C>, Option<E>, Next<'a, E>) + 'a,
{
    Box::new(function)
}

/// Builds a continuation chain from `steps` and `terminal` and starts it.
///
/// The first step is called right away with no error. See the
/// [module docs](self) for how the chain proceeds.
///
/// # Errors
///
/// Returns [`FlowError::Empty`] if `steps` is empty. Nothing is called.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
///
/// use scraps_fn::{flow, flow_step};
///
/// let result = RefCell::new(None);
///
/// flow::<(), String, _>(
///     vec![
///         flow_step(|_, _, next| next.proceed(Some("a".to_string()))),
///         flow_step(|_, error: Option<String>, next| {
///             next.proceed(Some(error.unwrap_or_default() + "b"));
///         }),
///     ],
///     |_, error| *result.borrow_mut() = error,
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(result.into_inner().as_deref(), Some("ab"));
/// ```
pub fn flow<'a, C, E, T>(
    steps: Vec<FlowStep<'a, C, E>>,
    terminal: T,
    context: Option<C>,
) -> Result<(), FlowError>
where
    C: Clone + 'a,
    E: 'a,
    T: FnOnce(Option<&C>, Option<E>) + 'a,
{
    if steps.is_empty() {
        warn!("rejected flow with no steps");
        return Err(FlowError::Empty);
    }

    let total = steps.len();

    let terminal_context = context.clone();
    let mut chain: Box<dyn FnOnce(Option<E>) + 'a> = Box::new(move |error| {
        debug!(steps = total, "flow reached terminal");
        terminal(terminal_context.as_ref(), error);
    });

    for (index, step) in steps.into_iter().enumerate().rev() {
        let next = Next::new(index + 1, chain);
        let step_context = context.clone();
        chain = Box::new(move |error| {
            trace!(step = index, "entering flow step");
            step(step_context.as_ref(), error, next);
        });
    }

    debug!(steps = total, "starting flow");
    chain(None);

    Ok(())
}

/// A flow starter with an execution context configured ahead of time.
///
/// Created by [`flow_as()`].
#[derive(Debug, Clone)]
pub struct FlowAs<C> {
    context: Option<C>,
}

/// Returns a flow starter that shares `context` with every step of every flow.
pub fn flow_as<C>(context: Option<C>) -> FlowAs<C> {
    FlowAs { context }
}

impl<C: Clone> FlowAs<C> {
    /// Builds and starts a flow using the configured context.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`flow()`].
    pub fn flow<'a, E, T>(
        &self,
        steps: Vec<FlowStep<'a, C, E>>,
        terminal: T,
    ) -> Result<(), FlowError>
    where
        C: 'a,
        E: 'a,
        T: FnOnce(Option<&C>, Option<E>) + 'a,
    {
        flow(steps, terminal, self.context.clone())
    }
}
