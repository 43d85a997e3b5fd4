use std::fmt;

use tracing::trace;

/// The continuation handed to a flow step.
///
/// Calling [`Next::proceed`] runs the rest of the chain: the following step,
/// or the terminal if this was the last step. `proceed` consumes the
/// continuation, so each step can continue the chain at most once. Dropping a
/// `Next` without calling `proceed` halts the flow silently.
///
/// A step may store its `Next` and call `proceed` later, for example from a
/// callback or a task queue.
pub struct Next<'a, E> {
    position: usize,
    continuation: Box<dyn FnOnce(Option<E>) + 'a>,
}

impl<'a, E> Next<'a, E> {
    pub(crate) fn new(position: usize, continuation: Box<dyn FnOnce(Option<E>) + 'a>) -> Self {
        Self {
            position,
            continuation,
        }
    }

    /// Continues the flow, handing `error` to whatever runs next.
    pub fn proceed(self, error: Option<E>) {
        trace!(position = self.position, "flow proceeding");
        (self.continuation)(error);
    }

    /// Returns the index of the step this continuation resumes.
    ///
    /// Equal to the number of steps when the continuation leads to the
    /// terminal.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<E> fmt::Debug for Next<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
