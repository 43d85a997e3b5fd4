//! Functional building blocks for callables that run against an optional
//! receiver.
//!
//! - [`partial`]: bind a receiver and leading arguments
//! - [`compose`], [`compose_as`]: feed one callable's result into another
//! - [`sequence`], [`sequence_as`]: thread a value through a list of steps
//! - [`flow`], [`flow_as`]: run error-first steps as a continuation chain
//! - [`all_of`], [`any_of`], [`any`], [`some`], [`complement`]: logical
//!   combinators
//!
//! Every callable follows one calling convention, described by [`Callable`]:
//! an optional receiver `Option<&C>` and an argument list `Vec<A>`.

pub mod array;
mod callable;
mod combinators;
mod compose;
pub mod flow;
mod partial;
pub mod sequence;
mod truthiness;

pub use array::{keys, to_array};
pub use callable::{Callable, Flipped, callable, flip, identity};
pub use combinators::{Complement, all_of, any, any_of, comparator, complement, some};
pub use compose::{ComposeAs, Composed, compose, compose_as};
pub use flow::{FlowAs, FlowError, FlowStep, Next, flow, flow_as, flow_step};
pub use partial::{Bound, partial};
pub use sequence::{Pipeline, SequenceAs, SequenceError, Step, sequence, sequence_as, step};
pub use truthiness::{Truthiness, existy};
