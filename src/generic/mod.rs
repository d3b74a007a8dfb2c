//! Generic structures, not specific to colorings or to the solver.

pub mod activity_heap;
pub mod luby;
pub mod minimal_pcg;
