//! Building instances from external representations.

pub mod dimacs;
