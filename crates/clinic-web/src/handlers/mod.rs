//! Route handlers.

pub mod lists;
pub mod patients;
