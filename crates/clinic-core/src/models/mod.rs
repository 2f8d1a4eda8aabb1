//! Domain models for the clinic records system.

mod appointment;
mod detail;
mod doctor;
mod patient;
mod record;

pub use appointment::*;
pub use detail::*;
pub use doctor::*;
pub use patient::*;
pub use record::*;
