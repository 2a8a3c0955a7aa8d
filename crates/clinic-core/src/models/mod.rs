//! Domain models for the clinic system.

mod patient;
mod reservation;

pub use patient::*;
pub use reservation::*;
