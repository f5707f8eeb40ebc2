pub mod calculations;
pub mod jitter;
pub mod seasonal;
pub mod simulation;

pub use jitter::{JitterSource, RngJitter, ZeroJitter};
pub use simulation::{MonthProgress, SimulationRun, Simulator};
