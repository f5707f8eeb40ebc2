pub mod calibration;
pub mod metadata;
pub mod season;
pub mod summary;
pub mod tick;

pub use calibration::*;
pub use metadata::*;
pub use season::*;
pub use summary::*;
pub use tick::*;
