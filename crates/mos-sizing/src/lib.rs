//! Closed-form MOSFET sizing equations
//!
//! Solves the square-law drain-current model for device width, with and
//! without channel-length-modulation correction, plus the forward current,
//! output-resistance, overdrive and operating-region relations that follow
//! from the same model.
//!
//! ## Module Structure
//!
//! - `equations`: The solvers (pure functions over `mos_devices` records)
//! - `error`: The `SizingError`/`Result` surface
//!
//! ## Usage
//!
//! ```ignore
//! use mos_devices::{Mosfet, Nmos, Transistor};
//! use mos_sizing::solve_for_width;
//!
//! let device = Mosfet::from(Nmos {
//!     transistor: Transistor {
//!         current: Some(2e-3),
//!         length: Some(1e-4),
//!         overdrive_voltage: Some(0.2),
//!         ..Transistor::default()
//!     },
//!     transconductance_parameter: Some(2e-4),
//!     ..Nmos::default()
//! });
//!
//! let w = solve_for_width(&device)?;   // 0.05 m
//! ```
//!
//! Every solver is a stateless single-shot evaluation: it reads the record's
//! fields at call time and either returns the computed scalar or reports the
//! first unset field or zero denominator it encounters.

pub mod equations;
pub mod error;

// Re-export commonly used items
pub use equations::{
    operating_region, output_resistance, overdrive_voltage, saturation_current,
    saturation_current_with_clm, solve_for_width, solve_for_width_with_clm,
};
pub use error::{Result, SizingError};
