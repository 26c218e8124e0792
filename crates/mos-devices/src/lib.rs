//! MOS transistor parameter records
//!
//! This crate holds the data model for a single MOS transistor instance:
//! a snapshot of known electrical and geometric scalars, with polarity
//! variants for NMOS and PMOS devices.
//!
//! ## Module Structure
//!
//! - `params`: Parameter records (Transistor, Nmos, Pmos)
//! - `types`: Polarity and region tags (MosType, MosRegion) and the
//!   tagged device sum (Mosfet)
//!
//! ## Usage
//!
//! ```ignore
//! use mos_devices::{Mosfet, Nmos, Transistor};
//!
//! // Describe what is known about the device; everything else stays unset.
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
//! assert!(device.transconductance_parameter().is_some());
//! ```
//!
//! Fields are plain `Option<f64>` values: `None` means "not yet known",
//! and no value is validated or derived from another. The sizing equations
//! in the `mos-sizing` crate read these records at call time.

pub mod params;
pub mod types;

// Re-export commonly used items
pub use params::{Nmos, Pmos, Transistor};
pub use types::{MosRegion, MosType, Mosfet};
