//! MOS device type definitions
//!
//! Contains the polarity and operating-region tags plus the tagged device
//! sum handed to the sizing equations.

use serde::{Deserialize, Serialize};

use crate::params::{Nmos, Pmos, Transistor};

/// MOSFET device polarity (NMOS or PMOS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MosType {
    Nmos,
    Pmos,
}

impl Default for MosType {
    fn default() -> Self {
        MosType::Nmos
    }
}

/// Operating region of the MOSFET
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MosRegion {
    /// Cutoff: Vov <= 0
    Cutoff,
    /// Linear/Triode: Vov > 0, Vds < Vov
    Linear,
    /// Saturation: Vov > 0, Vds >= Vov
    Saturation,
}

/// A polarity-tagged device record.
///
/// The sizing equations take this sum rather than the bare [`Transistor`]:
/// only the two variants carry a transconductance parameter and terminal
/// voltages, so a base record alone cannot be sized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mosfet {
    Nmos(Nmos),
    Pmos(Pmos),
}

impl Mosfet {
    /// Polarity tag of this device.
    pub fn mos_type(&self) -> MosType {
        match self {
            Mosfet::Nmos(_) => MosType::Nmos,
            Mosfet::Pmos(_) => MosType::Pmos,
        }
    }

    /// Shared electrical state of either variant.
    pub fn transistor(&self) -> &Transistor {
        match self {
            Mosfet::Nmos(n) => &n.transistor,
            Mosfet::Pmos(p) => &p.transistor,
        }
    }

    /// Mutable access to the shared electrical state.
    pub fn transistor_mut(&mut self) -> &mut Transistor {
        match self {
            Mosfet::Nmos(n) => &mut n.transistor,
            Mosfet::Pmos(p) => &mut p.transistor,
        }
    }

    /// Process transconductance parameter (kn or kp) [A/V^2]
    pub fn transconductance_parameter(&self) -> Option<f64> {
        match self {
            Mosfet::Nmos(n) => n.transconductance_parameter,
            Mosfet::Pmos(p) => p.transconductance_parameter,
        }
    }
}

impl From<Nmos> for Mosfet {
    fn from(device: Nmos) -> Self {
        Mosfet::Nmos(device)
    }
}

impl From<Pmos> for Mosfet {
    fn from(device: Pmos) -> Self {
        Mosfet::Pmos(device)
    }
}
