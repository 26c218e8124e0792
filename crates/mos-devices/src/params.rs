//! MOS transistor parameter records
//!
//! Contains the Transistor base record shared by every MOS device plus the
//! Nmos/Pmos records that add polarity-specific terminal voltages and the
//! process transconductance parameter.
//!
//! Every field is an `Option<f64>`: `None` is the explicit "not yet known"
//! sentinel, distinct from a legitimate zero. Records carry no behavior
//! beyond storage. Setting one field never recomputes another (e.g. writing
//! `current` leaves `current_with_channel_length_mod` untouched), and no
//! range checks are applied.

use serde::{Deserialize, Serialize};

/// Electrical and geometric state common to any MOS transistor.
///
/// A value snapshot, not a model: the caller fills in whatever is known and
/// the sizing equations read the fields they need at call time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transistor {
    /// Gate overdrive voltage Vov = Vgs - Vth [V]
    pub overdrive_voltage: Option<f64>,
    /// Drain current Id [A]
    pub current: Option<f64>,
    /// Drain current including channel length modulation [A]
    pub current_with_channel_length_mod: Option<f64>,
    /// Small-signal output resistance ro [ohm]
    pub output_resistance: Option<f64>,
    /// Channel width [m]
    pub width: Option<f64>,
    /// Channel length [m]
    pub length: Option<f64>,
    /// Early voltage Va [V]
    /// Physical meaning: strength of channel length modulation; ro = Va/Id
    pub early_voltage: Option<f64>,
    /// Threshold voltage Vth [V]
    pub threshold_voltage: Option<f64>,
}

/// N-channel device record.
///
/// Terminal voltages follow the NMOS convention: gate-to-source,
/// drain-to-source, gate-to-drain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Nmos {
    /// Shared electrical state
    pub transistor: Transistor,
    /// Gate-source voltage Vgs [V]
    pub voltage_gate_source: Option<f64>,
    /// Drain-source voltage Vds [V]
    pub voltage_drain_source: Option<f64>,
    /// Gate-drain voltage Vgd [V]
    pub voltage_gate_drain: Option<f64>,
    /// Process transconductance parameter kn = un*Cox [A/V^2]
    pub transconductance_parameter: Option<f64>,
}

/// P-channel device record.
///
/// Structurally parallel to [`Nmos`] with the terminal voltages named for
/// the opposite current-flow convention: source-to-gate, source-to-drain,
/// drain-to-gate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pmos {
    /// Shared electrical state
    pub transistor: Transistor,
    /// Source-gate voltage Vsg [V]
    pub voltage_source_gate: Option<f64>,
    /// Source-drain voltage Vsd [V]
    pub voltage_source_drain: Option<f64>,
    /// Drain-gate voltage Vdg [V]
    pub voltage_drain_gate: Option<f64>,
    /// Process transconductance parameter kp = up*Cox [A/V^2]
    pub transconductance_parameter: Option<f64>,
}
