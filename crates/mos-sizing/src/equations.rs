//! Square-law sizing equations
//!
//! Closed-form rearrangements of the long-channel (Shichman-Hodges) MOSFET
//! drain-current model in saturation:
//!
//! **Ideal**:
//! - Ids = k/2 * W/L * Vov^2
//!
//! **With channel length modulation**:
//! - Ids = k/2 * W/L * Vov^2 * (1 + Vds/Va)
//!
//! The width solvers invert these for W; the remaining relations evaluate
//! the forward form, the output resistance ro = Va/Id, the gate overdrive,
//! and the operating region. Everything is a single arithmetic evaluation
//! of the record's field values at call time: no iteration, no caching,
//! no mutation of the input.
//!
//! PMOS records state their terminal voltages source-first (Vsg, Vsd), so
//! every relation that reads a terminal voltage selects the field by
//! matching on the device variant.

use mos_devices::params::Transistor;
use mos_devices::types::{MosRegion, Mosfet};

use crate::error::{Result, SizingError};

fn require(value: Option<f64>, name: &'static str) -> Result<f64> {
    value.ok_or(SizingError::MissingParameter(name))
}

fn nonzero(value: f64, name: &'static str) -> Result<f64> {
    if value == 0.0 {
        Err(SizingError::ZeroDenominator(name))
    } else {
        Ok(value)
    }
}

/// Drain-source voltage drop in the direction of conduction.
///
/// Pmos records state it source-to-drain; every other variant states it
/// drain-to-source.
fn conduction_drop(device: &Mosfet) -> Result<f64> {
    match device {
        Mosfet::Pmos(p) => require(p.voltage_source_drain, "voltage_source_drain"),
        Mosfet::Nmos(n) => require(n.voltage_drain_source, "voltage_drain_source"),
    }
}

/// Solve the ideal square-law current equation for channel width.
///
/// W = 2 * Id * L / (k * Vov^2)
///
/// # Arguments
/// * `device` - Device record with `current`, `length`,
///   `transconductance_parameter` and `overdrive_voltage` set
///
/// # Returns
/// * Channel width in the same length unit as the supplied `length`
///
/// # Errors
/// * [`SizingError::MissingParameter`] if a required field is unset
/// * [`SizingError::ZeroDenominator`] if k or Vov is zero
///
/// # Example
/// ```ignore
/// let w = solve_for_width(&device)?;
/// println!("W = {:.3e} m", w);
/// ```
pub fn solve_for_width(device: &Mosfet) -> Result<f64> {
    let t = device.transistor();
    let current = require(t.current, "current")?;
    let length = require(t.length, "length")?;
    let k = nonzero(
        require(
            device.transconductance_parameter(),
            "transconductance_parameter",
        )?,
        "transconductance_parameter",
    )?;
    let vov = nonzero(
        require(t.overdrive_voltage, "overdrive_voltage")?,
        "overdrive_voltage",
    )?;

    Ok(2.0 * current * length / (k * vov.powi(2)))
}

/// Solve the channel-length-modulation-corrected current equation for width.
///
/// W = 2 * Id * L / (k * Vov^2 * (1 + Vds/Va))
///
/// Reads `voltage_source_drain` on Pmos and `voltage_drain_source` on every
/// other variant, on top of the fields used by [`solve_for_width`] plus
/// `early_voltage`.
///
/// # Errors
/// * [`SizingError::MissingParameter`] if a required field is unset
/// * [`SizingError::ZeroDenominator`] if k, Vov or Va is zero, or if the
///   correction factor 1 + Vds/Va vanishes
pub fn solve_for_width_with_clm(device: &Mosfet) -> Result<f64> {
    let t = device.transistor();
    let current = require(t.current, "current")?;
    let length = require(t.length, "length")?;
    let k = nonzero(
        require(
            device.transconductance_parameter(),
            "transconductance_parameter",
        )?,
        "transconductance_parameter",
    )?;
    let vov = nonzero(
        require(t.overdrive_voltage, "overdrive_voltage")?,
        "overdrive_voltage",
    )?;
    let va = nonzero(require(t.early_voltage, "early_voltage")?, "early_voltage")?;
    let vds = conduction_drop(device)?;
    let clm_factor = nonzero(1.0 + vds / va, "clm_factor")?;

    Ok(2.0 * current * length / (k * vov.powi(2) * clm_factor))
}

/// Ideal saturation drain current.
///
/// Ids = k/2 * W/L * Vov^2
pub fn saturation_current(device: &Mosfet) -> Result<f64> {
    let t = device.transistor();
    let width = require(t.width, "width")?;
    let length = nonzero(require(t.length, "length")?, "length")?;
    let k = require(
        device.transconductance_parameter(),
        "transconductance_parameter",
    )?;
    let vov = require(t.overdrive_voltage, "overdrive_voltage")?;

    Ok(0.5 * k * width / length * vov.powi(2))
}

/// Saturation drain current including channel length modulation.
///
/// Ids = k/2 * W/L * Vov^2 * (1 + Vds/Va), with the voltage drop selected
/// per variant as in [`solve_for_width_with_clm`].
pub fn saturation_current_with_clm(device: &Mosfet) -> Result<f64> {
    let ids = saturation_current(device)?;
    let va = nonzero(
        require(device.transistor().early_voltage, "early_voltage")?,
        "early_voltage",
    )?;
    let vds = conduction_drop(device)?;

    Ok(ids * (1.0 + vds / va))
}

/// Small-signal output resistance in saturation.
///
/// ro = Va / Id. Both operands live on the base record, so this takes a
/// bare [`Transistor`].
pub fn output_resistance(transistor: &Transistor) -> Result<f64> {
    let va = require(transistor.early_voltage, "early_voltage")?;
    let current = nonzero(require(transistor.current, "current")?, "current")?;

    Ok(va / current)
}

/// Gate overdrive voltage from the terminal voltages.
///
/// Vov = Vgs - Vth for Nmos, Vsg - Vth for Pmos (threshold stored as a
/// magnitude).
pub fn overdrive_voltage(device: &Mosfet) -> Result<f64> {
    let vth = require(
        device.transistor().threshold_voltage,
        "threshold_voltage",
    )?;
    let gate_drive = match device {
        Mosfet::Pmos(p) => require(p.voltage_source_gate, "voltage_source_gate")?,
        Mosfet::Nmos(n) => require(n.voltage_gate_source, "voltage_gate_source")?,
    };

    Ok(gate_drive - vth)
}

/// Classify the operating region from the terminal voltages.
///
/// Cutoff when Vov <= 0, linear when the conduction drop is below Vov,
/// saturation otherwise.
pub fn operating_region(device: &Mosfet) -> Result<MosRegion> {
    let vov = overdrive_voltage(device)?;
    if vov <= 0.0 {
        return Ok(MosRegion::Cutoff);
    }

    let vds = conduction_drop(device)?;
    if vds < vov {
        Ok(MosRegion::Linear)
    } else {
        Ok(MosRegion::Saturation)
    }
}
