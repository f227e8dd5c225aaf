use rand::Rng;
use serde::{Deserialize, Serialize};
use surf_core::{ErrorInfo, RngHandle, SimError};

use crate::qubit::ErrorState;

/// Per-circuit-element Pauli error probabilities for one qubit class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauliRates {
    /// X (bit-flip) probability.
    pub x: f64,
    /// Y (combined flip) probability.
    pub y: f64,
    /// Z (phase-flip) probability.
    pub z: f64,
}

impl PauliRates {
    /// Creates a rate triple.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The error-free channel.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    fn validate(&self, class: &str) -> Result<(), SimError> {
        check_probability(self.x, class, "x")?;
        check_probability(self.y, class, "y")?;
        check_probability(self.z, class, "z")
    }
}

/// Full noise configuration of the simulator.
///
/// Nine independent Pauli probabilities (three channels × data/ancilla)
/// plus one measurement-error probability shared by ancilla and data
/// readouts. Passed explicitly at construction; there is no process-wide
/// configuration state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseModel {
    /// Rates applied to data qubits.
    pub data: PauliRates,
    /// Rates applied to ancilla qubits.
    pub ancilla: PauliRates,
    /// Probability of flipping any single measured value.
    pub measurement: f64,
}

impl NoiseModel {
    /// Creates a noise model from the per-class rates.
    pub fn new(data: PauliRates, ancilla: PauliRates, measurement: f64) -> Self {
        Self {
            data,
            ancilla,
            measurement,
        }
    }

    /// The noise-free model.
    pub fn noiseless() -> Self {
        Self::new(PauliRates::zero(), PauliRates::zero(), 0.0)
    }

    /// Checks every probability against [0, 1].
    pub fn validate(&self) -> Result<(), SimError> {
        self.data.validate("data")?;
        self.ancilla.validate("ancilla")?;
        check_probability(self.measurement, "measurement", "pm")
    }
}

fn check_probability(value: f64, class: &str, channel: &str) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&value) {
        return Ok(());
    }
    let info = ErrorInfo::new("invalid-probability", "probability outside [0, 1]")
        .with_context("class", class)
        .with_context("channel", channel)
        .with_context("value", value.to_string());
    Err(SimError::Configuration(info))
}

/// Applies independent Pauli errors to every state in `qubits`, in order.
///
/// Each qubit consumes exactly three uniform draws, always in X, Y, Z
/// order, whether or not any threshold fires. Reproducibility of a seeded
/// run depends on this draw pattern; do not short-circuit it.
pub(crate) fn apply_pauli(rates: &PauliRates, qubits: &mut [ErrorState], rng: &mut RngHandle) {
    for qb in qubits {
        let rx = rng.gen::<f64>();
        let ry = rng.gen::<f64>();
        let rz = rng.gen::<f64>();
        if rx < rates.x {
            qb.bitflip = !qb.bitflip;
        }
        if ry < rates.y {
            qb.bitflip = !qb.bitflip;
            qb.phaseflip = !qb.phaseflip;
        }
        if rz < rates.z {
            qb.phaseflip = !qb.phaseflip;
        }
    }
}
