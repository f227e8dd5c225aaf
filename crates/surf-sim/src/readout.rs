//! Final data-qubit readout and Z-stabilizer reconstruction.
//!
//! Independent of the per-cycle syndrome stream: this models what a direct
//! destructive readout of the data qubits would show, and rebuilds the
//! Z-stabilizers from it via the precomputed ancilla adjacency.

use rand::Rng;
use surf_core::RngHandle;

use crate::lattice::Lattice;
use crate::qubit::ErrorState;

/// Result of reconstructing the final Z-stabilizers from a noisy readout.
pub(crate) struct FinalReadout {
    /// One parity per Z-ancilla, in condensed Z order.
    pub z_stabilizers: Vec<bool>,
    /// Parity of the number of measurement-induced flips.
    pub measurement_parity: bool,
}

/// Reads every data qubit with measurement errors and rebuilds the
/// Z-stabilizers.
///
/// One uniform draw is consumed per data qubit, in row-major order,
/// regardless of the error probability. Each Z-stabilizer is the XOR of
/// the (already flipped) readout values of its 2 to 4 adjacent data
/// qubits.
pub(crate) fn final_z_stabilizers(
    lattice: &Lattice,
    measurement_rate: f64,
    data: &[ErrorState],
    rng: &mut RngHandle,
) -> FinalReadout {
    let mut readout: Vec<bool> = data.iter().map(|state| state.bitflip).collect();
    let mut flips = 0usize;
    for bit in &mut readout {
        if rng.gen::<f64>() < measurement_rate {
            *bit = !*bit;
            flips += 1;
        }
    }

    let z_stabilizers = lattice
        .z_neighbours()
        .iter()
        .map(|adjacent| adjacent.iter().fold(false, |acc, &dq| acc ^ readout[dq]))
        .collect();

    FinalReadout {
        z_stabilizers,
        measurement_parity: flips % 2 == 1,
    }
}

/// Parity of the number of data qubits currently carrying a bit-flip,
/// ignoring readout errors.
pub(crate) fn bitflip_parity(data: &[ErrorState]) -> bool {
    data.iter().filter(|state| state.bitflip).count() % 2 == 1
}
