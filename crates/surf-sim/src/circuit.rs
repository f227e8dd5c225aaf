//! The seven-step stabilizer measurement cycle.
//!
//! One cycle is: Hadamard on X-ancillas, four directional CNOT sub-steps,
//! Hadamard again, then ancilla measurement. Every step is followed by the
//! uncorrelated error channel (ancillas first, then data qubits); the
//! measurement step applies data-qubit errors only, since the ancillas are
//! being read out. Steps are strictly sequential and unconditional.

use rand::Rng;
use surf_core::RngHandle;

use crate::lattice::{AncillaKind, Direction, Lattice};
use crate::noise::{self, NoiseModel};
use crate::qubit::{cnot, ErrorState};

/// Runs steps 1 through 6 of the cycle, mutating the qubit arenas.
///
/// The measurement step is separate ([`measure_step`]) because the final
/// data-qubit readout has to be reconstructed between step 6 and step 7
/// without consuming extra errors.
pub(crate) fn run_gate_steps(
    lattice: &Lattice,
    model: &NoiseModel,
    data: &mut [ErrorState],
    ancilla: &mut [ErrorState],
    rng: &mut RngHandle,
) {
    hadamard_step(lattice, model, data, ancilla, rng);
    cnot_step(lattice, model, data, ancilla, rng, Direction::North, Direction::North);
    cnot_step(lattice, model, data, ancilla, rng, Direction::West, Direction::East);
    cnot_step(lattice, model, data, ancilla, rng, Direction::East, Direction::West);
    cnot_step(lattice, model, data, ancilla, rng, Direction::South, Direction::South);
    hadamard_step(lattice, model, data, ancilla, rng);
}

/// Step 1 and step 6: Hadamard on every X-ancilla, Z-ancillas idle.
fn hadamard_step(
    lattice: &Lattice,
    model: &NoiseModel,
    data: &mut [ErrorState],
    ancilla: &mut [ErrorState],
    rng: &mut RngHandle,
) {
    for state in &mut ancilla[..lattice.num_x()] {
        state.hadamard();
    }
    noise::apply_pauli(&model.ancilla, ancilla, rng);
    noise::apply_pauli(&model.data, data, rng);
}

/// One directional CNOT sub-step (steps 2 through 5).
///
/// X-ancillas act as controls on their wired data qubits; Z-ancillas are
/// targets of theirs. The two halves may use different directions (steps 3
/// and 4 pair West/East and East/West).
fn cnot_step(
    lattice: &Lattice,
    model: &NoiseModel,
    data: &mut [ErrorState],
    ancilla: &mut [ErrorState],
    rng: &mut RngHandle,
    x_dir: Direction,
    z_dir: Direction,
) {
    for &(anc, dq) in lattice.cnot_pairs(AncillaKind::X, x_dir) {
        cnot(&mut ancilla[anc], &mut data[dq]);
    }
    for &(anc, dq) in lattice.cnot_pairs(AncillaKind::Z, z_dir) {
        cnot(&mut data[dq], &mut ancilla[anc]);
    }
    noise::apply_pauli(&model.ancilla, ancilla, rng);
    noise::apply_pauli(&model.data, data, rng);
}

/// Step 7: measures every ancilla and returns the condensed syndrome.
///
/// The raw outcome is each ancilla's bit-flip boolean; each read value is
/// then flipped independently with the measurement-error probability (one
/// draw per ancilla, in condensed order). The collapse erases all ancilla
/// phase information, and the idling data qubits decohere once more.
pub(crate) fn measure_step(
    lattice: &Lattice,
    model: &NoiseModel,
    data: &mut [ErrorState],
    ancilla: &mut [ErrorState],
    rng: &mut RngHandle,
) -> Vec<bool> {
    let mut syndrome: Vec<bool> = ancilla.iter().map(|state| state.bitflip).collect();
    for bit in &mut syndrome {
        if rng.gen::<f64>() < model.measurement {
            *bit = !*bit;
        }
    }
    for state in ancilla.iter_mut() {
        state.phaseflip = false;
    }
    noise::apply_pauli(&model.data, data, rng);
    debug_assert_eq!(syndrome.len(), lattice.num_ancillas());
    syndrome
}
