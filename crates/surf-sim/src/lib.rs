#![deny(missing_docs)]
#![doc = "Discrete-event circuit simulator for one surface-code error-correction cycle."]

mod circuit;
/// Geometry-shaped boolean grid output form.
pub mod grid;
/// Lattice geometry and CNOT connectivity, derived from the code distance.
pub mod lattice;
/// Independent Pauli error channel and its configuration.
pub mod noise;
/// Single-qubit error state and gate commutation rules.
pub mod qubit;
mod readout;
/// Syndrome derivatives, detection events, and the error signal.
pub mod signal;
/// The `SurfaceCode` simulator composing the lattice, error channel,
/// circuit engine, readout reconstruction, and post-processing.
pub mod sim;

pub use grid::BitGrid;
pub use lattice::{AncillaKind, Coord, Direction, Lattice};
pub use noise::{NoiseModel, PauliRates};
pub use qubit::ErrorState;
pub use sim::{CodeInfo, RunRecord, SurfaceCode};
