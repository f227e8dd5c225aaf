use serde::{Deserialize, Serialize};
use surf_core::{ErrorInfo, RngHandle, SimError};

use crate::circuit;
use crate::grid::BitGrid;
use crate::lattice::Lattice;
use crate::noise::NoiseModel;
use crate::qubit::ErrorState;
use crate::readout;
use crate::signal;

/// Output of one simulated run.
///
/// `T` is the per-step shape: `Vec<bool>` for the condensed form (fixed
/// ancilla ordering, dummy positions omitted) or [`BitGrid`] for the
/// geometry-shaped form. `syndromes` and `events` cover all ancillas;
/// `final_stabilizers` and `error_signal` cover Z-ancillas only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord<T> {
    /// Seed the run was produced from.
    pub seed: u64,
    /// One syndrome per cycle.
    pub syndromes: Vec<T>,
    /// Detection events, `S[s] XOR S[s-2]` with the s < 2 fallback.
    pub events: Vec<T>,
    /// Final Z-stabilizers reconstructed from the data readout, per cycle.
    pub final_stabilizers: Vec<T>,
    /// Decoding target, `final_stabilizers XOR first_deriv` on the Z range.
    pub error_signal: Vec<T>,
    /// Logical-error label per cycle: clean bit-flip parity XOR
    /// measurement parity of that cycle's final readout.
    pub parities: Vec<bool>,
}

impl<T> RunRecord<T> {
    /// Number of cycles in the run.
    pub fn len(&self) -> usize {
        self.syndromes.len()
    }

    /// True when the record holds no cycles.
    pub fn is_empty(&self) -> bool {
        self.syndromes.is_empty()
    }
}

/// Read-only summary of a simulator's configuration and derived counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeInfo {
    /// Seed of the most recent (re)initialization.
    pub seed: u64,
    /// Code distance.
    pub distance: usize,
    /// Data-qubit X error probability.
    pub pqx: f64,
    /// Data-qubit Y error probability.
    pub pqy: f64,
    /// Data-qubit Z error probability.
    pub pqz: f64,
    /// Ancilla X error probability.
    pub pax: f64,
    /// Ancilla Y error probability.
    pub pay: f64,
    /// Ancilla Z error probability.
    pub paz: f64,
    /// Measurement error probability.
    pub pm: f64,
    /// Number of data qubits.
    pub n_data_qubits: usize,
    /// Number of existing ancilla qubits.
    pub n_anc_qubits: usize,
    /// Number of Z-stabilizers.
    pub n_z_stabs: usize,
}

/// Stateful simulator for one odd-distance square surface code.
///
/// A single instance owns its qubit arenas and RNG; runs on the same
/// instance are sequential, and every run starts by reseeding and zeroing
/// all qubit state, so nothing leaks between runs except the immutable
/// lattice geometry. For parallel generation, give each worker its own
/// instance (the lattice may be cloned freely).
#[derive(Debug, Clone)]
pub struct SurfaceCode {
    lattice: Lattice,
    noise: NoiseModel,
    seed: u64,
    rng: RngHandle,
    data: Vec<ErrorState>,
    ancilla: Vec<ErrorState>,
}

impl SurfaceCode {
    /// Constructs a simulator.
    ///
    /// Fails with a configuration error when the distance is even or
    /// below 3, or when any probability lies outside [0, 1].
    pub fn new(seed: u64, distance: usize, noise: NoiseModel) -> Result<Self, SimError> {
        noise.validate()?;
        let lattice = Lattice::new(distance)?;
        let data = vec![ErrorState::default(); lattice.num_data()];
        let ancilla = vec![ErrorState::default(); lattice.num_ancillas()];
        Ok(Self {
            lattice,
            noise,
            seed,
            rng: RngHandle::from_seed(seed),
            data,
            ancilla,
        })
    }

    /// The lattice geometry (immutable after construction).
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The configured noise model.
    pub fn noise(&self) -> &NoiseModel {
        &self.noise
    }

    /// Configuration and derived counts, for run manifests.
    pub fn get_info(&self) -> CodeInfo {
        CodeInfo {
            seed: self.seed,
            distance: self.lattice.distance(),
            pqx: self.noise.data.x,
            pqy: self.noise.data.y,
            pqz: self.noise.data.z,
            pax: self.noise.ancilla.x,
            pay: self.noise.ancilla.y,
            paz: self.noise.ancilla.z,
            pm: self.noise.measurement,
            n_data_qubits: self.lattice.num_data(),
            n_anc_qubits: self.lattice.num_ancillas(),
            n_z_stabs: self.lattice.num_z(),
        }
    }

    /// Executes `n_steps` cycles and returns the condensed run record.
    ///
    /// Reseeds the RNG from `seed` and zeroes all qubit state first, so
    /// the output depends only on `(seed, n_steps)` and the construction
    /// parameters. Fails when `n_steps` is zero.
    pub fn make_run(&mut self, seed: u64, n_steps: usize) -> Result<RunRecord<Vec<bool>>, SimError> {
        if n_steps < 1 {
            let info = ErrorInfo::new("invalid-step-count", "n_steps must be >= 1")
                .with_context("n_steps", n_steps.to_string());
            return Err(SimError::Configuration(info));
        }
        self.reinitialize(seed);

        let mut syndromes = Vec::with_capacity(n_steps);
        let mut final_stabilizers = Vec::with_capacity(n_steps);
        let mut parities = Vec::with_capacity(n_steps);
        for _ in 0..n_steps {
            circuit::run_gate_steps(
                &self.lattice,
                &self.noise,
                &mut self.data,
                &mut self.ancilla,
                &mut self.rng,
            );

            // The final readout must come before step 7: both consume
            // draws from the shared generator, and step 7 adds another
            // round of data-qubit errors that the readout must not see.
            let readout = readout::final_z_stabilizers(
                &self.lattice,
                self.noise.measurement,
                &self.data,
                &mut self.rng,
            );
            let clean_parity = readout::bitflip_parity(&self.data);
            parities.push(clean_parity != readout.measurement_parity);
            final_stabilizers.push(readout.z_stabilizers);

            syndromes.push(circuit::measure_step(
                &self.lattice,
                &self.noise,
                &mut self.data,
                &mut self.ancilla,
                &mut self.rng,
            ));
        }

        let first_deriv = signal::first_derivative(&syndromes);
        let events = signal::detection_events(&syndromes);
        let error_signal =
            signal::error_signal(&final_stabilizers, &first_deriv, self.lattice.z_range());

        Ok(RunRecord {
            seed,
            syndromes,
            events,
            final_stabilizers,
            error_signal,
            parities,
        })
    }

    /// Like [`make_run`](Self::make_run) but with geometry-shaped output.
    ///
    /// Each per-step vector is expanded onto the (d+1)×(d+1) ancilla grid;
    /// cells without an ancilla stay false. For equal seeds the existing
    /// cells agree with the condensed record entry for entry.
    pub fn make_run_grid(
        &mut self,
        seed: u64,
        n_steps: usize,
    ) -> Result<RunRecord<BitGrid>, SimError> {
        let condensed = self.make_run(seed, n_steps)?;
        let lattice = &self.lattice;
        Ok(RunRecord {
            seed: condensed.seed,
            syndromes: expand(&condensed.syndromes, |row| lattice.ancilla_grid(row)),
            events: expand(&condensed.events, |row| lattice.ancilla_grid(row)),
            final_stabilizers: expand(&condensed.final_stabilizers, |row| lattice.z_grid(row)),
            error_signal: expand(&condensed.error_signal, |row| lattice.z_grid(row)),
            parities: condensed.parities,
        })
    }

    fn reinitialize(&mut self, seed: u64) {
        self.seed = seed;
        self.rng.reseed(seed);
        for qb in &mut self.data {
            qb.clear();
        }
        for qb in &mut self.ancilla {
            qb.clear();
        }
    }
}

fn expand(rows: &[Vec<bool>], to_grid: impl Fn(&[bool]) -> BitGrid) -> Vec<BitGrid> {
    rows.iter().map(|row| to_grid(row)).collect()
}
