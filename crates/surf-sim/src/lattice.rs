use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use surf_core::{ErrorInfo, SimError};

use crate::grid::BitGrid;

/// Lattice coordinate, row `m` then column `n`.
///
/// Data qubits live on the d×d grid, ancilla qubits on the (d+1)×(d+1)
/// grid. The derived `Ord` (row-major) defines the condensed ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    /// Row index.
    pub m: usize,
    /// Column index.
    pub n: usize,
}

impl Coord {
    /// Creates a coordinate from row and column.
    pub fn new(m: usize, n: usize) -> Self {
        Self { m, n }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.m, self.n)
    }
}

/// Stabilizer type of an existing ancilla, decided by the parity of m+n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AncillaKind {
    /// X-type stabilizer (m+n even).
    X,
    /// Z-type stabilizer (m+n odd).
    Z,
}

/// CNOT sub-step direction, named cyclically from the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Data qubit at (m-1, n); defined when m > 0 and n < d.
    North,
    /// Data qubit at (m, n); defined when m < d and n < d.
    East,
    /// Data qubit at (m, n-1); defined when m < d and n > 0.
    South,
    /// Data qubit at (m-1, n-1); defined when m > 0 and n > 0.
    West,
}

impl Direction {
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// All four directions, in the N, E, S, W order used by the readout
    /// adjacency.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Immutable geometry of an odd-distance square surface code.
///
/// Built once at construction and never recomputed within a run. Qubit
/// state lives in flat arenas elsewhere; this type owns only coordinates,
/// the coordinate→index tables, and the CNOT wiring, stored as index
/// pairs so the hot loop never hashes coordinates.
#[derive(Debug, Clone)]
pub struct Lattice {
    distance: usize,
    data_coords: Vec<Coord>,
    anc_coords: Vec<Coord>,
    num_x: usize,
    anc_index: Vec<Option<usize>>,
    x_cnots: [Vec<(usize, usize)>; 4],
    z_cnots: [Vec<(usize, usize)>; 4],
    z_neighbours: Vec<Vec<usize>>,
}

impl Lattice {
    /// Builds the lattice for the given odd code distance (>= 3).
    pub fn new(distance: usize) -> Result<Self, SimError> {
        if distance < 3 || distance % 2 == 0 {
            let info = ErrorInfo::new(
                "invalid-distance",
                "code distance must be an odd integer >= 3",
            )
            .with_context("distance", distance.to_string());
            return Err(SimError::Configuration(info));
        }

        let data_coords: Vec<Coord> = (0..distance)
            .flat_map(|m| (0..distance).map(move |n| Coord::new(m, n)))
            .collect();

        // The (m, n) grid scan yields each kind already in sorted order, so
        // concatenating X then Z gives the condensed ordering directly.
        let mut x_ancillas = Vec::new();
        let mut z_ancillas = Vec::new();
        for m in 0..=distance {
            for n in 0..=distance {
                if !ancilla_exists(distance, m, n) {
                    continue;
                }
                match classify(m, n) {
                    AncillaKind::X => x_ancillas.push(Coord::new(m, n)),
                    AncillaKind::Z => z_ancillas.push(Coord::new(m, n)),
                }
            }
        }
        let num_x = x_ancillas.len();
        let mut anc_coords = x_ancillas;
        anc_coords.extend_from_slice(&z_ancillas);

        let side = distance + 1;
        let mut anc_index = vec![None; side * side];
        for (idx, coord) in anc_coords.iter().enumerate() {
            anc_index[coord.m * side + coord.n] = Some(idx);
        }

        let mut lattice = Self {
            distance,
            data_coords,
            anc_coords,
            num_x,
            anc_index,
            x_cnots: Default::default(),
            z_cnots: Default::default(),
            z_neighbours: Vec::new(),
        };
        lattice.wire_cnots();
        Ok(lattice)
    }

    fn wire_cnots(&mut self) {
        for (idx, coord) in self.anc_coords.iter().enumerate() {
            let table = if idx < self.num_x {
                &mut self.x_cnots
            } else {
                &mut self.z_cnots
            };
            for dir in Direction::ALL {
                if let Some(data) = cnot_target(self.distance, *coord, dir) {
                    table[dir.index()].push((idx, data.m * self.distance + data.n));
                }
            }
        }

        // Per Z-ancilla data adjacency in N, E, S, W order, used by the
        // final readout reconstruction.
        self.z_neighbours = vec![Vec::new(); self.num_z()];
        for dir in Direction::ALL {
            for &(anc, data) in &self.z_cnots[dir.index()] {
                self.z_neighbours[anc - self.num_x].push(data);
            }
        }
    }

    /// Code distance.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Number of data qubits (d²).
    pub fn num_data(&self) -> usize {
        self.data_coords.len()
    }

    /// Number of existing ancilla qubits (d² − 1).
    pub fn num_ancillas(&self) -> usize {
        self.anc_coords.len()
    }

    /// Number of X-type ancillas.
    pub fn num_x(&self) -> usize {
        self.num_x
    }

    /// Number of Z-type ancillas.
    pub fn num_z(&self) -> usize {
        self.anc_coords.len() - self.num_x
    }

    /// Condensed indices occupied by the Z-type ancillas.
    ///
    /// Because the condensed ordering is sorted X-ancillas followed by
    /// sorted Z-ancillas, this is always the contiguous tail range.
    pub fn z_range(&self) -> Range<usize> {
        self.num_x..self.anc_coords.len()
    }

    /// Data-qubit coordinates in row-major (condensed) order.
    pub fn data_coords(&self) -> &[Coord] {
        &self.data_coords
    }

    /// Existing-ancilla coordinates in condensed order.
    pub fn ancilla_coords(&self) -> &[Coord] {
        &self.anc_coords
    }

    /// Stabilizer type of the ancilla at the given condensed index.
    pub fn ancilla_kind(&self, idx: usize) -> AncillaKind {
        if idx < self.num_x {
            AncillaKind::X
        } else {
            AncillaKind::Z
        }
    }

    /// Condensed index of the ancilla at `coord`, if one exists there.
    pub fn ancilla_index(&self, coord: Coord) -> Option<usize> {
        let side = self.distance + 1;
        if coord.m >= side || coord.n >= side {
            return None;
        }
        self.anc_index[coord.m * side + coord.n]
    }

    /// `(ancilla, data)` index pairs wired by one directional CNOT sub-step.
    pub fn cnot_pairs(&self, kind: AncillaKind, dir: Direction) -> &[(usize, usize)] {
        match kind {
            AncillaKind::X => &self.x_cnots[dir.index()],
            AncillaKind::Z => &self.z_cnots[dir.index()],
        }
    }

    /// Data-qubit indices adjacent to each Z-ancilla (2 to 4 entries each),
    /// indexed by condensed Z position (0-based within the Z range).
    pub fn z_neighbours(&self) -> &[Vec<usize>] {
        &self.z_neighbours
    }

    /// Expands a condensed all-ancilla vector into the (d+1)×(d+1) grid.
    ///
    /// Cells without an ancilla stay `false` and carry no meaning.
    pub fn ancilla_grid(&self, values: &[bool]) -> BitGrid {
        let mut grid = BitGrid::new(self.distance + 1, self.distance + 1);
        for (coord, &value) in self.anc_coords.iter().zip(values) {
            grid.set(coord.m, coord.n, value);
        }
        grid
    }

    /// Expands a condensed Z-ancilla vector into the (d+1)×(d+1) grid.
    pub fn z_grid(&self, values: &[bool]) -> BitGrid {
        let mut grid = BitGrid::new(self.distance + 1, self.distance + 1);
        for (coord, &value) in self.anc_coords[self.z_range()].iter().zip(values) {
            grid.set(coord.m, coord.n, value);
        }
        grid
    }
}

/// Boundary rule for the (d+1)×(d+1) ancilla grid.
///
/// A position is a dummy (non-existent) ancilla if it is the (0,0) or (d,d)
/// corner, on the top boundary with odd n, on the bottom boundary with even
/// n, on the left boundary with even m, or on the right boundary with odd m.
fn ancilla_exists(distance: usize, m: usize, n: usize) -> bool {
    let dummy = (m == 0 && n == 0)
        || (m == distance && n == distance)
        || (m == 0 && n % 2 == 1)
        || (m == distance && n % 2 == 0)
        || (m % 2 == 0 && n == 0)
        || (m % 2 == 1 && n == distance);
    !dummy
}

fn classify(m: usize, n: usize) -> AncillaKind {
    if (m + n) % 2 == 0 {
        AncillaKind::X
    } else {
        AncillaKind::Z
    }
}

fn cnot_target(distance: usize, anc: Coord, dir: Direction) -> Option<Coord> {
    let Coord { m, n } = anc;
    match dir {
        Direction::North if m > 0 && n < distance => Some(Coord::new(m - 1, n)),
        Direction::East if m < distance && n < distance => Some(Coord::new(m, n)),
        Direction::South if m < distance && n > 0 => Some(Coord::new(m, n - 1)),
        Direction::West if m > 0 && n > 0 => Some(Coord::new(m - 1, n - 1)),
        _ => None,
    }
}
