use surf_sim::{NoiseModel, PauliRates, SurfaceCode};

fn noisy() -> NoiseModel {
    NoiseModel::new(
        PauliRates::new(0.05, 0.0, 0.05),
        PauliRates::new(0.05, 0.0, 0.05),
        0.02,
    )
}

#[test]
fn condensed_and_grid_runs_agree_on_existing_ancillas() {
    let mut code = SurfaceCode::new(0, 5, noisy()).unwrap();
    let condensed = code.make_run(11, 4).unwrap();
    let grid = code.make_run_grid(11, 4).unwrap();

    assert_eq!(grid.parities, condensed.parities);
    assert_eq!(grid.seed, condensed.seed);

    let lattice = code.lattice().clone();
    for step in 0..condensed.len() {
        for (idx, coord) in lattice.ancilla_coords().iter().enumerate() {
            assert_eq!(
                grid.syndromes[step].get(coord.m, coord.n),
                condensed.syndromes[step][idx],
                "syndrome step {step} {coord}"
            );
            assert_eq!(
                grid.events[step].get(coord.m, coord.n),
                condensed.events[step][idx],
                "event step {step} {coord}"
            );
        }
        for (z_idx, coord) in lattice.ancilla_coords()[lattice.z_range()]
            .iter()
            .enumerate()
        {
            assert_eq!(
                grid.final_stabilizers[step].get(coord.m, coord.n),
                condensed.final_stabilizers[step][z_idx],
                "final stabilizer step {step} {coord}"
            );
            assert_eq!(
                grid.error_signal[step].get(coord.m, coord.n),
                condensed.error_signal[step][z_idx],
                "error signal step {step} {coord}"
            );
        }
    }
}

#[test]
fn dummy_grid_cells_stay_false() {
    let mut code = SurfaceCode::new(0, 3, noisy()).unwrap();
    let grid = code.make_run_grid(3, 2).unwrap();
    let lattice = code.lattice();

    for step in 0..grid.len() {
        for m in 0..=3 {
            for n in 0..=3 {
                if lattice.ancilla_index(surf_sim::Coord::new(m, n)).is_none() {
                    assert!(!grid.syndromes[step].get(m, n), "({m}, {n})");
                    assert!(!grid.events[step].get(m, n), "({m}, {n})");
                }
            }
        }
    }
}

#[test]
fn grid_shapes_follow_the_ancilla_lattice() {
    let mut code = SurfaceCode::new(0, 5, NoiseModel::noiseless()).unwrap();
    let grid = code.make_run_grid(0, 1).unwrap();

    assert_eq!(grid.syndromes[0].rows(), 6);
    assert_eq!(grid.syndromes[0].cols(), 6);
    assert_eq!(grid.final_stabilizers[0].rows(), 6);
    assert!(grid.syndromes[0].is_all_false());
}
