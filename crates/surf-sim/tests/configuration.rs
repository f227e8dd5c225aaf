use surf_sim::{CodeInfo, NoiseModel, PauliRates, SurfaceCode};

fn model(pm: f64) -> NoiseModel {
    NoiseModel::new(
        PauliRates::new(0.1, 0.0, 0.1),
        PauliRates::new(0.1, 0.0, 0.1),
        pm,
    )
}

#[test]
fn probabilities_outside_unit_interval_are_rejected() {
    for bad in [-0.1f64, 1.1, f64::NAN, f64::INFINITY] {
        let err = SurfaceCode::new(0, 3, model(bad)).unwrap_err();
        assert_eq!(err.info().code, "invalid-probability", "pm = {bad}");

        let mut noise = model(0.0);
        noise.data.y = bad;
        let err = SurfaceCode::new(0, 3, noise).unwrap_err();
        assert_eq!(err.info().code, "invalid-probability", "pqy = {bad}");

        let mut noise = model(0.0);
        noise.ancilla.z = bad;
        let err = SurfaceCode::new(0, 3, noise).unwrap_err();
        assert_eq!(err.info().code, "invalid-probability", "paz = {bad}");
    }
}

#[test]
fn boundary_probabilities_are_accepted() {
    assert!(SurfaceCode::new(0, 3, model(0.0)).is_ok());
    assert!(SurfaceCode::new(0, 3, model(1.0)).is_ok());
}

#[test]
fn even_or_small_distances_are_rejected() {
    for distance in [1usize, 2, 4, 8] {
        let err = SurfaceCode::new(0, distance, model(0.0)).unwrap_err();
        assert_eq!(err.info().code, "invalid-distance", "distance {distance}");
    }
}

#[test]
fn zero_steps_are_rejected() {
    let mut code = SurfaceCode::new(0, 3, model(0.05)).unwrap();
    let err = code.make_run(0, 0).unwrap_err();
    assert_eq!(err.info().code, "invalid-step-count");
}

#[test]
fn info_reports_configuration_and_derived_counts() {
    let mut code = SurfaceCode::new(9, 5, model(0.05)).unwrap();
    let info = code.get_info();

    assert_eq!(info.seed, 9);
    assert_eq!(info.distance, 5);
    assert_eq!(info.pqx, 0.1);
    assert_eq!(info.pqy, 0.0);
    assert_eq!(info.paz, 0.1);
    assert_eq!(info.pm, 0.05);
    assert_eq!(info.n_data_qubits, 25);
    assert_eq!(info.n_anc_qubits, 24);
    assert_eq!(info.n_z_stabs, 12);

    // get_info tracks the seed of the latest run.
    code.make_run(77, 1).unwrap();
    assert_eq!(code.get_info().seed, 77);
}

#[test]
fn info_roundtrips_through_json() {
    let code = SurfaceCode::new(3, 3, model(0.05)).unwrap();
    let info = code.get_info();
    let json = serde_json::to_string(&info).unwrap();
    let restored: CodeInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(info, restored);
}
