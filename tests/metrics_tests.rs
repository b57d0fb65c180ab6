use nasch::simulation::{
    flow, fundamental_diagram_points, mean_velocity, run_density_sweep, total_distance_travelled,
    vehicle_counts, RoadState, SimError, SimRng, SimulationConfig, Trajectory,
};

fn two_tick_trajectory() -> Trajectory {
    let mut trajectory = Trajectory::new();
    trajectory.push(RoadState::from_parts(10, vec![1, 4, 7], vec![1, 1, 1]).unwrap());
    trajectory.push(RoadState::from_parts(10, vec![3, 6, 9], vec![2, 2, 2]).unwrap());
    trajectory
}

#[test]
fn test_total_distance_is_raw_position_sum() {
    let trajectory = two_tick_trajectory();
    assert_eq!(total_distance_travelled(&trajectory), 12 + 18);
    assert_eq!(total_distance_travelled(&Trajectory::new()), 0);
}

#[test]
fn test_fundamental_diagram_passes_values_through() {
    let points = fundamental_diagram_points(&[10, 20, 30], &[500, 900, 700]);
    assert_eq!(points, vec![(10, 500), (20, 900), (30, 700)]);
}

#[test]
fn test_fundamental_diagram_drops_unpaired_tail() {
    let points = fundamental_diagram_points(&[10, 20, 30], &[500]);
    assert_eq!(points, vec![(10, 500)]);
}

#[test]
fn test_velocity_and_flow() {
    let trajectory = two_tick_trajectory();
    assert!((mean_velocity(&trajectory) - 1.5).abs() < 1e-12);
    // (3 / 10 + 6 / 10) / 2
    assert!((flow(&trajectory) - 0.45).abs() < 1e-12);

    assert_eq!(mean_velocity(&Trajectory::new()), 0.0);
    assert_eq!(flow(&Trajectory::new()), 0.0);
}

#[test]
fn test_density() {
    let cfg = SimulationConfig::default();
    assert!((cfg.density() - 0.25).abs() < 1e-12);
}

#[test]
fn test_vehicle_counts() {
    let counts = vehicle_counts(100, 5);
    assert_eq!(counts.len(), 20);
    assert_eq!(counts.first(), Some(&5));
    assert_eq!(counts.last(), Some(&100));
    assert_eq!(vehicle_counts(3, 0), vec![1, 2, 3]);
}

#[test]
fn test_density_sweep() {
    let base = SimulationConfig::small();
    let mut rng = SimRng::from_seed(21);
    let points = run_density_sweep(&base, &[5, 50, 100], &mut rng).unwrap();

    let counts: Vec<usize> = points.iter().map(|p| p.vehicle_count).collect();
    assert_eq!(counts, vec![5, 50, 100]);
    assert!((points[1].density - 0.5).abs() < 1e-12);
    // A full road never moves
    assert_eq!(points[2].flow, 0.0);
    assert!(points.iter().all(|p| p.total_distance > 0));
}

#[test]
fn test_density_sweep_rejects_bad_count_up_front() {
    let base = SimulationConfig::small();
    let mut rng = SimRng::from_seed(22);
    let result = run_density_sweep(&base, &[5, 101], &mut rng);
    assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
}
