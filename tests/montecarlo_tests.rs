use nasch::montecarlo::{
    actual_travel_time, average_time, dart_in_circle, estimate_pi, fixed_trips, random_trips,
    simulate_trips, toss_stats, toss_sweep, Point, Route, Trip, UNIVERSE_HEIGHT, UNIVERSE_WIDTH,
};
use nasch::simulation::{SimError, SimRng};

#[test]
fn test_dart_in_circle() {
    assert!(dart_in_circle(0.5, 0.5));
    assert!(dart_in_circle(0.5, 1.0));
    assert!(!dart_in_circle(0.0, 0.0));
    assert!(!dart_in_circle(1.0, 1.0));
}

#[test]
fn test_pi_estimate_is_close() {
    let mut rng = SimRng::from_seed(31);
    let estimate = estimate_pi(200_000, &mut rng).unwrap();
    assert_eq!(estimate.throws, 200_000);
    assert!(estimate.error() < 0.05, "estimate {} too far off", estimate.value);
}

#[test]
fn test_pi_needs_darts() {
    let mut rng = SimRng::from_seed(32);
    assert!(matches!(
        estimate_pi(0, &mut rng),
        Err(SimError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_closest_point_on_expressway() {
    let closest = Point::new(0.6, 0.8).closest_on_expressway();
    assert!((closest.x - 0.3).abs() < 1e-12);
    assert!((closest.y - 0.4).abs() < 1e-12);
}

#[test]
fn test_both_ends_inside_expressway_is_free() {
    let trip = Trip::new(Point::new(0.45, 0.05), Point::new(0.05, 0.45));
    let time = actual_travel_time(&trip);
    assert_eq!(time.time, 0.0);
    assert_eq!(time.route, Route::Expressway);
    assert_eq!(time.path.len(), 2);
}

#[test]
fn test_one_end_outside_expressway() {
    let trip = Trip::new(Point::new(0.0, 0.0), Point::new(0.6, 0.45));
    let time = actual_travel_time(&trip);
    assert_eq!(time.route, Route::Expressway);
    assert!((time.time - 0.25).abs() < 1e-12);
    assert_eq!(time.path.len(), 3);
    assert!((time.path[1].x - 0.4).abs() < 1e-12);
    assert!((time.path[1].y - 0.3).abs() < 1e-12);
}

#[test]
fn test_direct_wins_when_faster_or_tied() {
    // Both ends outside and next to each other
    let near = Trip::new(Point::new(0.9, 0.5), Point::new(0.95, 0.5));
    let time = actual_travel_time(&near);
    assert_eq!(time.route, Route::Direct);
    assert!((time.time - 0.05).abs() < 1e-12);

    let same = Trip::new(Point::new(0.1, 0.1), Point::new(0.1, 0.1));
    assert_eq!(actual_travel_time(&same).route, Route::Direct);
}

#[test]
fn test_travel_never_slower_than_direct() {
    let mut rng = SimRng::from_seed(33);
    let mut trips = fixed_trips();
    trips.extend(random_trips(200, &mut rng));

    for (trip, time) in trips.iter().zip(simulate_trips(&trips)) {
        assert!(time.time <= trip.from.distance(&trip.to) + 1e-12);
        assert_eq!(time.path.first(), Some(&trip.from));
        assert_eq!(time.path.last(), Some(&trip.to));
    }
}

#[test]
fn test_random_trips_stay_in_universe() {
    let mut rng = SimRng::from_seed(34);
    for trip in random_trips(100, &mut rng) {
        for p in [trip.from, trip.to] {
            assert!((0.0..UNIVERSE_WIDTH).contains(&p.x));
            assert!((0.0..UNIVERSE_HEIGHT).contains(&p.y));
        }
    }
}

#[test]
fn test_average_time() {
    let times = simulate_trips(&fixed_trips());
    assert_eq!(times.len(), 6);
    let average = average_time(&times);
    let expected = times.iter().map(|t| t.time).sum::<f64>() / 6.0;
    assert!((average - expected).abs() < 1e-12);
    assert_eq!(average_time(&[]), 0.0);
}

#[test]
fn test_coin_tosses_are_counted() {
    let mut rng = SimRng::from_seed(35);
    let stats = toss_stats(100_000, &mut rng);
    assert_eq!(stats.total(), 100_000);
    assert!(stats.heads > 45_000 && stats.heads < 55_000);
}

#[test]
fn test_coin_sweep() {
    let mut rng = SimRng::from_seed(36);
    let sweep = toss_sweep(50, &mut rng);
    assert_eq!(sweep.len(), 50);
    for (n, stats) in sweep.iter().enumerate() {
        assert_eq!(stats.total(), n);
    }
}
