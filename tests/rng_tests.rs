use nasch::simulation::{RandomSource, SimRng};

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SimRng::from_seed(42);
    let mut b = SimRng::from_seed(42);
    for _ in 0..100 {
        assert_eq!(a.uniform_int(0, 1000), b.uniform_int(0, 1000));
        assert_eq!(a.uniform_real(0.0, 1.0), b.uniform_real(0.0, 1.0));
        assert_eq!(a.bernoulli(0.3), b.bernoulli(0.3));
    }
    assert_eq!(a.seed(), 42);
}

#[test]
fn test_sample_without_replacement_is_distinct() {
    let mut rng = SimRng::from_seed(7);
    let mut drawn = rng.uniform_int_without_replacement(50, 50);
    drawn.sort_unstable();
    assert_eq!(drawn, (0..50).collect::<Vec<_>>());

    let partial = rng.uniform_int_without_replacement(1000, 10);
    assert_eq!(partial.len(), 10);
    assert!(partial.iter().all(|&x| x < 1000));
}

#[test]
fn test_bernoulli_extremes_are_certain() {
    let mut rng = SimRng::from_seed(1);
    assert!((0..100).all(|_| !rng.bernoulli(0.0)));
    assert!((0..100).all(|_| rng.bernoulli(1.0)));
}

#[test]
fn test_uniform_ranges() {
    let mut rng = SimRng::from_seed(3);
    assert_eq!(rng.uniform_int(5, 5), 5);
    assert_eq!(rng.uniform_real(0.5, 0.5), 0.5);
    for _ in 0..1000 {
        let x = rng.uniform_real(0.0, 0.6);
        assert!((0.0..0.6).contains(&x));
        let n = rng.uniform_int(3, 9);
        assert!((3..9).contains(&n));
    }
}
