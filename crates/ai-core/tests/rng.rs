use ai_core::{DeterministicRng, SplitMix64};

#[test]
fn same_seed_replays_same_sequence() {
    let mut a = SplitMix64::new(42);
    let mut b = SplitMix64::new(42);
    for _ in 0..64 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn streams_for_different_agents_diverge() {
    let mut a = SplitMix64::for_stream(7, 1, 0);
    let mut b = SplitMix64::for_stream(7, 2, 0);
    let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    assert_ne!(xs, ys);
}

#[test]
fn ranged_floats_stay_in_bounds() {
    let mut rng = SplitMix64::new(9);
    for _ in 0..1_000 {
        let u = rng.next_f32_unit();
        assert!((0.0..1.0).contains(&u));

        let r = rng.next_f32_range(-0.55, 0.55);
        assert!((-0.55..0.55).contains(&r), "out of range: {r}");
    }
}
