//! Property-based tests for the track sequencer
//!
//! Uses proptest to verify navigation and shuffle-cycle invariants across
//! many playlist sizes, positions and seeds.

use kwan_playback::{SequencerSnapshot, TrackSequencer};
use proptest::prelude::*;

// ===== Helpers =====

/// Sequencer of `len` tracks positioned at `index`
fn positioned(len: usize, index: usize, seed: u64) -> TrackSequencer {
    let mut seq = TrackSequencer::with_seed(len, seed).unwrap();
    seq.jump_to(index).unwrap();
    seq
}

fn len_and_index() -> impl Strategy<Value = (usize, usize)> {
    (2usize..64).prop_flat_map(|len| (Just(len), 0..len))
}

// ===== Property Tests =====

proptest! {
    /// Property: advance then retreat returns to the start, and vice versa
    #[test]
    fn advance_retreat_roundtrip((len, index) in len_and_index(), seed in any::<u64>()) {
        let mut seq = positioned(len, index, seed);
        seq.advance();
        prop_assert_eq!(seq.retreat(), index);

        seq.retreat();
        prop_assert_eq!(seq.advance(), index);
    }

    /// Property: N advances close the cycle
    #[test]
    fn advance_full_cycle((len, index) in len_and_index()) {
        let mut seq = positioned(len, index, 0);
        for _ in 0..len {
            seq.advance();
        }
        prop_assert_eq!(seq.current_index(), index);
    }

    /// Property: every index stays in range under any transition sequence
    #[test]
    fn index_always_in_range(
        len in 1usize..32,
        ops in prop::collection::vec(0u8..6, 1..100),
        seed in any::<u64>()
    ) {
        let mut seq = TrackSequencer::with_seed(len, seed).unwrap();
        for op in ops {
            match op {
                0 => { seq.advance(); }
                1 => { seq.retreat(); }
                2 => { seq.shuffle_pick(); }
                3 => { seq.on_track_ended(); }
                4 => seq.set_shuffle_mode(!seq.shuffle_mode()),
                _ => seq.set_repeat_mode(!seq.repeat_mode()),
            }
            prop_assert!(seq.current_index() < len);
            prop_assert!(seq.played().iter().all(|&i| i < len));
        }
    }

    /// Property: a shuffle pick is never current and never already played,
    /// unless the cycle was exhausted and cleared first
    #[test]
    fn shuffle_pick_respects_cycle(
        (len, index) in len_and_index(),
        picks in 1usize..100,
        seed in any::<u64>()
    ) {
        let mut seq = positioned(len, index, seed);

        for _ in 0..picks {
            let before = seq.current_index();
            let played_before = seq.played().clone();
            let exhausted = (0..len).all(|i| i == before || played_before.contains(&i));

            let pick = seq.shuffle_pick();

            prop_assert_ne!(pick, before);
            if exhausted {
                prop_assert_eq!(seq.played().len(), 1);
            } else {
                prop_assert!(!played_before.contains(&pick));
                prop_assert_eq!(seq.played().len(), played_before.len() + 1);
            }
            prop_assert!(seq.played().contains(&pick));
        }
    }

    /// Property: each shuffle cycle plays every track exactly once,
    /// and the pick after a full cycle starts a new one
    #[test]
    fn shuffle_cycle_is_a_permutation(len in 2usize..40, seed in any::<u64>()) {
        let mut seq = TrackSequencer::with_seed(len, seed).unwrap();

        // Starting track is not played, so the first cycle ends on it
        let cycle: Vec<usize> = (0..len).map(|_| seq.shuffle_pick()).collect();
        let mut sorted = cycle.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        prop_assert_eq!(seq.played().len(), len);

        seq.shuffle_pick();
        prop_assert_eq!(seq.played().len(), 1);
    }

    /// Property: repeat mode holds the current track regardless of shuffle
    #[test]
    fn repeat_holds_track(
        (len, index) in len_and_index(),
        shuffle in any::<bool>(),
        ends in 1usize..20
    ) {
        let mut seq = positioned(len, index, 1);
        seq.set_repeat_mode(true);
        seq.set_shuffle_mode(shuffle);

        for _ in 0..ends {
            prop_assert_eq!(seq.on_track_ended(), index);
        }
        prop_assert!(seq.played().is_empty());
    }

    /// Property: jump_to sets the index exactly and touches nothing else
    #[test]
    fn jump_to_is_exact(
        (len, target) in len_and_index(),
        picks in 0usize..10,
        shuffle in any::<bool>(),
        repeat in any::<bool>(),
        seed in any::<u64>()
    ) {
        let mut seq = TrackSequencer::with_seed(len, seed).unwrap();
        for _ in 0..picks {
            seq.shuffle_pick();
        }
        seq.set_shuffle_mode(shuffle);
        seq.set_repeat_mode(repeat);
        let played = seq.played().clone();

        prop_assert_eq!(seq.jump_to(target).unwrap(), target);
        prop_assert_eq!(seq.current_index(), target);
        prop_assert_eq!(seq.played(), &played);
        prop_assert_eq!(seq.shuffle_mode(), shuffle);
        prop_assert_eq!(seq.repeat_mode(), repeat);
    }

    /// Property: indices past the end are rejected without side effects
    #[test]
    fn jump_to_rejects_out_of_range(len in 1usize..32, excess in 0usize..100) {
        let mut seq = TrackSequencer::with_seed(len, 0).unwrap();
        prop_assert!(seq.jump_to(len + excess).is_err());
        prop_assert_eq!(seq.current_index(), 0);
    }

    /// Property: snapshot JSON restores index and flags
    #[test]
    fn snapshot_roundtrip(
        (len, index) in len_and_index(),
        shuffle in any::<bool>(),
        repeat in any::<bool>()
    ) {
        let mut seq = positioned(len, index, 0);
        seq.set_shuffle_mode(shuffle);
        seq.set_repeat_mode(repeat);

        let json = seq.snapshot().to_json().unwrap();
        let mut restored = TrackSequencer::with_seed(len, 0).unwrap();
        restored.restore(&SequencerSnapshot::from_json(&json).unwrap());

        prop_assert_eq!(restored.current_index(), index);
        prop_assert_eq!(restored.shuffle_mode(), shuffle);
        prop_assert_eq!(restored.repeat_mode(), repeat);
    }
}

// ===== Concrete Scenarios =====

#[test]
fn three_track_navigation() {
    let mut seq = TrackSequencer::new(3).unwrap();
    assert_eq!(seq.advance(), 1);
    assert_eq!(seq.advance(), 2);
    assert_eq!(seq.advance(), 0);
    assert_eq!(seq.retreat(), 2);
}

#[test]
fn repeat_wins_over_shuffle() {
    let mut seq = TrackSequencer::new(3).unwrap();
    seq.jump_to(2).unwrap();
    seq.set_repeat_mode(true);
    seq.set_shuffle_mode(true);
    assert_eq!(seq.on_track_ended(), 2);
}

#[test]
fn single_track_shuffle_terminates() {
    let mut seq = TrackSequencer::new(1).unwrap();
    seq.set_shuffle_mode(true);
    for _ in 0..10 {
        assert_eq!(seq.on_track_ended(), 0);
    }
}
