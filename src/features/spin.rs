//! Spin controller
//!
//! Owns the spin lifecycle: `Idle` → `Spinning` → `Idle` with a winner.
//! The selected entry is captured when the spin starts, so edits to the
//! list during the animation cannot change who wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::roster::Entry;

/// Uniform index source
pub trait RandomSource {
    /// Pick an index uniformly from `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local generator from `rand`
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible generator seeded once
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// The segment chosen for a running spin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub entry: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning(Selection),
}

/// Instruction for the wheel to start animating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinRequest {
    /// Segment the wheel must stop on
    pub prize_index: usize,
    /// Number of segments at request time
    pub segment_count: usize,
}

pub struct SpinController {
    state: SpinState,
    winner: Option<String>,
    random: Box<dyn RandomSource>,
}

impl Default for SpinController {
    fn default() -> Self {
        Self::new(Box::new(ThreadRandom))
    }
}

impl SpinController {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            state: SpinState::Idle,
            winner: None,
            random,
        }
    }

    /// Controller drawing from `seed` when given, else from the thread generator
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::info!("Using seeded draws (seed {})", seed);
                Self::new(Box::new(SeededRandom::new(seed)))
            }
            None => Self::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    /// Start a spin over `entries`
    ///
    /// Ignored (returns `None`) when the list is empty or a spin is running.
    pub fn request_spin(&mut self, entries: &[Entry]) -> Option<SpinRequest> {
        if self.is_spinning() {
            tracing::debug!("Spin already in progress, ignoring request");
            return None;
        }
        if entries.is_empty() {
            tracing::debug!("No names to spin");
            return None;
        }

        let index = self.random.pick(entries.len());
        let Some(entry) = entries.get(index) else {
            tracing::warn!(
                "Random source returned index {} for {} entries",
                index,
                entries.len()
            );
            return None;
        };

        tracing::debug!("Spinning towards {} ({})", index, entry.label);
        self.state = SpinState::Spinning(Selection {
            index,
            entry: entry.clone(),
        });

        Some(SpinRequest {
            prize_index: index,
            segment_count: entries.len(),
        })
    }

    /// Wheel finished animating; resolve the captured winner
    ///
    /// A notification while idle is ignored.
    pub fn on_animation_complete(&mut self) -> Option<&str> {
        match std::mem::take(&mut self.state) {
            SpinState::Spinning(selection) => {
                tracing::info!("Winner: {}", selection.entry.label);
                self.winner = Some(selection.entry.label);
                self.winner.as_deref()
            }
            SpinState::Idle => {
                tracing::debug!("Stop notification without a running spin");
                None
            }
        }
    }

    /// Winner to announce; hidden while a spin is running
    pub fn announced_winner(&self) -> Option<&str> {
        match self.state {
            SpinState::Idle => self.winner.as_deref(),
            SpinState::Spinning(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns queued indices in order, then zero
    struct FixedRandom(Vec<usize>);

    impl RandomSource for FixedRandom {
        fn pick(&mut self, _len: usize) -> usize {
            if self.0.is_empty() { 0 } else { self.0.remove(0) }
        }
    }

    fn entries(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|n| Entry::new(*n)).collect()
    }

    fn controller(picks: Vec<usize>) -> SpinController {
        SpinController::new(Box::new(FixedRandom(picks)))
    }

    #[test]
    fn test_empty_list_stays_idle() {
        let mut spin = controller(vec![]);
        assert_eq!(spin.request_spin(&[]), None);
        assert_eq!(spin.state(), &SpinState::Idle);
    }

    #[test]
    fn test_forced_draw_resolves_winner() {
        let names = entries(&["A", "B", "C"]);
        let mut spin = controller(vec![1]);

        let request = spin.request_spin(&names).unwrap();
        assert_eq!(
            request,
            SpinRequest {
                prize_index: 1,
                segment_count: 3
            }
        );
        assert!(matches!(spin.state(), SpinState::Spinning(s) if s.index == 1));
        assert_eq!(spin.announced_winner(), None);

        assert_eq!(spin.on_animation_complete(), Some("B"));
        assert_eq!(spin.state(), &SpinState::Idle);
        assert_eq!(spin.announced_winner(), Some("B"));
    }

    #[test]
    fn test_no_reentrant_spin() {
        let names = entries(&["A", "B", "C"]);
        let mut spin = controller(vec![2, 0]);

        spin.request_spin(&names).unwrap();
        assert_eq!(spin.request_spin(&names), None);
        assert!(matches!(spin.state(), SpinState::Spinning(s) if s.index == 2));
    }

    #[test]
    fn test_winner_captured_at_request() {
        let mut names = entries(&["A", "B", "C"]);
        let mut spin = controller(vec![2]);

        spin.request_spin(&names).unwrap();
        // List shrinks while the wheel is still turning
        names.remove(0);
        names.remove(0);
        assert_eq!(spin.on_animation_complete(), Some("C"));
    }

    #[test]
    fn test_duplicate_stop_ignored() {
        let names = entries(&["A", "B"]);
        let mut spin = controller(vec![0]);

        spin.request_spin(&names).unwrap();
        assert_eq!(spin.on_animation_complete(), Some("A"));
        assert_eq!(spin.on_animation_complete(), None);
        assert_eq!(spin.announced_winner(), Some("A"));
    }

    #[test]
    fn test_new_spin_hides_previous_winner() {
        let names = entries(&["A", "B"]);
        let mut spin = controller(vec![0, 1]);

        spin.request_spin(&names).unwrap();
        spin.on_animation_complete();
        assert_eq!(spin.announced_winner(), Some("A"));

        spin.request_spin(&names).unwrap();
        assert_eq!(spin.announced_winner(), None);
        spin.on_animation_complete();
        assert_eq!(spin.announced_winner(), Some("B"));
    }

    #[test]
    fn test_out_of_range_source_is_ignored() {
        let names = entries(&["A"]);
        let mut spin = controller(vec![5]);
        assert_eq!(spin.request_spin(&names), None);
        assert!(!spin.is_spinning());
    }

    #[test]
    fn test_random_sources_stay_in_range() {
        let mut seeded = SeededRandom::new(42);
        let mut thread = ThreadRandom;
        for len in 1..20 {
            assert!(seeded.pick(len) < len);
            assert!(thread.pick(len) < len);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        let xs: Vec<usize> = (0..10).map(|_| a.pick(100)).collect();
        let ys: Vec<usize> = (0..10).map(|_| b.pick(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_seeded_controllers_draw_same_winners() {
        let names = entries(&["A", "B", "C", "D", "E", "F", "G"]);
        let mut a = SpinController::with_seed(Some(11));
        let mut b = SpinController::with_seed(Some(11));

        for _ in 0..8 {
            assert_eq!(a.request_spin(&names), b.request_spin(&names));
            assert_eq!(a.on_animation_complete(), b.on_animation_complete());
        }
    }

    #[test]
    fn test_unseeded_controller_spins() {
        let names = entries(&["A", "B"]);
        let mut spin = SpinController::with_seed(None);
        let request = spin.request_spin(&names).unwrap();
        assert!(request.prize_index < 2);
    }
}
