//! Queue navigation - next/previous index calculations
//!
//! Single place that decides which track comes next. Playback, prefetch
//! and explicit skips all go through these functions so they agree on the
//! target index.

use rand::Rng;

/// Calculate the next track index.
///
/// Shuffle draws uniformly from the whole playlist and resamples until the
/// draw differs from `current` (unless the playlist has a single track).
/// Sequential mode walks forward and, with looping enabled, wraps from the
/// last index back to `0`.
pub fn next_index(
    current: Option<usize>,
    len: usize,
    shuffle: bool,
    looping: bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    if shuffle {
        let mut rng = rand::thread_rng();
        let mut pick = rng.gen_range(0..len);
        if len > 1 {
            while Some(pick) == current {
                pick = rng.gen_range(0..len);
            }
        }
        return Some(pick);
    }

    match current {
        None => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        Some(_) if looping && len > 1 => Some(0),
        Some(_) => None,
    }
}

/// Calculate the previous track index.
///
/// Always sequential, even in shuffle mode: "previous" walks back through
/// playlist order, not through shuffle history.
pub fn previous_index(current: Option<usize>) -> Option<usize> {
    match current {
        Some(i) if i > 0 => Some(i - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_playlist_has_no_target() {
        assert_eq!(next_index(None, 0, false, false), None);
        assert_eq!(next_index(Some(0), 0, true, true), None);
    }

    #[test]
    fn sequential_walk_visits_every_index_then_stops() {
        let len = 5;
        let mut current = None;
        let mut visited = Vec::new();
        while let Some(i) = next_index(current, len, false, false) {
            visited.push(i);
            current = Some(i);
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn loop_wraps_from_last_index_to_zero() {
        assert_eq!(next_index(Some(4), 5, false, true), Some(0));
    }

    #[test]
    fn loop_on_single_track_yields_no_sequential_target() {
        assert_eq!(next_index(Some(0), 1, false, true), None);
    }

    #[test]
    fn shuffle_never_repeats_current_immediately() {
        for _ in 0..200 {
            let pick = next_index(Some(2), 4, true, false);
            assert!(matches!(pick, Some(i) if i < 4 && i != 2));
        }
    }

    #[test]
    fn shuffle_with_single_track_picks_itself() {
        assert_eq!(next_index(Some(0), 1, true, false), Some(0));
    }

    #[test]
    fn shuffle_reaches_all_other_indices() {
        let mut seen = [false; 4];
        for _ in 0..500 {
            if let Some(i) = next_index(Some(0), 4, true, false) {
                seen[i] = true;
            }
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn previous_is_sequential_and_stops_at_zero() {
        assert_eq!(previous_index(Some(3)), Some(2));
        assert_eq!(previous_index(Some(0)), None);
        assert_eq!(previous_index(None), None);
    }
}
