//! Dominance-count palette filtering
//!
//! Optional post-processing over a counted palette: entries whose pixel
//! count falls well below the most dominant entry's tend to be sampling
//! noise, so callers rendering a handful of swatches may want them dropped.
//! This is deliberately not part of either quantizer's contract.

use swatch_core::Rgb;

/// Drop palette entries whose count falls below `min_fraction` of the
/// maximum observed count, always retaining at least 2 entries.
///
/// Entries keep their relative order. Palettes of 2 or fewer entries are
/// returned unchanged.
pub fn filter_by_dominance(entries: &[(Rgb, u32)], min_fraction: f64) -> Vec<(Rgb, u32)> {
    if entries.len() <= 2 {
        return entries.to_vec();
    }

    let max_count = entries.iter().map(|e| e.1).max().unwrap_or(0);
    let threshold = max_count as f64 * min_fraction;

    let kept: Vec<(Rgb, u32)> = entries
        .iter()
        .copied()
        .filter(|e| e.1 as f64 >= threshold)
        .collect();
    if kept.len() >= 2 {
        return kept;
    }

    // floor of 2: fall back to the two highest-count entries, in order
    let mut by_count: Vec<usize> = (0..entries.len()).collect();
    by_count.sort_by(|&a, &b| entries[b].1.cmp(&entries[a].1));
    let mut keep: Vec<usize> = by_count[..2].to_vec();
    keep.sort_unstable();
    keep.into_iter().map(|i| entries[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_minor_entries() {
        let entries = [
            (Rgb::new(255, 0, 0), 100),
            (Rgb::new(0, 255, 0), 50),
            (Rgb::new(0, 0, 255), 3),
        ];
        let kept = filter_by_dominance(&entries, 0.1);
        assert_eq!(kept, vec![entries[0], entries[1]]);
    }

    #[test]
    fn test_retains_at_least_two() {
        let entries = [
            (Rgb::new(255, 0, 0), 1000),
            (Rgb::new(0, 255, 0), 4),
            (Rgb::new(0, 0, 255), 2),
        ];
        let kept = filter_by_dominance(&entries, 0.5);
        assert_eq!(kept, vec![entries[0], entries[1]]);
    }

    #[test]
    fn test_small_palettes_untouched() {
        let entries = [(Rgb::new(255, 0, 0), 10), (Rgb::new(0, 0, 255), 1)];
        assert_eq!(filter_by_dominance(&entries, 0.9), entries.to_vec());
    }
}
