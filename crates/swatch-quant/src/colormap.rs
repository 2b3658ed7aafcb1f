//! Palette container produced by median cut quantization

use crate::histogram::Histogram;
use crate::pqueue::PQueue;
use crate::vbox::VBox;
use swatch_core::Rgb;

/// A color box together with its representative color and population
struct MapEntry {
    vbox: VBox,
    color: Rgb,
    count: u32,
}

/// Ordered collection of (box, representative color) pairs.
///
/// Entries are pushed in descending `count x volume` order as the splitting
/// queue drains, so `palette()` yields the dominant colors first.
pub struct ColorMap {
    entries: PQueue<'static, MapEntry>,
}

impl ColorMap {
    /// Create an empty color map
    pub fn new() -> Self {
        Self {
            entries: PQueue::new(|a: &MapEntry, b: &MapEntry| {
                let pa = a.count as u64 * a.vbox.volume() as u64;
                let pb = b.count as u64 * b.vbox.volume() as u64;
                pa.cmp(&pb)
            }),
        }
    }

    /// Add a box, snapshotting its average color and population.
    ///
    /// The aggregates are resolved against the histogram at push time;
    /// the map does not hold onto the histogram.
    pub fn push(&mut self, vbox: VBox, histo: &Histogram) {
        let color = vbox.avg(histo);
        let count = vbox.count(histo);
        self.entries.push(MapEntry { vbox, color, count });
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The palette colors in dominance order
    pub fn palette(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.color).collect()
    }

    /// The palette colors paired with their pixel counts
    pub fn palette_with_counts(&self) -> Vec<(Rgb, u32)> {
        self.entries.iter().map(|e| (e.color, e.count)).collect()
    }

    /// Map a probe color to the palette color of the box containing it,
    /// falling back to [`nearest`](Self::nearest) when no box does
    pub fn map(&self, color: Rgb) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|e| e.vbox.contains(color))
            .map(|e| e.color)
            .or_else(|| self.nearest(color))
    }

    /// Palette color minimizing the squared RGB distance to the probe
    pub fn nearest(&self, color: Rgb) -> Option<Rgb> {
        self.entries
            .iter()
            .min_by_key(|e| distance_sq(e.color, color))
            .map(|e| e.color)
    }

    /// Snap the darkest entry to pure black when every channel is below 5,
    /// and the lightest entry to pure white when every channel exceeds 251.
    ///
    /// Entry order is preserved.
    pub fn force_bw(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        let darkest = (0..self.entries.len())
            .min_by_key(|&i| self.entries.as_slice()[i].color.channel_sum());
        if let Some(i) = darkest
            && let Some(entry) = self.entries.get_mut(i)
        {
            let c = entry.color;
            if c.r < 5 && c.g < 5 && c.b < 5 {
                entry.color = Rgb::new(0, 0, 0);
            }
        }

        let lightest = (0..self.entries.len())
            .max_by_key(|&i| self.entries.as_slice()[i].color.channel_sum());
        if let Some(i) = lightest
            && let Some(entry) = self.entries.get_mut(i)
        {
            let c = entry.color;
            if c.r > 251 && c.g > 251 && c.b > 251 {
                entry.color = Rgb::new(255, 255, 255);
            }
        }
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new()
    }
}

fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}
