//! Octree color quantization
//!
//! An 8-level trie over the bits of the RGB channels: level 0 branches on
//! bit 7 of each channel, level 7 on bit 0, so a full descent pins down an
//! exact 24-bit color. Leaves accumulate channel sums and pixel counts;
//! reduction merges leaves bottom-up until the palette fits the target.
//!
//! Nodes live in an arena and reference each other by index, with a flat
//! per-level registry of created nodes so reduction can find mergeable
//! parents without re-walking the tree.

use log::warn;
use std::array;
use swatch_core::Rgb;

const MAX_DEPTH: usize = 8;

type NodeId = usize;

#[derive(Default)]
struct OctreeNode {
    red: u64,
    green: u64,
    blue: u64,
    pixel_count: u64,
    children: [Option<NodeId>; 8],
}

impl OctreeNode {
    /// A node is a leaf once it has absorbed at least one pixel
    fn is_leaf(&self) -> bool {
        self.pixel_count > 0
    }
}

/// Arena-backed octree accumulating a color distribution
struct Octree {
    nodes: Vec<OctreeNode>,
    levels: [Vec<NodeId>; MAX_DEPTH],
    root: NodeId,
}

impl Octree {
    fn new() -> Self {
        Self {
            nodes: vec![OctreeNode::default()],
            levels: array::from_fn(|_| Vec::new()),
            root: 0,
        }
    }

    /// Child slot selected by one bit of each channel at the given level
    fn child_index(px: Rgb, level: usize) -> usize {
        let mask = 0x80u8 >> level;
        let r = (px.r & mask != 0) as usize;
        let g = (px.g & mask != 0) as usize;
        let b = (px.b & mask != 0) as usize;
        (r << 2) | (g << 1) | b
    }

    /// Descend all 8 levels, creating nodes on demand, and accumulate the
    /// pixel into the leaf at the bottom
    fn add_color(&mut self, px: Rgb) {
        let mut id = self.root;
        for level in 0..MAX_DEPTH {
            let slot = Self::child_index(px, level);
            id = match self.nodes[id].children[slot] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(OctreeNode::default());
                    self.nodes[id].children[slot] = Some(child);
                    // deepest-level nodes are plain leaves, never reduced
                    if level < MAX_DEPTH - 1 {
                        self.levels[level].push(child);
                    }
                    child
                }
            };
        }

        let leaf = &mut self.nodes[id];
        leaf.red += px.r as u64;
        leaf.green += px.g as u64;
        leaf.blue += px.b as u64;
        leaf.pixel_count += 1;
    }

    /// Collect leaf ids in tree order (child slots 0..8, depth first)
    fn leaf_ids(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_leaves(self.root, &mut out);
        out
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.nodes[id].children.into_iter().flatten() {
            if self.nodes[child].is_leaf() {
                out.push(child);
            } else {
                self.collect_leaves(child, out);
            }
        }
    }

    /// Absorb all children's accumulators into the node, clearing its child
    /// slots so it becomes a leaf. Returns the number of absorbed children.
    fn merge_children(&mut self, id: NodeId) -> usize {
        let children = self.nodes[id].children;
        let mut removed = 0;
        let (mut red, mut green, mut blue, mut count) = (0u64, 0u64, 0u64, 0u64);

        for child in children.into_iter().flatten() {
            let node = &self.nodes[child];
            red += node.red;
            green += node.green;
            blue += node.blue;
            count += node.pixel_count;
            removed += 1;
        }

        let node = &mut self.nodes[id];
        node.red += red;
        node.green += green;
        node.blue += blue;
        node.pixel_count += count;
        node.children = [None; 8];
        removed
    }

    /// Merge leaves bottom-up until at most `max_colors` remain, then emit
    /// each leaf's rounded mean color and pixel count in tree order
    fn build_palette(&mut self, max_colors: usize) -> Vec<(Rgb, u32)> {
        let mut leaf_count = self.leaf_ids().len();

        'reduce: for level in (0..MAX_DEPTH).rev() {
            if leaf_count <= max_colors {
                break;
            }
            for id in std::mem::take(&mut self.levels[level]) {
                let removed = self.merge_children(id);
                // the node itself becomes a leaf, so the tally drops by
                // one less than the number of children absorbed
                leaf_count = leaf_count + 1 - removed;
                if leaf_count <= max_colors {
                    break 'reduce;
                }
            }
        }

        let mut palette = Vec::new();
        for id in self.leaf_ids() {
            if palette.len() >= max_colors {
                break;
            }
            let node = &self.nodes[id];
            let n = node.pixel_count;
            let color = Rgb::new(
                ((node.red as f64 / n as f64).round()) as u8,
                ((node.green as f64 / n as f64).round()) as u8,
                ((node.blue as f64 / n as f64).round()) as u8,
            );
            palette.push((color, n as u32));
        }
        palette
    }
}

/// Palette produced by octree quantization, in dominance order
#[derive(Debug, Clone, Default)]
pub struct OctreePalette {
    entries: Vec<(Rgb, u32)>,
}

impl OctreePalette {
    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The palette colors, most frequent first
    pub fn palette(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.0).collect()
    }

    /// The palette colors paired with their pixel counts
    pub fn palette_with_counts(&self) -> Vec<(Rgb, u32)> {
        self.entries.clone()
    }
}

/// Reduce a pixel set to at most `max_colors` colors with an octree.
///
/// Shares the soft no-op contract of [`quantize`](crate::mediancut::quantize):
/// an empty pixel slice or `max_colors` outside `1..=256` is logged and
/// yields an empty palette. Because a single merge can absorb several
/// leaves at once, the result may hold fewer than `max_colors` entries.
pub fn octree_quantize(pixels: &[Rgb], max_colors: u32) -> OctreePalette {
    if pixels.is_empty() || !(1..=256).contains(&max_colors) {
        warn!(
            "octree_quantize: need a non-empty pixel set and 1..=256 colors, \
             got {} pixels and max_colors={max_colors}",
            pixels.len()
        );
        return OctreePalette::default();
    }

    let mut octree = Octree::new();
    for &px in pixels {
        octree.add_color(px);
    }

    let mut entries = octree.build_palette(max_colors as usize);
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    OctreePalette { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_index() {
        // bit 7: white sets all three channel bits, black none
        assert_eq!(Octree::child_index(Rgb::new(255, 255, 255), 0), 0b111);
        assert_eq!(Octree::child_index(Rgb::new(0, 0, 0), 0), 0b000);
        assert_eq!(Octree::child_index(Rgb::new(255, 0, 0), 0), 0b100);
        // bit 0 only differs at the deepest level
        assert_eq!(Octree::child_index(Rgb::new(1, 0, 1), 7), 0b101);
    }

    #[test]
    fn test_leaf_per_distinct_color() {
        let mut octree = Octree::new();
        octree.add_color(Rgb::new(0, 0, 0));
        octree.add_color(Rgb::new(0, 0, 0));
        octree.add_color(Rgb::new(255, 255, 255));
        assert_eq!(octree.leaf_ids().len(), 2);
    }

    #[test]
    fn test_merge_conserves_counts() {
        let mut octree = Octree::new();
        // two colors differing only in the last bit share a depth-7 parent
        octree.add_color(Rgb::new(100, 100, 100));
        octree.add_color(Rgb::new(101, 101, 101));
        assert_eq!(octree.leaf_ids().len(), 2);

        let palette = octree.build_palette(1);
        assert_eq!(palette.len(), 1);
        let (color, count) = palette[0];
        assert_eq!(count, 2);
        // rounded mean of the two merged colors
        assert_eq!(color, Rgb::new(101, 101, 101));
    }

    #[test]
    fn test_registry_skips_deepest_level() {
        let mut octree = Octree::new();
        octree.add_color(Rgb::new(42, 42, 42));
        assert!(octree.levels[MAX_DEPTH - 1].is_empty());
        // one registered node per shallower level along the descent
        for level in 0..MAX_DEPTH - 1 {
            assert_eq!(octree.levels[level].len(), 1);
        }
    }
}
