//! Swatch Quant - Color quantization engines
//!
//! Two independent engines reduce a flat pixel buffer to a small ordered
//! palette of representative colors:
//!
//! - **Median cut** ([`mediancut`]): histogram-box splitting over a reduced
//!   5-bit-per-channel color space, driven by a lazily-sorted priority queue
//! - **Octree** ([`octree`]): an 8-level bit-trie with bottom-up leaf merging
//!
//! Both share the same contract: at most `max_colors` palette entries in
//! dominance order, and a logged empty result (never an error) for an empty
//! pixel set or a `max_colors` outside `1..=256`.
//!
//! Supporting modules: [`histogram`] (reduced-space frequency table),
//! [`vbox`] (color boxes with memoized aggregates), [`pqueue`] (the lazily
//! sorted queue), [`colormap`] (the median cut result container), and
//! [`filter`] (optional dominance-count post-filtering).

pub mod colormap;
pub mod filter;
pub mod histogram;
pub mod mediancut;
pub mod octree;
pub mod pqueue;
pub mod vbox;

// Re-export core types
pub use swatch_core;

// Re-export quantization entry points and containers
pub use colormap::ColorMap;
pub use mediancut::{FRACT_BY_POPULATIONS, MAX_ITERATIONS, quantize};
pub use octree::{OctreePalette, octree_quantize};

// Re-export supporting types
pub use filter::filter_by_dominance;
pub use histogram::{HIST_SIZE, Histogram, SIGBITS, color_index};
pub use pqueue::PQueue;
pub use vbox::{Axis, VBox};
