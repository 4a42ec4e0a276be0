use std::collections::BinaryHeap;

use gridstar_core::{Coord, Dims};

use crate::config::SearchConfig;
use crate::neighbors::Neighbors;

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

/// Parent index meaning "no parent".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search scratch. Only meaningful when `generation` matches the
/// engine's current generation; anything else reads as undiscovered.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-set entry, ordered by `f` then by push order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest push.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells closed, goal included.
    pub expanded: usize,
    /// Entries pushed onto the open set, start included.
    pub pushed: usize,
    /// Popped entries discarded because their cell was already closed.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// PathEngine
// ---------------------------------------------------------------------------

/// Reusable A* search engine.
///
/// `PathEngine` owns the open set, the per-cell scratch nodes and a
/// neighbour buffer. Grids are only borrowed for the duration of a search.
pub struct PathEngine {
    pub(crate) dims: Dims,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) seq: u64,
    pub(crate) stats: SearchStats,
    pub(crate) nbuf: Neighbors,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new(Dims::DEFAULT)
    }
}

impl PathEngine {
    /// Create an engine sized for grids of `dims`, with default settings.
    pub fn new(dims: Dims) -> Self {
        Self::with_config(dims, SearchConfig::default())
    }

    /// Create an engine with explicit settings.
    pub fn with_config(dims: Dims, config: SearchConfig) -> Self {
        Self {
            dims,
            config,
            nodes: vec![Node::default(); dims.len()],
            generation: 0,
            open: BinaryHeap::new(),
            seq: 0,
            stats: SearchStats::default(),
            nbuf: Neighbors::new(),
        }
    }

    /// Current settings.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the settings used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Dimensions the scratch nodes are laid out for.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Counters of the most recent call to `find_path`.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Lay the scratch nodes out for a new grid size.
    ///
    /// If the new size fits within existing capacity the nodes are kept and
    /// only the generation is bumped. Otherwise they are reallocated.
    pub fn set_dims(&mut self, dims: Dims) {
        let new_len = dims.len();
        self.dims = dims;

        if new_len <= self.nodes.len() {
            self.next_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Start a new generation, invalidating every scratch node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped around: stamps from 2^32 searches ago would look
            // current, so wipe them.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    pub(crate) fn push(&mut self, idx: usize, f: i32) {
        self.open.push(NodeRef {
            idx,
            f,
            seq: self.seq,
        });
        self.seq = self.seq.wrapping_add(1);
        self.stats.pushed += 1;
    }

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.dims.index(c)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.dims.coord(idx)
    }
}
