//! Search configuration.

/// What to do when a search reaches an already discovered, still open cell
/// through a cheaper route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rediscovery {
    /// Keep the first parent and cost ever assigned to a cell.
    ///
    /// Each cell enters the open set at most once. On some obstacle layouts
    /// the returned path is longer than the shortest one.
    #[default]
    Keep,
    /// Re-parent the cell and push it again when the new cost is strictly
    /// lower. Paths are always shortest.
    Relax,
}

/// Tunables for [`PathEngine`](crate::PathEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Rediscovery policy.
    pub rediscovery: Rediscovery,
    /// Upper bound on the number of cells a search may close, goal included.
    /// `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Configuration for shortest-path-guaranteed searches.
    pub fn relaxed() -> Self {
        Self {
            rediscovery: Rediscovery::Relax,
            ..Default::default()
        }
    }

    /// Set the rediscovery policy.
    pub fn with_rediscovery(mut self, rediscovery: Rediscovery) -> Self {
        self.rediscovery = rediscovery;
        self
    }

    /// Bound the number of expanded cells.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
