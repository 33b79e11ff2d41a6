//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::models::Algorithm;

/// Inputs with at most this many activities are solved by backtracking.
pub const DEFAULT_BACKTRACKING_LIMIT: usize = 10;

/// Default ceiling on backtracking search nodes.
pub const DEFAULT_MAX_NODES: u64 = 5_000_000;

/// Tuning for [`ScheduleGenerator`](super::ScheduleGenerator).
///
/// Loadable from JSON or TOML; omitted fields take their defaults.
///
/// # Example
/// ```
/// use u_timetable::models::Algorithm;
/// use u_timetable::scheduler::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_backtracking_limit(12)
///     .with_max_nodes(100_000);
/// assert_eq!(config.algorithm_for(12), Algorithm::Backtracking);
/// assert_eq!(config.algorithm_for(13), Algorithm::Greedy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Largest input solved exhaustively; larger inputs use greedy.
    pub backtracking_limit: usize,
    /// Forces one strategy regardless of input size.
    pub algorithm: Option<Algorithm>,
    /// Node budget for backtracking. `None` searches to completion.
    ///
    /// When the budget runs out the best schedule found so far is returned.
    pub max_nodes: Option<u64>,
}

impl GeneratorConfig {
    /// Sets the backtracking size threshold.
    pub fn with_backtracking_limit(mut self, limit: usize) -> Self {
        self.backtracking_limit = limit;
        self
    }

    /// Forces a strategy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Sets the backtracking node budget.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Removes the node budget.
    pub fn without_node_limit(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Strategy used for an input of `activity_count` activities.
    pub fn algorithm_for(&self, activity_count: usize) -> Algorithm {
        match self.algorithm {
            Some(forced) => forced,
            None if activity_count <= self.backtracking_limit => Algorithm::Backtracking,
            None => Algorithm::Greedy,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backtracking_limit: DEFAULT_BACKTRACKING_LIMIT,
            algorithm: None,
            max_nodes: Some(DEFAULT_MAX_NODES),
        }
    }
}
