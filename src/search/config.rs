//! Search configuration.

use crate::map::MAX_COLORS;

/// Configuration for a hill-climbing run.
///
/// # Examples
///
/// ```
/// use mapclimb::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_colors(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Color budget k. Each region is assigned a color in `[0, k)`.
    /// Valid range is `2..=13`.
    pub colors: usize,

    /// Hard cap on outer search steps. Sideways moves are allowed, so
    /// without a cap a plateau could cycle forever.
    pub max_steps: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            colors: 4,
            max_steps: 100,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_colors(mut self, k: usize) -> Self {
        self.colors = k;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The color budget is the only user-facing input; an out-of-range
    /// value is reported with the valid range rather than searched on.
    pub fn validate(&self) -> Result<(), String> {
        if self.colors <= 1 || self.colors > MAX_COLORS {
            return Err(format!(
                "please use a color count k with 1 < k <= {MAX_COLORS}, got {}",
                self.colors
            ));
        }
        if self.max_steps == 0 {
            return Err("max_steps must be positive".into());
        }
        Ok(())
    }
}
