//! World configuration.

use mob_selector::SelectorConfig;

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// [`World::new`][crate::World::new].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Total ticks for [`World::run`][crate::World::run].
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool (all logical cores).
    pub num_threads: Option<usize>,

    /// Settings applied to every entity's selector.
    pub selector: SelectorConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            total_ticks: 200,
            seed:        42,
            num_threads: None,
            selector:    SelectorConfig::default(),
        }
    }
}
