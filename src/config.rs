// src/config.rs

use std::time::Duration;

/// Default share of spots marked occupied when a lot is generated.
pub const DEFAULT_OCCUPANCY_RATIO: f64 = 0.7;

/// Default share of spots assigned the standard type; the remainder is
/// split uniformly across the special types.
pub const DEFAULT_STANDARD_RATIO: f64 = 0.9;

/// Inclusive row-count range for generated lots.
pub const DEFAULT_ROW_RANGE: (usize, usize) = (6, 10);

/// Inclusive column-count range for generated lots.
pub const DEFAULT_COL_RANGE: (usize, usize) = (8, 12);

/// Distance units covered by one grid cell when discretizing a continuous
/// position into a row/column pair.
pub const DEFAULT_CELL_SCALE: f64 = 3.0;

/// Ground footprint (width x length, in square meters) above which a vehicle
/// is treated as large-class regardless of its type tag.
pub const DEFAULT_LARGE_FOOTPRINT_M2: f64 = 12.0;

/// How long the assistant waits on the recommendation oracle before falling
/// back to the rule-based engine.
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Tunable parameters for the lot generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Inclusive range rows are drawn from when not supplied by the caller.
    pub row_range: (usize, usize),
    /// Inclusive range columns are drawn from when not supplied by the caller.
    pub col_range: (usize, usize),
    /// Share of spots marked occupied at generation time.
    pub occupancy_ratio: f64,
    /// Share of spots assigned the standard type.
    pub standard_ratio: f64,
    /// Pins the random source so repeated runs produce identical layouts.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            row_range: DEFAULT_ROW_RANGE,
            col_range: DEFAULT_COL_RANGE,
            occupancy_ratio: DEFAULT_OCCUPANCY_RATIO,
            standard_ratio: DEFAULT_STANDARD_RATIO,
            seed: None,
        }
    }
}

/// Tunable parameters for the allocation and reroute engines.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Distance units per grid cell for position discretization.
    pub cell_scale: f64,
    /// Footprint threshold for large-class treatment, in square meters.
    pub large_footprint_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cell_scale: DEFAULT_CELL_SCALE,
            large_footprint_threshold: DEFAULT_LARGE_FOOTPRINT_M2,
        }
    }
}

/// Knobs for the assistant facade.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub engine: EngineConfig,
    /// Upper bound on a single oracle consultation.
    pub oracle_timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }
}
