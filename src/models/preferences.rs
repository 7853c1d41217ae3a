use serde::{Deserialize, Serialize};

/// Advisory hints a rider attaches to an allocation request. Neither field
/// is required for correctness; the deterministic engines work without
/// them and a live oracle may weigh them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Free-form priority hint: "optimal", "nearest", or anything else.
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Expected stay duration: "short", "medium", "long".
    #[serde(default = "default_stay_duration")]
    pub stay_duration: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            stay_duration: default_stay_duration(),
        }
    }
}

fn default_priority() -> String {
    "optimal".to_string()
}

fn default_stay_duration() -> String {
    "medium".to_string()
}
