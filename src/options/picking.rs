use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

/// Pick triggering and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
pub struct PickingOptions {
    /// Button whose release triggers a pick.
    #[schemars(title = "Pick Button")]
    pub button: MouseButton,
    /// Also pick on cursor movement and report hover changes.
    #[schemars(title = "Hover Picking")]
    pub hover: bool,
    /// Log every resolved pick at debug level.
    #[schemars(skip)]
    pub log_picks: bool,
    /// Texture-map alpha below which fragments are not pickable.
    #[schemars(title = "Alpha Cutoff", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub alpha_cutoff: f32,
}

impl Default for PickingOptions {
    fn default() -> Self {
        Self {
            button: MouseButton::Left,
            hover: false,
            log_picks: true,
            alpha_cutoff: 0.5,
        }
    }
}
