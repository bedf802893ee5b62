use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::ChainAdvance;

/// Chain behavior shared by every manager a driver creates.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// When a completed step's successor is initialized.
    #[schemars(title = "Chain Advance")]
    pub advance: ChainAdvance,
}
