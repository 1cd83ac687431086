//! Site configuration.
//!
//! Every field defaults to the values the stock page markup expects, so
//! `SiteConfig::default()` is what `halo-web` runs with unless the host
//! supplies JSON.
//!
//! ```json
//! {
//!   "mount_id": "app",
//!   "scene": { "track": ".circle-hero" },
//!   "arc": { "start_deg": 240.0, "end_deg": 170.0, "inset": 15.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::arc::ArcPath;
use crate::error::Result;

/// Top-level configuration for the router and animator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Id of the element whose contents are replaced on every render.
    pub mount_id: String,

    /// Fragment used when the location has no hash.
    pub default_fragment: String,

    /// Selectors for the hero view's animated elements.
    pub scene: SceneSelectors,

    /// Arc the dot travels along.
    pub arc: ArcPath,

    /// Max level for the console log sink (`trace` .. `error`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_owned(),
            default_fragment: "/hero".to_owned(),
            scene: SceneSelectors::default(),
            arc: ArcPath::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// CSS selectors used to locate the hero animation elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSelectors {
    pub scroll_container: String,
    pub track: String,
    pub dot: String,
}

impl Default for SceneSelectors {
    fn default() -> Self {
        Self {
            scroll_container: ".dot-scroll".to_owned(),
            track: ".circle-hero".to_owned(),
            dot: ".dot-hero".to_owned(),
        }
    }
}
