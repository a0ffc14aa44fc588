//! Renderer settings.
//!
//! Which elements serve as the token layer and templates differs between map
//! artwork, so the ids are configurable. Settings load from TOML; any key left
//! out keeps its default:
//!
//! ```toml
//! units_layer = "prototypes"
//! army_template = "army_prototype"
//! fleet_template = "fleet_prototype"
//! clear_tokens = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::state::ConfigError;

/// Stroke and visibility declarations appended after the token fill.
pub const DEFAULT_TOKEN_STYLE: &str = "color:#000000;stroke:#000000;stroke-width:1px;\
stroke-linecap:butt;stroke-linejoin:miter;stroke-miterlimit:4;stroke-opacity:1;\
visibility:visible;display:inline;overflow:visible;opacity:1";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Id of the group that receives unit tokens.
    pub units_layer: String,
    /// Id of the element cloned for armies.
    pub army_template: String,
    /// Id of the element cloned for fleets and unrecognized unit types.
    pub fleet_template: String,
    /// Remove tokens from an earlier pass before placing new ones.
    pub clear_tokens: bool,
    pub token_style: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            units_layer: "prototypes".to_string(),
            army_template: "army_prototype".to_string(),
            fleet_template: "fleet_prototype".to_string(),
            clear_tokens: true,
            token_style: DEFAULT_TOKEN_STYLE.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml(&data)
    }

    /// Builds the token `style` attribute for a fill color.
    pub fn token_style_for(&self, color: &str) -> String {
        if self.token_style.is_empty() {
            format!("fill:{}", color)
        } else {
            format!("fill:{};{}", color, self.token_style)
        }
    }
}
