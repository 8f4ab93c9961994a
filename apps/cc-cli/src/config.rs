//! YAML description of a liquid mixture.
//!
//! ```yaml
//! components:
//!   - { x: 0.5, a: 14.0568, b: 2825.42, c: -42.7089 }
//!   - { x: 0.5, a: 14.0, b: 2800.0, c: -40.0 }
//! ```

use std::path::Path;

use cc_chem::{AntoineParameters, MixtureComponent};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixtureConfig {
    #[serde(default)]
    pub components: Vec<ComponentDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    /// Mole fraction in the liquid.
    pub x: f64,
    #[serde(flatten)]
    pub antoine: AntoineParameters,
}

impl From<ComponentDef> for MixtureComponent {
    fn from(def: ComponentDef) -> Self {
        MixtureComponent::new(def.x, def.antoine)
    }
}

impl MixtureConfig {
    pub fn from_yaml_str(content: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn components(&self) -> Vec<MixtureComponent> {
        self.components.iter().copied().map(Into::into).collect()
    }
}

pub fn load_yaml(path: &Path) -> CliResult<MixtureConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    MixtureConfig::from_yaml_str(&content)
}

/// Parse `x,A,B,C` as given on the command line.
pub fn parse_component(s: &str) -> Result<MixtureComponent, String> {
    let values = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|e| format!("`{part}` is not a number: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    match values.as_slice() {
        [x, a, b, c] => Ok(MixtureComponent::new(*x, AntoineParameters::new(*a, *b, *c))),
        _ => Err(format!("expected x,A,B,C but got {} value(s)", values.len())),
    }
}
