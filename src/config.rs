use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::anchor::DEFAULT_ID_PREFIX;

pub const MAX_INDENT_STEP: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocOptions {
    /// Anchors are `{id_prefix}{index}`.
    pub id_prefix: String,
    /// Text of the `<summary>` toggle.
    pub heading: String,
    pub class: String,
    /// Each entry is indented by `level * indent_step` units.
    pub indent_step: u32,
    pub indent_unit: String,
    /// Start the table of contents folded.
    pub collapsed: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            heading: "Table of Contents".to_owned(),
            class: "toc".to_owned(),
            indent_step: 2,
            indent_unit: "em".to_owned(),
            collapsed: false,
        }
    }
}

impl TocOptions {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("read toc config: {}", path.display()))?;
        let options: TocOptions = serde_yaml::from_str(&yaml)
            .with_context(|| format!("parse toc config: {}", path.display()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.id_prefix.is_empty() {
            anyhow::bail!("id_prefix must not be empty");
        }
        if self.id_prefix.chars().any(char::is_whitespace) {
            anyhow::bail!("id_prefix must not contain whitespace: {:?}", self.id_prefix);
        }
        if self.indent_step > MAX_INDENT_STEP {
            anyhow::bail!(
                "indent_step must be at most {MAX_INDENT_STEP}: {}",
                self.indent_step
            );
        }
        if !self.indent_unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
            anyhow::bail!("indent_unit is not a css unit: {:?}", self.indent_unit);
        }
        Ok(())
    }
}
