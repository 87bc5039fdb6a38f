//! Panel loader configuration.
//!
//! ```toml
//! duplicate_panels = "share"
//!
//! [host]
//! family = "unix"
//! name = "linux"
//! arch = "x86_64"
//! ```
//!
//! Every key is optional. Without a `[host]` table, OS constraints are
//! evaluated against [`HostOs::current`].

use std::path::Path;

use hatch_install::HostOs;
use serde::Deserialize;

use crate::ConfigError;

/// What to do when two descriptors resolve to the same panel type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePanelPolicy {
	/// Fail loading with [`PanelError::DuplicatePanel`](crate::PanelError::DuplicatePanel).
	#[default]
	Reject,
	/// Register the type once; every descriptor naming it uses the same instance.
	Share,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
	pub duplicate_panels: DuplicatePanelPolicy,
	/// Overrides the detected host for OS-constraint evaluation.
	pub host: Option<HostOs>,
}

impl LoaderConfig {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}
}
