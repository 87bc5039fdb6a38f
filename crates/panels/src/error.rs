use std::path::PathBuf;

use hatch_catalog::ResolveError;
use hatch_container::ContainerError;
use hatch_install::{ActionError, ValidatorError};
use thiserror::Error;

/// Errors aborting panel loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
	#[error(transparent)]
	ClassNotFound(#[from] ResolveError),

	/// Creating, initializing or running one of the panel's actions failed.
	#[error("action {action} of panel {class}: {source}")]
	Action {
		class: String,
		action: String,
		#[source]
		source: ActionError,
	},

	#[error("validator {validator} of panel {class}: {source}")]
	Validator {
		class: String,
		validator: String,
		#[source]
		source: ValidatorError,
	},

	#[error(transparent)]
	Container(#[from] ContainerError),

	/// Two descriptors resolved to the same panel type.
	#[error("panel {class} resolves to {id}, which an earlier descriptor already uses")]
	DuplicatePanel { class: String, id: &'static str },

	#[error("panels were already instantiated")]
	AlreadyInstantiated,
}

/// Errors reading a [`LoaderConfig`](crate::LoaderConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("invalid loader configuration: {0}")]
	Parse(#[from] toml::de::Error),
}
