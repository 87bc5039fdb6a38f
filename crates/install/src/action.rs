//! Panel lifecycle actions.
//!
//! An action is a pluggable unit of work attached to a panel at one of three
//! points: pre-construction (run while panels are being built), pre-activation
//! and post-validation (both stored on the panel and fired by the navigator).
//!
//! Pre-construction actions run with no UI handler and before their panel
//! exists. They must not rely on any panel state.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap as HashMap;
use thiserror::Error;

use crate::data::InstallData;
use crate::ui::UiHandler;

/// Key/value configuration handed to [`PanelAction::initialize`].
pub type ActionConfig = BTreeMap<String, String>;

/// Errors raised by action creation, initialization or execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
	/// The factory has no action under this identifier.
	#[error("unknown panel action: {0}")]
	NotFound(String),
	/// The action rejected its configuration.
	#[error("invalid configuration for {action}: {reason}")]
	Initialize { action: String, reason: String },
	/// The action failed while executing.
	#[error("{0}")]
	Failed(String),
}

/// A unit of work attached to a panel lifecycle point.
pub trait PanelAction: Send {
	/// Receives the descriptor's configuration for this action, if any.
	fn initialize(&mut self, config: Option<&ActionConfig>) -> Result<(), ActionError>;

	/// Runs the action against the installer data.
	fn execute(&mut self, data: &mut InstallData, handler: Option<&dyn UiHandler>) -> Result<(), ActionError>;
}

/// Creates actions from their identifiers.
pub trait ActionFactory: Send + Sync {
	fn create(&self, id: &str) -> Result<Box<dyn PanelAction>, ActionError>;
}

type ActionCtor = Box<dyn Fn() -> Box<dyn PanelAction> + Send + Sync>;

/// Name-keyed [`ActionFactory`].
#[derive(Default)]
pub struct ActionRegistry {
	ctors: HashMap<String, ActionCtor>,
}

impl ActionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a constructor under `id`.
	///
	/// Returns `false` and keeps the existing constructor if `id` is taken.
	pub fn register<F>(&mut self, id: impl Into<String>, ctor: F) -> bool
	where
		F: Fn() -> Box<dyn PanelAction> + Send + Sync + 'static,
	{
		let id = id.into();
		if self.ctors.contains_key(&id) {
			return false;
		}
		self.ctors.insert(id, Box::new(ctor));
		true
	}

	pub fn len(&self) -> usize {
		self.ctors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ctors.is_empty()
	}
}

impl ActionFactory for ActionRegistry {
	fn create(&self, id: &str) -> Result<Box<dyn PanelAction>, ActionError> {
		self.ctors
			.get(id)
			.map(|ctor| ctor())
			.ok_or_else(|| ActionError::NotFound(id.to_string()))
	}
}
