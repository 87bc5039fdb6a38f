use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::ActionConfig;
use crate::os::OsConstraint;

/// Declarative entry describing one panel of the installer flow.
///
/// Descriptors are read-only inputs owned by [`InstallData`](crate::InstallData).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PanelDescriptor {
	/// Short panel name (`HelloPanel`) or dotted qualified name (`acme.panels.Custom`).
	pub class_name: String,
	/// Hosts this panel is shown on. Empty means any host.
	pub os_constraints: Vec<OsConstraint>,
	/// Identifier resolved by the validator factory.
	pub validator: Option<String>,
	/// Locale tag to help resource.
	pub helps: BTreeMap<String, String>,
	/// Stamped onto the panel's XML sub-tree as `id`.
	pub panel_id: Option<String>,
	/// Run synchronously while panels are being built.
	pub pre_construction_actions: Vec<String>,
	/// Fired by the navigator when the panel becomes active.
	pub pre_activation_actions: Vec<String>,
	/// Fired by the navigator after the panel validated its data.
	pub post_validation_actions: Vec<String>,
	/// Per-action configuration, keyed by action identifier.
	pub action_configurations: BTreeMap<String, ActionConfig>,
}

impl PanelDescriptor {
	pub fn new(class_name: impl Into<String>) -> Self {
		Self {
			class_name: class_name.into(),
			..Self::default()
		}
	}

	pub fn with_panel_id(mut self, id: impl Into<String>) -> Self {
		self.panel_id = Some(id.into());
		self
	}

	pub fn with_os(mut self, constraint: OsConstraint) -> Self {
		self.os_constraints.push(constraint);
		self
	}

	pub fn with_validator(mut self, validator: impl Into<String>) -> Self {
		self.validator = Some(validator.into());
		self
	}

	pub fn with_help(mut self, locale: impl Into<String>, resource: impl Into<String>) -> Self {
		self.helps.insert(locale.into(), resource.into());
		self
	}

	pub fn with_pre_construction_action(mut self, action: impl Into<String>) -> Self {
		self.pre_construction_actions.push(action.into());
		self
	}

	pub fn with_pre_activation_action(mut self, action: impl Into<String>) -> Self {
		self.pre_activation_actions.push(action.into());
		self
	}

	pub fn with_post_validation_action(mut self, action: impl Into<String>) -> Self {
		self.post_validation_actions.push(action.into());
		self
	}

	/// Attaches configuration to the action identified by `action`.
	pub fn with_action_configuration(mut self, action: impl Into<String>, config: ActionConfig) -> Self {
		self.action_configurations.insert(action.into(), config);
		self
	}

	/// Returns the configuration declared for `action`, if any.
	pub fn action_configuration(&self, action: &str) -> Option<&ActionConfig> {
		self.action_configurations.get(action)
	}

	/// Returns the simple name, i.e. the last dotted segment of the class name.
	pub fn simple_name(&self) -> &str {
		self.class_name
			.rsplit_once('.')
			.map_or(self.class_name.as_str(), |(_, simple)| simple)
	}
}
