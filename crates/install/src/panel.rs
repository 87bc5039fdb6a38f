//! The capability set shared by every live panel.
//!
//! Concrete panels embed a [`PanelState`] and expose it through
//! [`Panel::state`] / [`Panel::state_mut`]; the remaining methods have
//! default implementations over that state.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::{ActionError, PanelAction};
use crate::data::InstallData;
use crate::descriptor::PanelDescriptor;
use crate::ui::UiHandler;
use crate::validator::DataValidator;

/// Shared handle to a panel instance owned by the container.
pub type PanelHandle = Arc<Mutex<Box<dyn Panel>>>;

/// State attached to a panel while it is wired into the installer.
#[derive(Default)]
pub struct PanelState {
	metadata: Option<PanelDescriptor>,
	validator: Option<Box<dyn DataValidator>>,
	helps: BTreeMap<String, String>,
	pre_activation_actions: Vec<Box<dyn PanelAction>>,
	post_validation_actions: Vec<Box<dyn PanelAction>>,
	hidden: bool,
}

impl PanelState {
	pub fn new() -> Self {
		Self::default()
	}

	/// State for a panel that takes part in the flow but is never shown.
	pub fn hidden() -> Self {
		Self {
			hidden: true,
			..Self::default()
		}
	}

	pub fn pre_activation_actions(&self) -> &[Box<dyn PanelAction>] {
		&self.pre_activation_actions
	}

	pub fn post_validation_actions(&self) -> &[Box<dyn PanelAction>] {
		&self.post_validation_actions
	}

	pub fn helps(&self) -> &BTreeMap<String, String> {
		&self.helps
	}

	/// Drops everything attached from a descriptor. Hidden-ness is kept.
	pub fn clear_wiring(&mut self) {
		self.metadata = None;
		self.validator = None;
		self.helps.clear();
		self.pre_activation_actions.clear();
		self.post_validation_actions.clear();
	}
}

impl core::fmt::Debug for PanelState {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PanelState")
			.field("class", &self.metadata.as_ref().map(|m| m.class_name.as_str()))
			.field("validator", &self.validator.is_some())
			.field("helps", &self.helps)
			.field("pre_activation_actions", &self.pre_activation_actions.len())
			.field("post_validation_actions", &self.post_validation_actions.len())
			.field("hidden", &self.hidden)
			.finish()
	}
}

/// A single screen of the installer flow.
pub trait Panel: Send {
	fn state(&self) -> &PanelState;

	fn state_mut(&mut self) -> &mut PanelState;

	/// Attaches the descriptor this panel was built from.
	fn set_metadata(&mut self, descriptor: &PanelDescriptor) {
		self.state_mut().metadata = Some(descriptor.clone());
	}

	fn metadata(&self) -> Option<&PanelDescriptor> {
		self.state().metadata.as_ref()
	}

	fn set_validation_service(&mut self, validator: Box<dyn DataValidator>) {
		self.state_mut().validator = Some(validator);
	}

	fn validation_service(&self) -> Option<&dyn DataValidator> {
		self.state().validator.as_deref()
	}

	fn set_helps(&mut self, helps: BTreeMap<String, String>) {
		self.state_mut().helps = helps;
	}

	/// Help resource for `locale`.
	fn help(&self, locale: &str) -> Option<&str> {
		self.state().helps.get(locale).map(String::as_str)
	}

	/// Queues an action fired when the panel becomes active.
	fn add_pre_activation_action(&mut self, action: Box<dyn PanelAction>) {
		self.state_mut().pre_activation_actions.push(action);
	}

	/// Queues an action fired after the panel's data validated.
	fn add_post_validation_action(&mut self, action: Box<dyn PanelAction>) {
		self.state_mut().post_validation_actions.push(action);
	}

	/// Hidden panels take part in the flow but are skipped by navigation.
	fn is_hidden(&self) -> bool {
		self.state().hidden
	}

	/// Runs queued pre-activation actions in order, stopping at the first failure.
	fn execute_pre_activation_actions(
		&mut self,
		data: &mut InstallData,
		handler: Option<&dyn UiHandler>,
	) -> Result<(), ActionError> {
		for action in &mut self.state_mut().pre_activation_actions {
			action.execute(data, handler)?;
		}
		Ok(())
	}

	/// Runs queued post-validation actions in order, stopping at the first failure.
	fn execute_post_validation_actions(
		&mut self,
		data: &mut InstallData,
		handler: Option<&dyn UiHandler>,
	) -> Result<(), ActionError> {
		for action in &mut self.state_mut().post_validation_actions {
			action.execute(data, handler)?;
		}
		Ok(())
	}
}
