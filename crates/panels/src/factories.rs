use std::sync::Arc;

use hatch_install::{
	ActionConfig, ActionFactory, ActionRegistry, DataValidator, PanelAction, ValidatorFactory, ValidatorRegistry,
};

use crate::PanelError;

/// The action and validator factories panels are wired with.
#[derive(Clone)]
pub struct Factories {
	pub actions: Arc<dyn ActionFactory>,
	pub validators: Arc<dyn ValidatorFactory>,
}

impl Factories {
	pub fn new(actions: impl ActionFactory + 'static, validators: impl ValidatorFactory + 'static) -> Self {
		Self {
			actions: Arc::new(actions),
			validators: Arc::new(validators),
		}
	}

	/// Factories that know no action and no validator.
	pub fn empty() -> Self {
		Self::new(ActionRegistry::new(), ValidatorRegistry::new())
	}

	/// Creates the action `id` declared by panel `class` and initializes it
	/// with `config`.
	pub(crate) fn action(
		&self,
		class: &str,
		id: &str,
		config: Option<&ActionConfig>,
	) -> Result<Box<dyn PanelAction>, PanelError> {
		let wrap = |source| PanelError::Action {
			class: class.to_string(),
			action: id.to_string(),
			source,
		};
		let mut action = self.actions.create(id).map_err(wrap)?;
		action.initialize(config).map_err(wrap)?;
		Ok(action)
	}

	pub(crate) fn validator(&self, class: &str, id: &str) -> Result<Box<dyn DataValidator>, PanelError> {
		self.validators.create(id).map_err(|source| PanelError::Validator {
			class: class.to_string(),
			validator: id.to_string(),
			source,
		})
	}
}

impl Default for Factories {
	fn default() -> Self {
		Self::empty()
	}
}

impl core::fmt::Debug for Factories {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Factories").finish_non_exhaustive()
	}
}
