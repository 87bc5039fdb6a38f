//! Panel instantiation.
//!
//! One pass over the declared panels, in order. For every descriptor that
//! applies to the host:
//!
//! 1. resolve the panel type;
//! 2. run the pre-construction actions, with no UI handler;
//! 3. fetch the instance from the container;
//! 4. attach metadata, validator and helps, replacing whatever an earlier
//!    descriptor of the same panel type attached;
//! 5. queue the pre-activation and post-validation actions (not run);
//! 6. append the panel, its visibility entry and its XML sub-tree.
//!
//! The panel list, the visibility map and the XML children therefore share
//! raw indices. A failure stops the pass where it happened; nothing already
//! appended is rolled back.

use hatch_catalog::{ClassResolver, PanelKey};
use hatch_container::Container;
use hatch_install::{InstallData, OsMatcher, Panel, PanelDescriptor};

use crate::xml_context::append_panel_root;
use crate::{DuplicatePanelPolicy, Factories, PanelError, VisibilityMap};

pub(crate) struct Instantiator<'a> {
	pub host: &'a dyn OsMatcher,
	pub resolver: ClassResolver<'a>,
	pub container: &'a Container,
	pub factories: &'a Factories,
	pub duplicates: DuplicatePanelPolicy,
}

impl Instantiator<'_> {
	pub fn run(&self, data: &mut InstallData, visibility: &mut VisibilityMap) -> Result<(), PanelError> {
		let descriptors = data.panels_order().to_vec();
		let mut seen: Vec<PanelKey> = Vec::with_capacity(descriptors.len());

		for descriptor in &descriptors {
			if !self.host.one_matches_current_host(&descriptor.os_constraints) {
				continue;
			}

			let class = descriptor.class_name.as_str();
			let key = self.resolver.resolve(class)?;
			let shared = seen.contains(&key);
			if shared && self.duplicates == DuplicatePanelPolicy::Reject {
				return Err(PanelError::DuplicatePanel {
					class: class.to_string(),
					id: key.id(),
				});
			}
			seen.push(key);

			self.run_pre_construction_actions(descriptor, data)?;

			let handle = self.container.component(key)?;
			let hidden = {
				let mut panel = handle.lock();
				if shared {
					tracing::debug!(class, id = key.id(), "Rewiring shared panel");
					panel.state_mut().clear_wiring();
				}
				self.attach(descriptor, &mut **panel)?;
				panel.is_hidden()
			};

			let raw = visibility.len();
			data.panels_mut().push(handle);
			let visible = visibility.push(hidden);
			append_panel_root(data.xml_data_mut(), descriptor);
			tracing::debug!(class, id = key.id(), raw, visible = ?visible, "Instantiated panel");
		}

		tracing::info!(
			panels = visibility.len(),
			visible = visibility.visible_len(),
			"Panels instantiated"
		);
		Ok(())
	}

	fn run_pre_construction_actions(
		&self,
		descriptor: &PanelDescriptor,
		data: &mut InstallData,
	) -> Result<(), PanelError> {
		let class = descriptor.class_name.as_str();
		for id in &descriptor.pre_construction_actions {
			let mut action = self.factories.action(class, id, descriptor.action_configuration(id))?;
			tracing::trace!(class, action = %id, "Running pre-construction action");
			action.execute(data, None).map_err(|source| PanelError::Action {
				class: class.to_string(),
				action: id.clone(),
				source,
			})?;
		}
		Ok(())
	}

	fn attach(&self, descriptor: &PanelDescriptor, panel: &mut dyn Panel) -> Result<(), PanelError> {
		let class = descriptor.class_name.as_str();

		panel.set_metadata(descriptor);
		if let Some(validator) = &descriptor.validator {
			panel.set_validation_service(self.factories.validator(class, validator)?);
		}
		panel.set_helps(descriptor.helps.clone());

		for id in &descriptor.pre_activation_actions {
			let action = self.factories.action(class, id, descriptor.action_configuration(id))?;
			panel.add_pre_activation_action(action);
		}
		for id in &descriptor.post_validation_actions {
			let action = self.factories.action(class, id, descriptor.action_configuration(id))?;
			panel.add_post_validation_action(action);
		}
		Ok(())
	}
}
