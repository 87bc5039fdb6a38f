use hatch_catalog::ClassResolver;
use hatch_container::Container;
use hatch_install::{OsMatcher, PanelDescriptor};

use crate::{DuplicatePanelPolicy, PanelError};

/// Registers the panel type of every descriptor that applies to the host.
///
/// Returns the number of surviving descriptors.
pub(crate) fn register_panels(
	descriptors: &[PanelDescriptor],
	host: &dyn OsMatcher,
	resolver: &ClassResolver<'_>,
	container: &mut Container,
	duplicates: DuplicatePanelPolicy,
) -> Result<usize, PanelError> {
	let mut surviving = 0;
	for descriptor in descriptors {
		if !host.one_matches_current_host(&descriptor.os_constraints) {
			tracing::trace!(class = %descriptor.class_name, "Skipping panel for this host");
			continue;
		}
		surviving += 1;

		let key = resolver.resolve(&descriptor.class_name)?;
		if container.has_component(key) {
			match duplicates {
				DuplicatePanelPolicy::Reject => {
					return Err(PanelError::DuplicatePanel {
						class: descriptor.class_name.clone(),
						id: key.id(),
					});
				}
				DuplicatePanelPolicy::Share => {
					tracing::warn!(class = %descriptor.class_name, id = key.id(), "Panel type declared twice; sharing instance");
					continue;
				}
			}
		}

		container.add_component(key)?;
	}
	Ok(surviving)
}
