use std::sync::Arc;

use hatch_catalog::{ClassResolver, PanelCatalog, PanelKey};
use hatch_container::Container;
use hatch_install::{HostOs, InstallData, OsMatcher, UiProgressHandler, Unpacker};

use crate::builtins;
use crate::instantiate::Instantiator;
use crate::registrar::register_panels;
use crate::{DuplicatePanelPolicy, Factories, LoaderConfig, PanelError, VisibilityMap};

/// Turns the declared panel list into live panels inside a [`Container`].
///
/// ```rust,ignore
/// let mut manager = PanelManager::new(install_data, container, factories);
/// manager.load_panels_in_container()?.instantiate_panels()?;
/// assert!(manager.is_visible(0));
/// ```
pub struct PanelManager {
	install_data: InstallData,
	container: Container,
	factories: Factories,
	catalog: &'static PanelCatalog,
	host: Box<dyn OsMatcher>,
	duplicates: DuplicatePanelPolicy,
	visibility: VisibilityMap,
	instantiated: bool,
}

impl PanelManager {
	pub fn new(install_data: InstallData, container: Container, factories: Factories) -> Self {
		Self {
			install_data,
			container,
			factories,
			catalog: builtins::catalog(),
			host: Box::new(HostOs::current()),
			duplicates: DuplicatePanelPolicy::default(),
			visibility: VisibilityMap::new(),
			instantiated: false,
		}
	}

	/// Resolves panel classes against `catalog` instead of [`builtins::catalog`].
	pub fn with_catalog(mut self, catalog: &'static PanelCatalog) -> Self {
		self.catalog = catalog;
		self
	}

	/// Evaluates OS constraints with `host`.
	pub fn with_host(mut self, host: impl OsMatcher + 'static) -> Self {
		self.host = Box::new(host);
		self
	}

	pub fn with_config(mut self, config: LoaderConfig) -> Self {
		self.duplicates = config.duplicate_panels;
		if let Some(host) = config.host {
			self.host = Box::new(host);
		}
		self
	}

	fn resolver(&self) -> ClassResolver<'static> {
		ClassResolver::new(self.catalog)
	}

	/// Panel type a descriptor naming `name` would load.
	pub fn resolve_class_name(&self, name: &str) -> Result<PanelKey, PanelError> {
		Ok(self.resolver().resolve(name)?)
	}

	/// Registers the panel type of every descriptor that applies to the host.
	pub fn load_panels_in_container(&mut self) -> Result<&mut Self, PanelError> {
		let resolver = self.resolver();
		let surviving = register_panels(
			self.install_data.panels_order(),
			&*self.host,
			&resolver,
			&mut self.container,
			self.duplicates,
		)?;
		tracing::debug!(
			declared = self.install_data.panels_order().len(),
			surviving,
			"Loaded panels in container"
		);
		Ok(self)
	}

	/// Instantiates and wires the registered panels. Runs once.
	#[doc(alias = "instanciate_panels")]
	pub fn instantiate_panels(&mut self) -> Result<(), PanelError> {
		if self.instantiated {
			return Err(PanelError::AlreadyInstantiated);
		}
		self.instantiated = true;

		let instantiator = Instantiator {
			host: &*self.host,
			resolver: self.resolver(),
			container: &self.container,
			factories: &self.factories,
			duplicates: self.duplicates,
		};
		instantiator.run(&mut self.install_data, &mut self.visibility)
	}

	/// False for hidden panels and raw indices past the end.
	pub fn is_visible(&self, raw: usize) -> bool {
		self.visibility.is_visible(raw)
	}

	/// Position of the panel at `raw` among visible panels.
	pub fn panel_visibility_number(&self, raw: usize) -> Option<usize> {
		self.visibility.visibility_number(raw)
	}

	pub fn is_last(&self, raw: usize) -> bool {
		self.visibility.is_last(raw)
	}

	/// Raw index of the last visible panel (see [`VisibilityMap::count_visible`]).
	pub fn count_visible(&self) -> usize {
		self.visibility.count_visible()
	}

	pub fn visible_len(&self) -> usize {
		self.visibility.visible_len()
	}

	/// Provides `handler` to the container, then returns its unpacker.
	///
	/// The unpacker is built on the first call, with the handler provided at
	/// that point; later calls return the same instance.
	pub fn get_unpacker(&mut self, handler: Arc<dyn UiProgressHandler>) -> Result<Arc<dyn Unpacker>, PanelError> {
		self.container.insert_service::<dyn UiProgressHandler>(handler);
		Ok(self.container.unpacker()?)
	}

	pub fn install_data(&self) -> &InstallData {
		&self.install_data
	}

	pub fn install_data_mut(&mut self) -> &mut InstallData {
		&mut self.install_data
	}

	pub fn container(&self) -> &Container {
		&self.container
	}

	pub fn visibility(&self) -> &VisibilityMap {
		&self.visibility
	}

	pub fn into_parts(self) -> (InstallData, Container, VisibilityMap) {
		(self.install_data, self.container, self.visibility)
	}
}

impl core::fmt::Debug for PanelManager {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PanelManager")
			.field("install_data", &self.install_data)
			.field("container", &self.container)
			.field("duplicates", &self.duplicates)
			.field("visibility", &self.visibility)
			.field("instantiated", &self.instantiated)
			.finish_non_exhaustive()
	}
}
