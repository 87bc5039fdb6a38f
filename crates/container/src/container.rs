use std::sync::Arc;

use hatch_catalog::PanelKey;
use hatch_install::{PanelHandle, Unpacker};
use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

use crate::{ContainerError, ServiceMap};

/// Builds the unpacker from the services available in the container.
pub type UnpackerFactory = Box<dyn Fn(&Container) -> Result<Arc<dyn Unpacker>, ContainerError> + Send + Sync>;

/// Owns panel instances and the services they are wired with.
///
/// A panel type is registered once with [`add_component`](Self::add_component);
/// the first [`component`](Self::component) call builds its instance and
/// every later call returns the same handle.
#[derive(Default)]
pub struct Container {
	components: Vec<PanelKey>,
	instances: Mutex<HashMap<PanelKey, PanelHandle>>,
	services: ServiceMap,
	unpacker_factory: Option<UnpackerFactory>,
	unpacker: Mutex<Option<Arc<dyn Unpacker>>>,
}

impl Container {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a panel type.
	pub fn add_component(&mut self, key: PanelKey) -> Result<(), ContainerError> {
		if self.components.contains(&key) {
			return Err(ContainerError::DuplicateComponent { id: key.id() });
		}
		tracing::debug!(class = key.id(), "Registered component");
		self.components.push(key);
		Ok(())
	}

	pub fn has_component(&self, key: PanelKey) -> bool {
		self.components.contains(&key)
	}

	/// Registered panel types, in registration order.
	pub fn components(&self) -> &[PanelKey] {
		&self.components
	}

	/// The instance of a registered panel type, built on first request.
	pub fn component(&self, key: PanelKey) -> Result<PanelHandle, ContainerError> {
		if !self.has_component(key) {
			return Err(ContainerError::NotRegistered { id: key.id() });
		}

		let mut instances = self.instances.lock();
		let handle = instances.entry(key).or_insert_with(|| {
			tracing::trace!(class = key.id(), "Constructing component");
			Arc::new(Mutex::new((key.def().construct)()))
		});
		Ok(Arc::clone(handle))
	}

	/// Number of panel instances built so far.
	pub fn instantiated(&self) -> usize {
		self.instances.lock().len()
	}

	/// Provides a service under the type `T`, replacing any previous one.
	pub fn insert_service<T>(&mut self, service: Arc<T>) -> Option<Arc<T>>
	where
		T: ?Sized + Send + Sync + 'static,
	{
		tracing::trace!(service = std::any::type_name::<T>(), "Provided service");
		self.services.insert(service)
	}

	pub fn service<T>(&self) -> Result<Arc<T>, ContainerError>
	where
		T: ?Sized + Send + Sync + 'static,
	{
		self.services.require::<T>()
	}

	pub fn services(&self) -> &ServiceMap {
		&self.services
	}

	pub fn set_unpacker_factory<F>(&mut self, factory: F)
	where
		F: Fn(&Container) -> Result<Arc<dyn Unpacker>, ContainerError> + Send + Sync + 'static,
	{
		self.unpacker_factory = Some(Box::new(factory));
	}

	/// The unpacker, built by the installed factory on first request.
	pub fn unpacker(&self) -> Result<Arc<dyn Unpacker>, ContainerError> {
		if let Some(unpacker) = self.unpacker.lock().as_ref() {
			return Ok(Arc::clone(unpacker));
		}

		let factory = self.unpacker_factory.as_ref().ok_or(ContainerError::NoUnpacker)?;
		let built = factory(self)?;
		tracing::debug!("Constructed unpacker");

		let mut slot = self.unpacker.lock();
		Ok(Arc::clone(slot.get_or_insert(built)))
	}
}

impl core::fmt::Debug for Container {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Container")
			.field("components", &self.components)
			.field("instantiated", &self.instantiated())
			.field("services", &self.services.len())
			.field("unpacker", &self.unpacker.lock().is_some())
			.finish()
	}
}
