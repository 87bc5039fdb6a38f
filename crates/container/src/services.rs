use std::any::{Any, TypeId};
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::ContainerError;

/// Type-keyed map of shared services.
///
/// Each slot holds an `Arc<T>`, where `T` may be a trait object
/// (`dyn UiProgressHandler`), so the slot is keyed by the requested type
/// rather than the concrete one.
#[derive(Default)]
pub struct ServiceMap {
	inner: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `service`, returning the one it replaced.
	pub fn insert<T>(&mut self, service: Arc<T>) -> Option<Arc<T>>
	where
		T: ?Sized + Send + Sync + 'static,
	{
		let previous = self.inner.insert(TypeId::of::<T>(), Box::new(service))?;
		previous.downcast::<Arc<T>>().ok().map(|prev| *prev)
	}

	pub fn get<T>(&self) -> Option<Arc<T>>
	where
		T: ?Sized + Send + Sync + 'static,
	{
		self.inner.get(&TypeId::of::<T>())?.downcast_ref::<Arc<T>>().cloned()
	}

	/// Like [`get`](Self::get), failing with [`ContainerError::MissingService`].
	pub fn require<T>(&self) -> Result<Arc<T>, ContainerError>
	where
		T: ?Sized + Send + Sync + 'static,
	{
		self.get::<T>().ok_or(ContainerError::MissingService {
			type_name: std::any::type_name::<T>(),
		})
	}

	pub fn remove<T>(&mut self) -> Option<Arc<T>>
	where
		T: ?Sized + Send + Sync + 'static,
	{
		let removed = self.inner.remove(&TypeId::of::<T>())?;
		removed.downcast::<Arc<T>>().ok().map(|svc| *svc)
	}

	pub fn contains<T>(&self) -> bool
	where
		T: ?Sized + 'static,
	{
		self.inner.contains_key(&TypeId::of::<T>())
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}
