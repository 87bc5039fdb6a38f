//! Panel catalog infrastructure.
//!
//! This crate provides:
//! - [`RegistryMeta`] / [`RegistryEntry`]: common metadata for registered definitions
//! - [`RegistryBuilder`] / [`RegistryIndex`] / [`RuntimeRegistry`]: keyed indexes over them
//! - [`PanelDef`] and the [`panel!`] macro: compile-time panel registration
//! - [`PanelCatalog`]: the eager short-name and qualified-name indexes
//! - [`ClassResolver`]: maps a descriptor's class name to a [`PanelKey`]

mod catalog;
mod def;
mod index;
mod resolver;

#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use paste;

pub use catalog::PanelCatalog;
pub use def::{PanelConstructor, PanelDef, PanelKey, PanelReg, construct_default};
pub use index::{RegistryBuilder, RegistryIndex, RegistryReg, RuntimeRegistry};
pub use resolver::{ClassResolver, ResolveError};

/// Package prefix of the built-in panels.
///
/// Built-in panels are registered as `<BUILTIN_PACKAGE>.<path>`, where the
/// path may itself be dotted (`finish.FinishPanel`).
pub const BUILTIN_PACKAGE: &str = "hatch.installer.panels";

/// Represents where a registry item was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Bundled with the installer under [`BUILTIN_PACKAGE`].
	Builtin,
	/// Defined in a library crate.
	Crate(&'static str),
	/// Registered at runtime.
	Runtime,
}

impl core::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

/// Common metadata for registry items.
#[derive(Debug, Clone, Copy)]
pub struct RegistryMeta {
	/// Fully-qualified dotted name (e.g. "hatch.installer.panels.HelloPanel").
	pub id: &'static str,
	/// Simple name, the last segment of `id`.
	pub name: &'static str,
	/// Alternative simple names for lookup.
	pub aliases: &'static [&'static str],
	/// Description for help text.
	pub description: &'static str,
	/// Decides which built-in keeps a shared simple name (higher wins).
	pub priority: i16,
	/// Where this item was defined.
	pub source: RegistrySource,
}

impl RegistryMeta {
	/// Creates a minimal RegistryMeta with defaults for optional fields.
	pub const fn minimal(id: &'static str, name: &'static str, description: &'static str) -> Self {
		Self {
			id,
			name,
			aliases: &[],
			description,
			priority: 0,
			source: RegistrySource::Builtin,
		}
	}
}

/// Trait for accessing registry metadata from definition types.
pub trait RegistryEntry {
	/// Returns the metadata struct for this registry item.
	fn meta(&self) -> &RegistryMeta;

	/// Returns the fully-qualified identifier.
	fn id(&self) -> &'static str {
		self.meta().id
	}

	/// Returns the simple name.
	fn name(&self) -> &'static str {
		self.meta().name
	}

	/// Returns alternative names for lookup.
	fn aliases(&self) -> &'static [&'static str] {
		self.meta().aliases
	}

	/// Returns the description.
	fn description(&self) -> &'static str {
		self.meta().description
	}

	/// Returns the lookup priority.
	fn priority(&self) -> i16 {
		self.meta().priority
	}

	/// Returns where this item was defined.
	fn source(&self) -> RegistrySource {
		self.meta().source
	}
}

/// Implements [`RegistryEntry`] for a type with a `meta: RegistryMeta` field.
#[macro_export]
macro_rules! impl_registry_entry {
	($type:ty) => {
		impl $crate::RegistryEntry for $type {
			fn meta(&self) -> &$crate::RegistryMeta {
				&self.meta
			}
		}
	};
}

/// Typed handle to a registry definition.
///
/// Zero-cost wrapper around a static reference. Two keys are equal when they
/// point at the same definition.
pub struct Key<T: 'static>(&'static T);

impl<T: 'static> Copy for Key<T> {}

impl<T: 'static> Clone for Key<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Key<T> {
	/// Creates a new typed handle from a static reference.
	pub const fn new(def: &'static T) -> Self {
		Self(def)
	}

	/// Returns the underlying definition.
	pub const fn def(self) -> &'static T {
		self.0
	}
}

impl<T: RegistryEntry> Key<T> {
	/// Returns the simple name of the referenced definition.
	pub fn name(self) -> &'static str {
		self.0.name()
	}

	/// Returns the qualified id of the referenced definition.
	pub fn id(self) -> &'static str {
		self.0.id()
	}
}

impl<T> PartialEq for Key<T> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.0, other.0)
	}
}

impl<T> Eq for Key<T> {}

impl<T> core::hash::Hash for Key<T> {
	fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
		std::ptr::hash(self.0, state);
	}
}

impl<T: RegistryEntry> core::fmt::Debug for Key<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("Key").field(&self.0.id()).finish()
	}
}
