//! Keyed index infrastructure.
//!
//! Provides [`RegistryBuilder`] and [`RegistryIndex`] for immutable indexes
//! built once from inventory, plus [`RuntimeRegistry`] for indexes that also
//! accept registrations while the installer runs:
//!
//! ```rust,ignore
//! let index = RegistryBuilder::new("builtin panels")
//!     .extend(defs)
//!     .include_id(false)
//!     .fold_case(true)
//!     .sort_by_priority()
//!     .build();
//! ```
//!
//! A key claimed by two definitions stays with the first one; the loser is
//! logged and remains reachable through its other keys.

use std::borrow::Cow;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::RegistryEntry;

/// Trait for inventory wrapper types to expose their definition.
///
/// ```rust,ignore
/// pub struct PanelReg(pub &'static PanelDef);
/// inventory::collect!(PanelReg);
///
/// impl RegistryReg<PanelDef> for PanelReg {
///     fn def(&self) -> &'static PanelDef { self.0 }
/// }
/// ```
pub trait RegistryReg<T: RegistryEntry + 'static>: 'static {
	/// Returns the static definition reference from this wrapper.
	fn def(&self) -> &'static T;
}

fn normalize(key: &str, fold_case: bool) -> Cow<'_, str> {
	if fold_case && key.chars().any(|c| c.is_uppercase()) {
		Cow::Owned(key.to_lowercase())
	} else {
		Cow::Borrowed(key)
	}
}

/// Indexed collection of registry definitions with O(1) lookup.
pub struct RegistryIndex<T: RegistryEntry + 'static> {
	items: Vec<&'static T>,
	by_key: HashMap<Cow<'static, str>, &'static T>,
	fold_case: bool,
}

impl<T: RegistryEntry + 'static> RegistryIndex<T> {
	/// Looks up a definition by any indexed key.
	///
	/// Case-insensitive when the index was built with
	/// [`fold_case`](RegistryBuilder::fold_case).
	#[inline]
	pub fn get(&self, key: &str) -> Option<&'static T> {
		self.by_key.get(&*normalize(key, self.fold_case)).copied()
	}

	/// Definitions in build order.
	#[inline]
	pub fn items(&self) -> &[&'static T] {
		&self.items
	}

	/// Number of definitions, not keys.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.items.iter().copied()
	}
}

/// Builder for a [`RegistryIndex`].
pub struct RegistryBuilder<T: RegistryEntry + 'static> {
	label: &'static str,
	defs: Vec<&'static T>,
	include_id: bool,
	include_name: bool,
	include_aliases: bool,
	fold_case: bool,
}

impl<T: RegistryEntry + 'static> RegistryBuilder<T> {
	/// Creates a builder; `label` names the index in collision warnings.
	///
	/// Ids, names and aliases are all indexed, case-sensitively, until
	/// configured otherwise.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			include_id: true,
			include_name: true,
			include_aliases: true,
			fold_case: false,
		}
	}

	pub fn include_id(mut self, on: bool) -> Self {
		self.include_id = on;
		self
	}

	pub fn include_name(mut self, on: bool) -> Self {
		self.include_name = on;
		self
	}

	pub fn include_aliases(mut self, on: bool) -> Self {
		self.include_aliases = on;
		self
	}

	/// Sets whether keys are compared case-insensitively.
	pub fn fold_case(mut self, on: bool) -> Self {
		self.fold_case = on;
		self
	}

	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Keeps only definitions accepted by `keep`.
	pub fn filter<F: FnMut(&&'static T) -> bool>(mut self, keep: F) -> Self {
		self.defs.retain(keep);
		self
	}

	/// Orders definitions by priority (highest first), then by id.
	///
	/// Since the first definition keeps a contested key, this decides which
	/// one a shared name resolves to.
	pub fn sort_by_priority(mut self) -> Self {
		self.defs
			.sort_by(|a, b| b.priority().cmp(&a.priority()).then_with(|| a.id().cmp(b.id())));
		self
	}

	/// Builds the index. The same definition given twice is kept once.
	pub fn build(mut self) -> RegistryIndex<T> {
		let mut seen = HashSet::default();
		self.defs.retain(|d| seen.insert(*d as *const T as usize));

		let mut by_key = HashMap::default();
		for &def in &self.defs {
			let meta = def.meta();
			if self.include_id {
				self.insert_key(&mut by_key, meta.id, def);
			}
			if self.include_name {
				self.insert_key(&mut by_key, meta.name, def);
			}
			if self.include_aliases {
				for &alias in meta.aliases {
					self.insert_key(&mut by_key, alias, def);
				}
			}
		}

		RegistryIndex {
			items: self.defs,
			by_key,
			fold_case: self.fold_case,
		}
	}

	fn insert_key(&self, map: &mut HashMap<Cow<'static, str>, &'static T>, key: &'static str, def: &'static T) {
		let key = normalize(key, self.fold_case);
		match map.get(&*key) {
			Some(&existing) if std::ptr::eq(existing, def) => {}
			Some(&existing) => {
				tracing::warn!(
					registry = self.label,
					key = %key,
					kept = existing.id(),
					dropped = def.id(),
					"Duplicate registry key"
				);
			}
			None => {
				map.insert(key, def);
			}
		}
	}
}

/// An immutable [`RegistryIndex`] plus definitions registered at runtime.
///
/// Runtime additions are indexed by id only and never displace a known id.
pub struct RuntimeRegistry<T: RegistryEntry + 'static> {
	label: &'static str,
	base: RegistryIndex<T>,
	extras: RwLock<Extras<T>>,
}

struct Extras<T: 'static> {
	items: Vec<&'static T>,
	by_id: HashMap<&'static str, &'static T>,
}

impl<T: RegistryEntry + 'static> RuntimeRegistry<T> {
	pub fn new(label: &'static str, base: RegistryIndex<T>) -> Self {
		Self {
			label,
			base,
			extras: RwLock::new(Extras {
				items: Vec::new(),
				by_id: HashMap::default(),
			}),
		}
	}

	/// Looks up a definition by id, in the base index then the extras.
	pub fn get(&self, key: &str) -> Option<&'static T> {
		self.base
			.get(key)
			.or_else(|| self.extras.read().by_id.get(key).copied())
	}

	/// Registers a definition at runtime.
	///
	/// Returns `false` if the definition is already present or its id is taken.
	pub fn register(&self, def: &'static T) -> bool {
		if self.base.items().iter().any(|&b| std::ptr::eq(b, def)) {
			return false;
		}

		let mut extras = self.extras.write();
		if extras.items.iter().any(|&e| std::ptr::eq(e, def)) {
			return false;
		}

		let id = def.id();
		if extras.by_id.contains_key(id) || self.base.get(id).is_some() {
			tracing::warn!(registry = self.label, id, "Ignoring runtime registration of taken id");
			return false;
		}

		extras.items.push(def);
		extras.by_id.insert(id, def);
		true
	}

	pub fn len(&self) -> usize {
		self.base.len() + self.extras.read().items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.base.is_empty() && self.extras.read().items.is_empty()
	}

	/// Snapshot of all definitions, base first.
	pub fn all(&self) -> Vec<&'static T> {
		let mut items = self.base.items().to_vec();
		items.extend(self.extras.read().items.iter().copied());
		items
	}
}
