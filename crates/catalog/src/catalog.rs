//! Eagerly built panel lookup tables.
//!
//! # Role
//!
//! The catalog answers the two questions class resolution asks:
//! - which built-in panel has this simple name (case-insensitive)?
//! - which panel has this fully-qualified id?
//!
//! # Invariants
//!
//! - Only [`RegistrySource::Builtin`] definitions under [`BUILTIN_PACKAGE`] are
//!   reachable by simple name.
//! - Simple-name ties go to the higher [`priority`](RegistryEntry::priority),
//!   then to the smaller qualified id.
//! - Qualified ids are unique. A second definition claiming a known id, from
//!   inventory or at runtime, is logged and ignored.

use std::sync::LazyLock;

use crate::{
	BUILTIN_PACKAGE, PanelDef, PanelReg, RegistryBuilder, RegistryEntry, RegistryIndex, RegistryReg,
	RegistrySource, RuntimeRegistry,
};

static GLOBAL: LazyLock<PanelCatalog> = LazyLock::new(PanelCatalog::from_inventory);

/// Lookup tables over every known panel definition.
pub struct PanelCatalog {
	builtins: RegistryIndex<PanelDef>,
	qualified: RuntimeRegistry<PanelDef>,
}

impl PanelCatalog {
	/// Process-wide catalog built from every `panel!` registration linked in.
	pub fn global() -> &'static PanelCatalog {
		&GLOBAL
	}

	/// Builds a catalog from the inventory.
	pub fn from_inventory() -> Self {
		Self::from_inventory_with(std::iter::empty())
	}

	/// Builds a catalog from the inventory plus `defs`.
	///
	/// Naming definitions explicitly keeps them linked even when nothing else
	/// in their crate is referenced. Definitions present in both are kept once.
	pub fn from_inventory_with<I: IntoIterator<Item = &'static PanelDef>>(defs: I) -> Self {
		let mut all: Vec<&'static PanelDef> = defs.into_iter().collect();
		for reg in inventory::iter::<PanelReg> {
			all.push(reg.def());
		}
		Self::from_defs(all)
	}

	/// Builds a catalog from an explicit set of definitions.
	pub fn from_defs<I: IntoIterator<Item = &'static PanelDef>>(defs: I) -> Self {
		let mut defs: Vec<&'static PanelDef> = defs.into_iter().collect();
		defs.sort_by(|a, b| a.id().cmp(b.id()));
		defs.dedup_by(|a, b| std::ptr::eq(*a, *b));

		let builtins = RegistryBuilder::new("builtin panels")
			.extend(defs.iter().copied())
			.filter(|def| def.source() == RegistrySource::Builtin && def.relative_path(BUILTIN_PACKAGE).is_some())
			.include_id(false)
			.fold_case(true)
			.sort_by_priority()
			.build();

		let qualified = RegistryBuilder::new("panels")
			.extend(defs)
			.include_name(false)
			.include_aliases(false)
			.build();

		tracing::debug!(
			builtins = builtins.len(),
			panels = qualified.len(),
			"Built panel catalog"
		);

		Self {
			builtins,
			qualified: RuntimeRegistry::new("panels", qualified),
		}
	}

	/// Built-in panel whose simple name or alias equals `name`, ignoring case.
	pub fn builtin(&self, name: &str) -> Option<&'static PanelDef> {
		self.builtins.get(name)
	}

	/// Panel registered under the qualified id `id` (exact match).
	pub fn qualified(&self, id: &str) -> Option<&'static PanelDef> {
		self.qualified.get(id)
	}

	/// Makes `def` resolvable by its qualified id.
	///
	/// Returns `false` if the definition or its id is already known.
	pub fn register(&self, def: &'static PanelDef) -> bool {
		let added = self.qualified.register(def);
		if added {
			tracing::debug!(id = def.id(), "Registered panel");
		}
		added
	}

	/// Built-in panels, by descending priority then qualified id.
	pub fn builtins(&self) -> impl Iterator<Item = &'static PanelDef> + '_ {
		self.builtins.iter()
	}

	/// All known panels (inventory followed by runtime registrations).
	pub fn all(&self) -> Vec<&'static PanelDef> {
		self.qualified.all()
	}

	pub fn len(&self) -> usize {
		self.qualified.len()
	}

	pub fn is_empty(&self) -> bool {
		self.qualified.is_empty()
	}
}
