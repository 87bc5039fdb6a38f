//! Panel definitions and compile-time registration.
//!
//! Each panel implementation declares a static [`PanelDef`] and submits it via
//! `inventory`. The [`panel!`](crate::panel) macro does both:
//!
//! ```rust,ignore
//! panel!(FinishPanel, {
//!     path: "finish.FinishPanel",
//!     description: "Reports the installation outcome",
//! }, construct: construct_default::<FinishPanel>);
//! ```

use hatch_install::Panel;

use crate::{Key, RegistryMeta, RegistryReg, impl_registry_entry};

/// Function building a fresh panel instance.
pub type PanelConstructor = fn() -> Box<dyn Panel>;

/// A registered panel implementation: the "class" descriptors resolve to.
pub struct PanelDef {
	/// Common registry metadata.
	pub meta: RegistryMeta,
	/// Builds a new instance of this panel.
	pub construct: PanelConstructor,
}

impl PanelDef {
	pub const fn new(meta: RegistryMeta, construct: PanelConstructor) -> Self {
		Self { meta, construct }
	}

	/// Qualified id with the package prefix stripped, if it starts with `package`.
	pub fn relative_path(&self, package: &str) -> Option<&'static str> {
		self.meta
			.id
			.strip_prefix(package)
			.and_then(|rest| rest.strip_prefix('.'))
	}
}

impl core::fmt::Debug for PanelDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PanelDef")
			.field("id", &self.meta.id)
			.field("source", &self.meta.source)
			.finish()
	}
}

impl_registry_entry!(PanelDef);

/// [`PanelConstructor`] for panels built from their `Default` value.
pub fn construct_default<P: Panel + Default + 'static>() -> Box<dyn Panel> {
	Box::new(P::default())
}

/// Typed handle to a panel definition.
pub type PanelKey = Key<PanelDef>;

/// Registry wrapper for panel definitions.
pub struct PanelReg(pub &'static PanelDef);
inventory::collect!(PanelReg);

impl RegistryReg<PanelDef> for PanelReg {
	fn def(&self) -> &'static PanelDef {
		self.0
	}
}

/// Registers a panel implementation via `inventory`.
///
/// Built-in panels give their `path` below [`BUILTIN_PACKAGE`](crate::BUILTIN_PACKAGE);
/// other panels give a fully-qualified `id`. The identifier must be the last
/// path segment.
#[macro_export]
macro_rules! panel {
	($name:ident, {
		path: $path:literal,
		description: $desc:expr
		$(, aliases: $aliases:expr)?
		$(, priority: $priority:expr)?
		$(,)?
	}, construct: $ctor:expr) => {
		$crate::__panel_def!(
			$name,
			concat!("hatch.installer.panels.", $path),
			$desc,
			$crate::RegistrySource::Builtin,
			$crate::__panel_opt!($({$aliases})?, &[]),
			$crate::__panel_opt!($({$priority})?, 0),
			$ctor
		);
	};
	($name:ident, {
		id: $id:literal,
		description: $desc:expr
		$(, aliases: $aliases:expr)?
		$(, priority: $priority:expr)?
		$(,)?
	}, construct: $ctor:expr) => {
		$crate::__panel_def!(
			$name,
			$id,
			$desc,
			$crate::RegistrySource::Crate(env!("CARGO_PKG_NAME")),
			$crate::__panel_opt!($({$aliases})?, &[]),
			$crate::__panel_opt!($({$priority})?, 0),
			$ctor
		);
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __panel_def {
	($name:ident, $id:expr, $desc:expr, $source:expr, $aliases:expr, $priority:expr, $ctor:expr) => {
		$crate::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<PANEL_ $name>]: $crate::PanelDef = $crate::PanelDef::new(
				$crate::RegistryMeta {
					id: $id,
					name: stringify!($name),
					aliases: $aliases,
					description: $desc,
					priority: $priority,
					source: $source,
				},
				$ctor,
			);

			$crate::inventory::submit! { $crate::PanelReg(&[<PANEL_ $name>]) }
		}
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __panel_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
