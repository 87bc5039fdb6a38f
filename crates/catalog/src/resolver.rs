//! Resolution of descriptor class names to panel definitions.
//!
//! A name is first matched, case-insensitively, against the simple names of
//! the built-in panels. Failing that, a dotted name is looked up as a
//! qualified id verbatim, and a plain name as `<BUILTIN_PACKAGE>.<name>`.

use std::borrow::Cow;

use thiserror::Error;

use crate::{BUILTIN_PACKAGE, Key, PanelCatalog, PanelKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
	/// Neither a built-in simple name nor a qualified id matched.
	#[error("panel class not found: {name}")]
	ClassNotFound { name: String },
}

/// Maps descriptor class names to panel definitions.
#[derive(Clone, Copy)]
pub struct ClassResolver<'c> {
	catalog: &'c PanelCatalog,
}

impl ClassResolver<'static> {
	/// Resolver over [`PanelCatalog::global`].
	pub fn global() -> Self {
		Self::new(PanelCatalog::global())
	}
}

impl<'c> ClassResolver<'c> {
	pub fn new(catalog: &'c PanelCatalog) -> Self {
		Self { catalog }
	}

	pub fn catalog(&self) -> &'c PanelCatalog {
		self.catalog
	}

	pub fn resolve(&self, name: &str) -> Result<PanelKey, ResolveError> {
		if let Some(def) = self.catalog.builtin(name) {
			tracing::trace!(name, id = def.meta.id, "Resolved built-in panel");
			return Ok(Key::new(def));
		}

		let qualified: Cow<'_, str> = if name.contains('.') {
			Cow::Borrowed(name)
		} else {
			Cow::Owned(format!("{BUILTIN_PACKAGE}.{name}"))
		};

		match self.catalog.qualified(&qualified) {
			Some(def) => {
				tracing::trace!(name, id = def.meta.id, "Resolved panel by qualified name");
				Ok(Key::new(def))
			}
			None => Err(ResolveError::ClassNotFound {
				name: name.to_string(),
			}),
		}
	}
}
