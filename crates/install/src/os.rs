//! Operating-system constraints attached to panel descriptors.
//!
//! A descriptor with no constraints is shown everywhere. Otherwise it
//! survives when at least one of its constraints matches the host.

use serde::{Deserialize, Serialize};

/// Broad operating-system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
	Windows,
	Unix,
	Mac,
}

impl OsFamily {
	/// Whether a constraint on `self` accepts a host of family `host`.
	///
	/// Mac hosts are unix hosts as well.
	pub fn accepts(self, host: OsFamily) -> bool {
		self == host || (self == OsFamily::Unix && host == OsFamily::Mac)
	}
}

/// One host predicate. Every field that is set must match the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsConstraint {
	pub family: Option<OsFamily>,
	pub name: Option<String>,
	pub arch: Option<String>,
	pub version: Option<String>,
}

impl OsConstraint {
	pub fn family(family: OsFamily) -> Self {
		Self {
			family: Some(family),
			..Self::default()
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
		self.arch = Some(arch.into());
		self
	}
}

/// Decides whether descriptors apply to the running host.
pub trait OsMatcher: Send + Sync {
	/// Returns true if `constraint` matches the host.
	fn matches(&self, constraint: &OsConstraint) -> bool;

	/// Returns true if `constraints` is empty or any entry matches the host.
	fn one_matches_current_host(&self, constraints: &[OsConstraint]) -> bool {
		constraints.is_empty() || constraints.iter().any(|c| self.matches(c))
	}
}

/// Description of the host panels are evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostOs {
	pub family: OsFamily,
	pub name: String,
	pub arch: String,
	#[serde(default)]
	pub version: Option<String>,
}

impl HostOs {
	/// Host the binary was compiled for.
	pub fn current() -> Self {
		let family = match std::env::consts::OS {
			"windows" => OsFamily::Windows,
			"macos" | "ios" => OsFamily::Mac,
			_ => OsFamily::Unix,
		};
		Self {
			family,
			name: std::env::consts::OS.to_string(),
			arch: std::env::consts::ARCH.to_string(),
			version: None,
		}
	}

	pub fn new(family: OsFamily, name: impl Into<String>, arch: impl Into<String>) -> Self {
		Self {
			family,
			name: name.into(),
			arch: arch.into(),
			version: None,
		}
	}
}

fn field_matches(expected: Option<&str>, actual: Option<&str>) -> bool {
	match (expected, actual) {
		(None, _) => true,
		(Some(expected), Some(actual)) => expected.eq_ignore_ascii_case(actual),
		(Some(_), None) => false,
	}
}

impl OsMatcher for HostOs {
	fn matches(&self, constraint: &OsConstraint) -> bool {
		constraint.family.is_none_or(|f| f.accepts(self.family))
			&& field_matches(constraint.name.as_deref(), Some(&self.name))
			&& field_matches(constraint.arch.as_deref(), Some(&self.arch))
			&& field_matches(constraint.version.as_deref(), self.version.as_deref())
	}
}
