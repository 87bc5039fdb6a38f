use rustc_hash::FxHashMap as HashMap;
use thiserror::Error;

use crate::data::InstallData;

/// Outcome of validating a panel's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
	Ok,
	Warning,
	Error,
}

/// Validates the data a panel collected before the user may leave it.
pub trait DataValidator: Send {
	fn validate(&self, data: &InstallData) -> ValidationStatus;

	/// Message resource shown when validation fails.
	fn error_message_id(&self) -> &str;

	/// Message resource shown when validation warns.
	fn warning_message_id(&self) -> &str {
		self.error_message_id()
	}

	/// Answer assumed for warnings in unattended runs.
	fn default_answer(&self) -> bool {
		true
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
	#[error("unknown data validator: {0}")]
	NotFound(String),
}

/// Creates validators from their identifiers.
pub trait ValidatorFactory: Send + Sync {
	fn create(&self, id: &str) -> Result<Box<dyn DataValidator>, ValidatorError>;
}

type ValidatorCtor = Box<dyn Fn() -> Box<dyn DataValidator> + Send + Sync>;

/// Name-keyed [`ValidatorFactory`].
#[derive(Default)]
pub struct ValidatorRegistry {
	ctors: HashMap<String, ValidatorCtor>,
}

impl ValidatorRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a constructor under `id`. Returns `false` if `id` is taken.
	pub fn register<F>(&mut self, id: impl Into<String>, ctor: F) -> bool
	where
		F: Fn() -> Box<dyn DataValidator> + Send + Sync + 'static,
	{
		let id = id.into();
		if self.ctors.contains_key(&id) {
			return false;
		}
		self.ctors.insert(id, Box::new(ctor));
		true
	}
}

impl ValidatorFactory for ValidatorRegistry {
	fn create(&self, id: &str) -> Result<Box<dyn DataValidator>, ValidatorError> {
		self.ctors
			.get(id)
			.map(|ctor| ctor())
			.ok_or_else(|| ValidatorError::NotFound(id.to_string()))
	}
}
