use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
	/// The panel type was already registered.
	#[error("component already registered: {id}")]
	DuplicateComponent { id: &'static str },
	/// An instance was requested for a type that was never registered.
	#[error("component not registered: {id}")]
	NotRegistered { id: &'static str },
	/// No service of the requested type was provided.
	#[error("no service registered for {type_name}")]
	MissingService { type_name: &'static str },
	/// No unpacker factory was installed.
	#[error("no unpacker factory installed")]
	NoUnpacker,
}
