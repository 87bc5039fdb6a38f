//! UI handler and unpacker seams.
//!
//! The rendering layer and the unpacker live outside this workspace; these
//! traits are what the panel manager hands around.

/// Receives user-facing messages from installer components.
pub trait UiHandler: Send + Sync {
	fn emit_notification(&self, message: &str);

	/// Returns true if the user chose to continue.
	fn emit_warning(&self, title: &str, message: &str) -> bool;

	fn emit_error(&self, title: &str, message: &str);
}

/// [`UiHandler`] that also tracks the progress of long-running work.
pub trait UiProgressHandler: UiHandler {
	fn start_action(&self, name: &str, steps: usize);

	fn next_step(&self, name: &str, step: usize, max: usize);

	fn stop_action(&self);
}

/// Extracts the installation payload.
pub trait Unpacker: Send + Sync {
	fn run(&self);

	/// Requests the unpacker to stop. Returns true if it honoured the request.
	fn interrupt(&self) -> bool;
}
