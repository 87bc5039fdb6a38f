use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hatch_container::{Container, ContainerError};
use hatch_install::{InstallData, UiHandler, UiProgressHandler, Unpacker};
use hatch_panels::{PanelError, PanelManager};
use parking_lot::Mutex;

use crate::common::{factories, linux};

/// Progress handler journaling the steps it is told about.
#[derive(Default)]
struct Progress {
	label: &'static str,
	steps: Mutex<Vec<String>>,
}

impl UiHandler for Progress {
	fn emit_notification(&self, _message: &str) {}

	fn emit_warning(&self, _title: &str, _message: &str) -> bool {
		true
	}

	fn emit_error(&self, _title: &str, _message: &str) {}
}

impl UiProgressHandler for Progress {
	fn start_action(&self, name: &str, steps: usize) {
		self.steps.lock().push(format!("{} start {name} {steps}", self.label));
	}

	fn next_step(&self, name: &str, step: usize, max: usize) {
		self.steps.lock().push(format!("{} step {name} {step}/{max}", self.label));
	}

	fn stop_action(&self) {
		self.steps.lock().push(format!("{} stop", self.label));
	}
}

struct PayloadUnpacker {
	handler: Arc<dyn UiProgressHandler>,
}

impl Unpacker for PayloadUnpacker {
	fn run(&self) {
		self.handler.start_action("unpack", 2);
		self.handler.next_step("unpack", 1, 2);
		self.handler.next_step("unpack", 2, 2);
		self.handler.stop_action();
	}

	fn interrupt(&self) -> bool {
		false
	}
}

fn container(builds: Arc<AtomicUsize>) -> Container {
	let mut container = Container::new();
	container.set_unpacker_factory(move |container| {
		builds.fetch_add(1, Ordering::SeqCst);
		let handler = container.service::<dyn UiProgressHandler>()?;
		Ok(Arc::new(PayloadUnpacker { handler }) as Arc<dyn Unpacker>)
	});
	container
}

#[test]
fn test_unpacker_receives_the_progress_handler() {
	let builds = Arc::new(AtomicUsize::new(0));
	let mut manager =
		PanelManager::new(InstallData::default(), container(builds.clone()), factories()).with_host(linux());

	let first = Arc::new(Progress {
		label: "first",
		..Progress::default()
	});
	let unpacker = manager.get_unpacker(first.clone()).unwrap();
	unpacker.run();
	assert_eq!(
		*first.steps.lock(),
		["first start unpack 2", "first step unpack 1/2", "first step unpack 2/2", "first stop"]
	);

	// Later calls reuse the unpacker built with the first handler.
	let second = Arc::new(Progress {
		label: "second",
		..Progress::default()
	});
	let again = manager.get_unpacker(second.clone()).unwrap();
	assert!(Arc::ptr_eq(&unpacker, &again));
	assert_eq!(builds.load(Ordering::SeqCst), 1);
	assert!(second.steps.lock().is_empty());

	// The container's handler slot holds the latest handler.
	let installed = manager.container().service::<dyn UiProgressHandler>().unwrap();
	installed.stop_action();
	assert_eq!(*second.steps.lock(), ["second stop"]);
}

#[test]
fn test_missing_unpacker_factory_is_reported() {
	let mut manager =
		PanelManager::new(InstallData::default(), Container::new(), factories()).with_host(linux());

	assert_eq!(
		manager.get_unpacker(Arc::new(Progress::default())).err(),
		Some(PanelError::Container(ContainerError::NoUnpacker))
	);
	assert!(manager.container().services().contains::<dyn UiProgressHandler>());
}
