//! Closing panels.

use hatch_catalog::{construct_default, panel};

use super::state_panel;

state_panel!(
	/// Reports the installation outcome and offers to save an unattended-install script.
	FinishPanel
);
state_panel!(
	/// Reports the installation outcome.
	SimpleFinishPanel
);

panel!(FinishPanel, {
	path: "finish.FinishPanel",
	description: "Installation outcome with script export",
}, construct: construct_default::<FinishPanel>);

panel!(SimpleFinishPanel, {
	path: "finish.SimpleFinishPanel",
	description: "Installation outcome",
}, construct: construct_default::<SimpleFinishPanel>);
