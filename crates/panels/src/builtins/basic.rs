use hatch_catalog::{construct_default, panel};

use super::state_panel;

state_panel!(
	/// Welcome screen.
	HelloPanel
);
state_panel!(
	/// Shows a read-only information text.
	InfoPanel
);
state_panel!(
	/// Asks the user to accept the licence.
	LicencePanel
);
state_panel!(
	/// Lets the user pick the installation path.
	TargetPanel
);
state_panel!(
	/// Reports unpacking progress.
	InstallPanel
);
state_panel!(
	/// Summarises the choices made before installing.
	SummaryPanel
);

panel!(HelloPanel, {
	path: "HelloPanel",
	description: "Welcome screen",
}, construct: construct_default::<HelloPanel>);

panel!(InfoPanel, {
	path: "InfoPanel",
	description: "Read-only information text",
}, construct: construct_default::<InfoPanel>);

panel!(LicencePanel, {
	path: "LicencePanel",
	description: "Licence acceptance",
	aliases: &["LicensePanel"],
}, construct: construct_default::<LicencePanel>);

panel!(TargetPanel, {
	path: "TargetPanel",
	description: "Installation path selection",
}, construct: construct_default::<TargetPanel>);

panel!(InstallPanel, {
	path: "InstallPanel",
	description: "Unpacking progress",
}, construct: construct_default::<InstallPanel>);

panel!(SummaryPanel, {
	path: "SummaryPanel",
	description: "Summary of the installation choices",
}, construct: construct_default::<SummaryPanel>);
