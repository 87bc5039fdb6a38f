use hatch_catalog::{construct_default, panel};

use super::state_panel;

state_panel!(
	/// Collects installer variables from user-defined fields.
	UserInputPanel
);

panel!(UserInputPanel, {
	path: "userinput.UserInputPanel",
	description: "User-defined input fields",
}, construct: construct_default::<UserInputPanel>);
