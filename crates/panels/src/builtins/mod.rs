//! Panels bundled with the installer.
//!
//! Each panel is registered under `hatch.installer.panels.<path>` and is
//! resolvable by its simple name. They carry no behaviour beyond the shared
//! [`PanelState`](hatch_install::PanelState); rendering lives in the frontend.

use std::sync::LazyLock;

use hatch_catalog::{PanelCatalog, PanelDef};

mod basic;
pub mod finish;
pub mod userinput;

pub use basic::{HelloPanel, InfoPanel, InstallPanel, LicencePanel, SummaryPanel, TargetPanel};

/// Every bundled panel definition.
pub static BUILTIN_PANELS: [&PanelDef; 9] = [
	&basic::PANEL_HelloPanel,
	&basic::PANEL_InfoPanel,
	&basic::PANEL_LicencePanel,
	&basic::PANEL_TargetPanel,
	&basic::PANEL_InstallPanel,
	&basic::PANEL_SummaryPanel,
	&finish::PANEL_FinishPanel,
	&finish::PANEL_SimpleFinishPanel,
	&userinput::PANEL_UserInputPanel,
];

static CATALOG: LazyLock<PanelCatalog> =
	LazyLock::new(|| PanelCatalog::from_inventory_with(BUILTIN_PANELS.iter().copied()));

/// Catalog of the bundled panels plus every other `panel!` registration.
pub fn catalog() -> &'static PanelCatalog {
	&CATALOG
}

/// Declares a panel type whose capabilities all come from its [`PanelState`](hatch_install::PanelState).
macro_rules! state_panel {
	($(#[$attr:meta])* $name:ident) => {
		$(#[$attr])*
		#[derive(Debug, Default)]
		pub struct $name {
			state: ::hatch_install::PanelState,
		}

		impl ::hatch_install::Panel for $name {
			fn state(&self) -> &::hatch_install::PanelState {
				&self.state
			}

			fn state_mut(&mut self) -> &mut ::hatch_install::PanelState {
				&mut self.state
			}
		}
	};
}

pub(crate) use state_panel;
