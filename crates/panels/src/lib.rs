//! Panel loading for the installer.
//!
//! [`PanelManager`] turns the ordered panel descriptors of an [`InstallData`]
//! into live panels:
//! - [`load_panels_in_container`](PanelManager::load_panels_in_container)
//!   resolves each descriptor that applies to the host and registers its
//!   panel type with the [`Container`];
//! - [`instantiate_panels`](PanelManager::instantiate_panels) builds and wires
//!   the instances, runs pre-construction actions and records the
//!   [`VisibilityMap`] and the XML skeleton;
//! - the visibility queries then answer navigation questions by raw index.
//!
//! [`InstallData`]: hatch_install::InstallData
//! [`Container`]: hatch_container::Container

pub mod builtins;
mod config;
mod error;
mod factories;
mod instantiate;
mod manager;
mod registrar;
mod visibility;
mod xml_context;

pub use config::{DuplicatePanelPolicy, LoaderConfig};
pub use error::{ConfigError, PanelError};
pub use factories::Factories;
pub use manager::PanelManager;
pub use visibility::VisibilityMap;
pub use xml_context::append_panel_root;
