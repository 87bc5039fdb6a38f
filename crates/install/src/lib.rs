//! Install-data model and the contracts panels are wired against.
//!
//! This crate holds the types shared by the panel catalog, the container and
//! the panel manager:
//! - [`PanelDescriptor`]: one declarative entry of the ordered panel list
//! - [`InstallData`]: descriptors, the instantiated panel list and the XML data tree
//! - [`Panel`]: the capability set every live panel implements
//! - [`PanelAction`] / [`ActionFactory`]: lifecycle hooks attached to panels
//! - [`DataValidator`] / [`ValidatorFactory`]: per-panel data validation
//! - [`OsConstraint`] / [`OsMatcher`]: operating-system gating of descriptors
//! - [`XmlElement`]: the installer's XML data tree
//! - [`Unpacker`], [`UiHandler`], [`UiProgressHandler`]: UI and unpacking seams

mod action;
mod data;
mod descriptor;
mod os;
mod panel;
mod ui;
mod validator;
mod xml;

pub use action::{ActionConfig, ActionError, ActionFactory, ActionRegistry, PanelAction};
pub use data::{InstallData, ROOT_ELEMENT};
pub use descriptor::PanelDescriptor;
pub use os::{HostOs, OsConstraint, OsFamily, OsMatcher};
pub use panel::{Panel, PanelHandle, PanelState};
pub use ui::{UiHandler, UiProgressHandler, Unpacker};
pub use validator::{DataValidator, ValidationStatus, ValidatorError, ValidatorFactory, ValidatorRegistry};
pub use xml::{XmlElement, XmlError};
