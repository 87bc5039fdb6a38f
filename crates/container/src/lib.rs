//! Component container for installer panels.
//!
//! The [`Container`] owns every panel instance. Panel types are registered
//! up front by [`PanelKey`](hatch_catalog::PanelKey); instances are built on
//! first request and shared afterwards. Alongside components it carries typed
//! service slots (the progress handler, for instance) and the lazily built
//! [`Unpacker`](hatch_install::Unpacker).

mod container;
mod error;
mod services;

pub use container::{Container, UnpackerFactory};
pub use error::ContainerError;
pub use services::ServiceMap;
