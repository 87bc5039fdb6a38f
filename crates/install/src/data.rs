use std::collections::BTreeMap;

use crate::descriptor::PanelDescriptor;
use crate::panel::PanelHandle;
use crate::xml::XmlElement;

/// Name of the installer's XML data root.
pub const ROOT_ELEMENT: &str = "installation";

/// Installer state shared by startup and the navigator.
///
/// Carries the ordered panel descriptors, the panels instantiated from them
/// (same order, OS-filtered), the XML data tree and installer variables.
pub struct InstallData {
	panels_order: Vec<PanelDescriptor>,
	panels: Vec<PanelHandle>,
	xml_data: XmlElement,
	variables: BTreeMap<String, String>,
}

impl Default for InstallData {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl InstallData {
	pub fn new(panels_order: Vec<PanelDescriptor>) -> Self {
		Self {
			panels_order,
			panels: Vec::new(),
			xml_data: XmlElement::new(ROOT_ELEMENT),
			variables: BTreeMap::new(),
		}
	}

	/// Declared panels, in flow order.
	pub fn panels_order(&self) -> &[PanelDescriptor] {
		&self.panels_order
	}

	/// Instantiated panels, in flow order.
	pub fn panels(&self) -> &[PanelHandle] {
		&self.panels
	}

	pub fn panels_mut(&mut self) -> &mut Vec<PanelHandle> {
		&mut self.panels
	}

	pub fn xml_data(&self) -> &XmlElement {
		&self.xml_data
	}

	pub fn xml_data_mut(&mut self) -> &mut XmlElement {
		&mut self.xml_data
	}

	pub fn variable(&self, name: &str) -> Option<&str> {
		self.variables.get(name).map(String::as_str)
	}

	/// Sets a variable, returning its previous value.
	pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.variables.insert(name.into(), value.into())
	}

	pub fn variables(&self) -> &BTreeMap<String, String> {
		&self.variables
	}
}

impl core::fmt::Debug for InstallData {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("InstallData")
			.field("panels_order", &self.panels_order.len())
			.field("panels", &self.panels.len())
			.field("xml_data", &self.xml_data.name())
			.field("variables", &self.variables)
			.finish()
	}
}
