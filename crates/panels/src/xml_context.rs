use hatch_install::{PanelDescriptor, XmlElement};

/// Appends the XML sub-tree a panel persists its state under.
///
/// The element is named after the descriptor's class name, dots included,
/// and carries the panel id as `id` when one is declared.
pub fn append_panel_root<'a>(root: &'a mut XmlElement, descriptor: &PanelDescriptor) -> &'a mut XmlElement {
	let mut element = XmlElement::new(&descriptor.class_name);
	if let Some(id) = &descriptor.panel_id {
		element.set_attribute("id", id);
	}
	root.add_child(element)
}
