//! Ordered XML element tree backing the installer's data.
//!
//! Panels persist their state under their own child of the root element.
//! Rendering goes through `quick-xml`'s writer so names, attributes and text
//! are escaped consistently.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

/// Errors raised while rendering an [`XmlElement`].
#[derive(Debug, Error)]
pub enum XmlError {
	#[error("failed to write XML: {0}")]
	Write(#[from] quick_xml::Error),
	#[error("rendered XML is not UTF-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
	name: String,
	attributes: Vec<(String, String)>,
	text: Option<String>,
	children: Vec<XmlElement>,
}

impl XmlElement {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets `key` to `value`, replacing an existing attribute of that name in place.
	pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.attributes.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.attributes.push((key, value)),
		}
	}

	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = Some(text.into());
	}

	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Appends `child` and returns a mutable reference to it.
	pub fn add_child(&mut self, child: XmlElement) -> &mut XmlElement {
		self.children.push(child);
		let last = self.children.len() - 1;
		&mut self.children[last]
	}

	pub fn children(&self) -> &[XmlElement] {
		&self.children
	}

	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Renders the tree on a single line.
	pub fn to_xml_string(&self) -> Result<String, XmlError> {
		let mut writer = Writer::new(Vec::new());
		self.write_to(&mut writer)?;
		Ok(String::from_utf8(writer.into_inner())?)
	}

	/// Renders the tree indented by two spaces per level.
	pub fn to_pretty_xml_string(&self) -> Result<String, XmlError> {
		let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
		self.write_to(&mut writer)?;
		Ok(String::from_utf8(writer.into_inner())?)
	}

	fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), XmlError> {
		let mut start = BytesStart::new(self.name.as_str());
		for (key, value) in &self.attributes {
			start.push_attribute((key.as_str(), value.as_str()));
		}

		if self.children.is_empty() && self.text.is_none() {
			writer
				.write_event(Event::Empty(start))
				.map_err(quick_xml::Error::from)?;
			return Ok(());
		}

		writer
			.write_event(Event::Start(start))
			.map_err(quick_xml::Error::from)?;
		if let Some(text) = &self.text {
			writer
				.write_event(Event::Text(BytesText::new(text)))
				.map_err(quick_xml::Error::from)?;
		}
		for child in &self.children {
			child.write_to(writer)?;
		}
		writer
			.write_event(Event::End(BytesEnd::new(self.name.as_str())))
			.map_err(quick_xml::Error::from)?;
		Ok(())
	}
}
