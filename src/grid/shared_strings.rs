//! Shared string table parsing.

use crate::error::{Error, Result};

/// Ordered string pool referenced by index from worksheet cells.
///
/// Built once per container; an absent shared-string stream yields an
/// empty table rather than an error.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    strings: Vec<String>,
}

impl SharedStrings {
    /// Parse the shared string table from XML content.
    ///
    /// Each `<si>` entry contributes one string: the text of its first
    /// `<t>` node. Entries with no text node yield the empty string, so
    /// table positions stay aligned with declaration order.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut in_si = false;
        let mut in_text = false;
        let mut entry: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        entry = None;
                    }
                    b"t" if in_si && entry.is_none() => {
                        in_text = true;
                        entry = Some(String::new());
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Text(e)) => {
                    if in_text {
                        if let Some(ref mut text) = entry {
                            text.push_str(&e.unescape().unwrap_or_default());
                        }
                    }
                }
                Ok(quick_xml::events::Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(entry.take().unwrap_or_default());
                        in_si = false;
                    }
                    b"t" => {
                        in_text = false;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Empty(e)) => {
                    if e.name().as_ref() == b"si" {
                        strings.push(String::new());
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
