//! ZIP container abstraction for spreadsheet packages.
//!
//! A workbook container is a read-only archive of named byte streams.
//! It is opened once per analysis run, fully consumed, and released when
//! the [`SheetContainer`] is dropped, on every exit path.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Directory prefix under which worksheet streams live.
pub const WORKSHEET_PREFIX: &str = "xl/worksheets/";

/// Conventional path of the shared string stream.
pub const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";

/// Read-only ZIP container holding the worksheet and shared-string XML
/// streams.
pub struct SheetContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl SheetContainer {
    /// Open a container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sheetlens::container::SheetContainer;
    ///
    /// let container = SheetContainer::open("ledger.xlsx")?;
    /// # Ok::<(), sheetlens::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::ContainerOpen(format!("{}: {}", path.display(), e)))?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let cursor = Cursor::new(data);
        let archive = zip::ZipArchive::new(cursor)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read a named XML stream from the archive as a string.
    ///
    /// Handles UTF-8 (with or without BOM) and UTF-16 LE/BE streams.
    /// Returns [`Error::MissingSheet`] when the stream does not exist.
    pub fn read_xml(&self, name: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|_| Error::MissingSheet(name.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check whether a stream exists in the archive.
    pub fn exists(&self, name: &str) -> bool {
        self.archive.borrow().file_names().any(|n| n == name)
    }

    /// List worksheet stream names in sorted order.
    pub fn worksheet_paths(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        let mut paths: Vec<String> = archive
            .file_names()
            .filter(|n| n.starts_with(WORKSHEET_PREFIX) && n.ends_with(".xml"))
            .map(String::from)
            .collect();
        paths.sort();
        paths
    }
}

impl std::fmt::Debug for SheetContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetContainer")
            .field("files", &self.archive.borrow().len())
            .finish()
    }
}

/// Decode XML bytes handling UTF-8 and UTF-16 LE/BE encodings.
///
/// Workbook streams are typically UTF-8, but some producers emit UTF-16.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.len() >= 3 && bytes[..3] == [0xEF, 0xBB, 0xBF] {
        // UTF-8 BOM
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::XmlParse(e.to_string()));
    }

    if bytes.len() >= 2 && bytes[..2] == [0xFF, 0xFE] {
        // UTF-16 LE BOM
        let content = decode_utf16(&bytes[2..], u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if bytes.len() >= 2 && bytes[..2] == [0xFE, 0xFF] {
        // UTF-16 BE BOM
        let content = decode_utf16(&bytes[2..], u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            // No BOM: UTF-16 ASCII content has null bytes at alternating
            // positions, which tells LE from BE apart.
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                decode_utf16(bytes, u16::from_le_bytes)
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                decode_utf16(bytes, u16::from_be_bytes)
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Decode UTF-16 bytes with the given byte-order combiner.
fn decode_utf16(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> Result<String> {
    // Ignore a trailing odd byte
    let len = bytes.len() & !1;
    let units = (0..len).step_by(2).map(|i| combine([bytes[i], bytes[i + 1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::XmlParse(e.to_string()))
}

/// Rewrite the XML declaration after UTF-16 content has been transcoded.
///
/// The declaration still names UTF-16, which quick-xml would try to honor
/// against the already-UTF-8 string.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_read_and_exists() {
        let data = archive_with(&[
            ("xl/worksheets/sheet1.xml", "<worksheet/>"),
            ("xl/sharedStrings.xml", "<sst/>"),
        ]);
        let container = SheetContainer::from_bytes(data).unwrap();

        assert!(container.exists("xl/sharedStrings.xml"));
        assert!(!container.exists("xl/styles.xml"));
        assert_eq!(
            container.read_xml("xl/worksheets/sheet1.xml").unwrap(),
            "<worksheet/>"
        );
    }

    #[test]
    fn test_missing_stream() {
        let data = archive_with(&[("xl/worksheets/sheet1.xml", "<worksheet/>")]);
        let container = SheetContainer::from_bytes(data).unwrap();

        let err = container.read_xml("xl/worksheets/sheet2.xml").unwrap_err();
        assert!(matches!(err, Error::MissingSheet(ref p) if p == "xl/worksheets/sheet2.xml"));
    }

    #[test]
    fn test_worksheet_paths_sorted() {
        let data = archive_with(&[
            ("xl/worksheets/sheet2.xml", "<worksheet/>"),
            ("xl/worksheets/sheet1.xml", "<worksheet/>"),
            ("xl/workbook.xml", "<workbook/>"),
        ]);
        let container = SheetContainer::from_bytes(data).unwrap();

        assert_eq!(
            container.worksheet_paths(),
            vec![
                "xl/worksheets/sheet1.xml".to_string(),
                "xl/worksheets/sheet2.xml".to_string()
            ]
        );
    }

    #[test]
    fn test_invalid_archive() {
        let err = SheetContainer::from_bytes(vec![0x00, 0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, Error::ContainerOpen(_)));
    }

    #[test]
    fn test_open_missing_path() {
        let err = SheetContainer::open("does/not/exist.xlsx").unwrap_err();
        assert!(matches!(err, Error::ContainerOpen(_)));
    }

    #[test]
    fn test_utf16_decoding() {
        // UTF-16 LE with BOM
        let utf16_le = b"\xFF\xFE<\0?\0x\0m\0l\0>\0";
        assert_eq!(decode_xml_bytes(utf16_le).unwrap(), "<?xml>");

        // UTF-16 BE with BOM
        let utf16_be = b"\xFE\xFF\0<\0?\0x\0m\0l\0>";
        assert_eq!(decode_xml_bytes(utf16_be).unwrap(), "<?xml>");

        // UTF-8 BOM
        let utf8_bom = b"\xEF\xBB\xBF<?xml>";
        assert_eq!(decode_xml_bytes(utf8_bom).unwrap(), "<?xml>");

        // Plain UTF-8
        assert_eq!(decode_xml_bytes(b"<?xml>").unwrap(), "<?xml>");
    }

    #[test]
    fn test_encoding_declaration_rewrite() {
        let fixed =
            fix_xml_encoding_declaration("<?xml version=\"1.0\" encoding=\"UTF-16\"?><a/>");
        assert_eq!(fixed, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a/>");
    }
}
