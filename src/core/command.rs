// command.rs - Drop command list and its JSON encoding

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::{DropError, Result};

/// Action token the terminal host understands as "open this file"
pub const DROP_ACTION: &str = "drop";

/// Flat list of `"drop", <absolute path>` pairs, in argument order.
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandList {
    items: Vec<String>,
}

impl CommandList {
    /// Room for `files` drop pairs
    pub fn with_capacity(files: usize) -> Self {
        Self {
            items: Vec::with_capacity(files * 2),
        }
    }

    /// Append a drop pair for `path`. Non-UTF-8 bytes become U+FFFD.
    pub fn push_drop(&mut self, path: &Path) {
        self.items.push(DROP_ACTION.to_string());
        self.items.push(path.to_string_lossy().into_owned());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Encode as a compact JSON array.
    ///
    /// `<`, `>`, `&`, U+2028 and U+2029 are written as `\u` escapes, the
    /// HTML-safe form terminal hosts already receive from other drop tools.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
        self.serialize(&mut ser).map_err(DropError::Encode)?;
        Ok(buf)
    }
}

/// Compact formatter that also escapes HTML-sensitive characters and the
/// JavaScript line terminators inside strings
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escape: &[u8] = match c {
                '<' => b"\\u003c",
                '>' => b"\\u003e",
                '&' => b"\\u0026",
                '\u{2028}' => b"\\u2028",
                '\u{2029}' => b"\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escape)?;
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(commands: &CommandList) -> String {
        String::from_utf8(commands.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_list() {
        let commands = CommandList::default();
        assert!(commands.is_empty());
        assert_eq!(json(&commands), "[]");
    }

    #[test]
    fn test_pairs_in_order() {
        let mut commands = CommandList::with_capacity(2);
        commands.push_drop(Path::new("/a/b.txt"));
        commands.push_drop(Path::new("/c/d.txt"));

        assert_eq!(commands.len(), 4);
        assert_eq!(json(&commands), r#"["drop","/a/b.txt","drop","/c/d.txt"]"#);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut commands = CommandList::default();
        commands.push_drop(Path::new("/x"));
        commands.push_drop(Path::new("/x"));
        assert_eq!(json(&commands), r#"["drop","/x","drop","/x"]"#);
    }

    #[test]
    fn test_json_escaping() {
        let mut commands = CommandList::default();
        commands.push_drop(Path::new("/tmp/say \"hi\"\\there\t.txt"));

        let encoded = json(&commands);
        assert_eq!(encoded, r#"["drop","/tmp/say \"hi\"\\there\t.txt"]"#);

        let decoded: Vec<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded[1], "/tmp/say \"hi\"\\there\t.txt");
    }

    #[test]
    fn test_html_sensitive_characters_escaped() {
        let mut commands = CommandList::default();
        commands.push_drop(Path::new("/tmp/a&b<c>.txt"));
        commands.push_drop(Path::new("/tmp/line\u{2028}para\u{2029}end"));

        let encoded = json(&commands);
        assert_eq!(
            encoded,
            r#"["drop","/tmp/a\u0026b\u003cc\u003e.txt","drop","/tmp/line\u2028para\u2029end"]"#
        );

        let decoded: Vec<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded[1], "/tmp/a&b<c>.txt");
        assert_eq!(decoded[3], "/tmp/line\u{2028}para\u{2029}end");
    }

    #[test]
    fn test_alternating_shape() {
        let mut commands = CommandList::default();
        for name in ["/1", "/2", "/3"] {
            commands.push_drop(Path::new(name));
        }
        assert_eq!(commands.len() % 2, 0);
        for (i, item) in commands.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(item, DROP_ACTION);
            } else {
                assert!(item.starts_with('/'));
            }
        }
    }
}
