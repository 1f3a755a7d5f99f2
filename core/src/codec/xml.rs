// ## 📂 File: `src/codec/xml.rs`

//! codec/xml.rs
//! Markup payloads: one `<root>` wrapper, one leaf element per key.
//!
//!   <root><Test>1</Test><Data>2</Data><Sample>3</Sample></root>
//!
//! Design notes:
//! - No indentation and no declaration are emitted.
//! - Values travel as their canonical text, so a decoded record holds `Str` values only.
//! - The decoder accepts a single-root document whose children are leaves with unique
//!   names. A text-only root decodes to `{root-name: text}`. Anything else is a miss.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::constants::{format_ids, XML_ROOT};
use crate::record::{Record, RecoveredValue, Scalar};
use crate::types::{RelayError, Result};

pub fn encode_record(record: &Record) -> Result<String> {
    let mut out = String::with_capacity(64);
    out.push_str(&format!("<{}>", XML_ROOT));
    for (key, value) in record.iter() {
        if !is_element_name(key) {
            return Err(RelayError::serialization(
                format_ids::XML,
                format!("'{}' is not a valid element name", key),
            ));
        }
        let text = value.canonical_text();
        out.push_str(&format!("<{0}>{1}</{0}>", key, escape(text.as_str())));
    }
    out.push_str(&format!("</{}>", XML_ROOT));
    Ok(out)
}

/// Wrap plain text in the root element.
pub fn render_text(text: &str) -> String {
    format!("<{0}>{1}</{0}>", XML_ROOT, escape(text))
}

/// Letters, digits, `_`, `-`, `.`; must start with a letter or `_`; no `xml` prefix.
pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else { return false };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    if name.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("xml")) {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Markup probe.
pub fn decode_value(text: &str) -> Option<RecoveredValue> {
    let mut reader = Reader::from_str(text);

    let mut root: Option<String> = None;
    let mut root_closed = false;
    let mut root_text = String::new();
    let mut child: Option<(String, String)> = None;
    let mut has_children = false;
    let mut record = Record::new();

    loop {
        match reader.read_event().ok()? {
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Start(e) => {
                let name = std::str::from_utf8(e.name().as_ref()).ok()?.to_string();
                if root_closed || child.is_some() {
                    return None;
                }
                if root.is_none() {
                    root = Some(name);
                } else {
                    child = Some((name, String::new()));
                    has_children = true;
                }
            }
            Event::Empty(e) => {
                let name = std::str::from_utf8(e.name().as_ref()).ok()?.to_string();
                if root_closed || child.is_some() {
                    return None;
                }
                if root.is_none() {
                    root = Some(name);
                    root_closed = true;
                } else {
                    record.insert(name, Scalar::Str(String::new())).ok()?;
                    has_children = true;
                }
            }
            Event::Text(t) => {
                let s = t.unescape().ok()?;
                push_text(&s, &root, root_closed, &mut child, &mut root_text)?;
            }
            Event::CData(c) => {
                let s = String::from_utf8(c.into_inner().into_owned()).ok()?;
                push_text(&s, &root, root_closed, &mut child, &mut root_text)?;
            }
            Event::End(_) => {
                if let Some((name, buf)) = child.take() {
                    record.insert(name, Scalar::Str(buf)).ok()?;
                } else if root.is_some() && !root_closed {
                    root_closed = true;
                } else {
                    return None;
                }
            }
            Event::Eof => break,
        }
    }

    let root = root?;
    if !root_closed {
        return None;
    }
    if has_children {
        if !root_text.trim().is_empty() {
            return None;
        }
        return Some(RecoveredValue::Mapping(record));
    }
    if root_text.trim().is_empty() {
        return Some(RecoveredValue::Mapping(Record::new()));
    }
    let mut single = Record::new();
    single.insert(root, Scalar::Str(root_text)).ok()?;
    Some(RecoveredValue::Mapping(single))
}

fn push_text(
    s: &str,
    root: &Option<String>,
    root_closed: bool,
    child: &mut Option<(String, String)>,
    root_text: &mut String,
) -> Option<()> {
    if let Some((_, buf)) = child.as_mut() {
        buf.push_str(s);
    } else if root.is_some() && !root_closed {
        root_text.push_str(s);
    } else if !s.trim().is_empty() {
        // text outside the root element
        return None;
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_values() {
        let r = Record::from_pairs([("a", "<&>")]).unwrap();
        let text = encode_record(&r).unwrap();
        assert_eq!(text, "<root><a>&lt;&amp;&gt;</a></root>");
        assert_eq!(decode_value(&text), Some(RecoveredValue::Mapping(r)));
    }

    #[test]
    fn rejects_bad_names() {
        let r = Record::from_pairs([("1abc", 1i64)]).unwrap();
        assert!(encode_record(&r).is_err());
        assert!(!is_element_name("xmlfoo"));
        assert!(!is_element_name("a b"));
    }

    #[test]
    fn text_outside_root_is_a_miss() {
        assert!(decode_value("hello <root/>").is_none());
        assert!(decode_value("<root/> trailing").is_none());
        assert!(decode_value("plain words").is_none());
    }

    #[test]
    fn nested_children_are_a_miss() {
        assert!(decode_value("<root><a><b>1</b></a></root>").is_none());
    }

    #[test]
    fn text_only_root() {
        let v = decode_value("<note>hi</note>").unwrap();
        let expected = Record::from_pairs([("note", "hi")]).unwrap();
        assert_eq!(v, RecoveredValue::Mapping(expected));
    }
}
