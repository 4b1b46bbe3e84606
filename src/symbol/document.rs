//! Symbol script parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{IconfontError, Result};

use super::{IconSymbol, ShapeElement};

/// Parse the symbol script served next to the webfont.
///
/// The script wraps a single `<svg>...</svg>` string in JavaScript; only
/// that span is read. Each `<symbol>` becomes an [`IconSymbol`] and its
/// direct children become [`ShapeElement`]s. Anything nested deeper is
/// skipped.
pub fn parse_symbol_document(source: &str) -> Result<Vec<IconSymbol>> {
    let svg = svg_span(source).ok_or_else(|| IconfontError::Parse {
        message: "No <svg> element found in symbol document".to_string(),
        help: Some("The src link must point at the Symbol script (.js) from iconfont.cn".to_string()),
    })?;

    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    let mut symbols = Vec::new();
    let mut current: Option<IconSymbol> = None;
    // Nesting below the current symbol; 0 means "direct child level".
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(&e)?;
                if let Some(symbol) = current.as_mut() {
                    if depth == 0 {
                        symbol.shapes.push(read_shape(name, &e)?);
                    }
                    depth += 1;
                } else if name == "symbol" {
                    current = Some(read_symbol(&e)?);
                    depth = 0;
                }
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(&e)?;
                if let Some(symbol) = current.as_mut() {
                    if depth == 0 {
                        symbol.shapes.push(read_shape(name, &e)?);
                    }
                } else if name == "symbol" {
                    symbols.push(read_symbol(&e)?);
                }
            }
            Ok(Event::End(_)) => match current.take() {
                Some(symbol) if depth == 0 => symbols.push(symbol),
                Some(symbol) => {
                    depth -= 1;
                    current = Some(symbol);
                }
                None => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(IconfontError::Parse {
                    message: format!(
                        "Malformed symbol document at byte {}: {}",
                        reader.buffer_position(),
                        e
                    ),
                    help: None,
                });
            }
        }
    }

    Ok(symbols)
}

/// Slice from the first `<svg` to the end of the last `</svg>`.
fn svg_span(source: &str) -> Option<&str> {
    let start = source.find("<svg")?;
    let end = source.rfind("</svg>")? + "</svg>".len();
    (end > start).then(|| &source[start..end])
}

fn element_name(e: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_string)
        .map_err(|err| IconfontError::Parse {
            message: format!("Element name is not UTF-8: {}", err),
            help: None,
        })
}

fn read_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| IconfontError::Parse {
            message: format!("Malformed attribute: {}", err),
            help: None,
        })?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| IconfontError::Parse {
                message: format!("Attribute name is not UTF-8: {}", err),
                help: None,
            })?
            .to_string();
        let value = attr.unescape_value().map_err(|err| IconfontError::Parse {
            message: format!("Invalid value for attribute \"{}\": {}", key, err),
            help: None,
        })?;
        attributes.push((key, value.into_owned()));
    }
    Ok(attributes)
}

fn read_symbol(e: &BytesStart<'_>) -> Result<IconSymbol> {
    let attributes = read_attributes(e)?;
    let find = |name: &str| {
        attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    let id = find("id").ok_or_else(|| IconfontError::Parse {
        message: "Found a <symbol> without an id".to_string(),
        help: None,
    })?;

    Ok(IconSymbol::new(id, find("viewBox").unwrap_or_default()))
}

fn read_shape(tag: String, e: &BytesStart<'_>) -> Result<ShapeElement> {
    Ok(ShapeElement {
        tag,
        attributes: read_attributes(e)?,
    })
}
