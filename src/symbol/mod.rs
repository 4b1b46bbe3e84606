//! Icon-symbol data model.
//!
//! The symbol script served by iconfont.cn embeds one `<svg>` holding a
//! `<symbol>` per icon. [`parse_symbol_document`] turns that script into
//! [`IconSymbol`] values; the generator never sees raw XML.

mod document;

pub use document::parse_symbol_document;

/// One `<symbol>` entry from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSymbol {
    /// Raw symbol id, e.g. `icon-home`.
    pub id: String,
    /// The `viewBox` attribute, copied verbatim.
    pub view_box: String,
    /// Direct children of the symbol, in document order.
    pub shapes: Vec<ShapeElement>,
}

impl IconSymbol {
    pub fn new(id: impl Into<String>, view_box: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view_box: view_box.into(),
            shapes: Vec::new(),
        }
    }

    /// Append a shape (builder style, mostly for tests and benches).
    pub fn with_shape(mut self, shape: ShapeElement) -> Self {
        self.shapes.push(shape);
        self
    }
}

/// A child element of a symbol, still untyped.
///
/// The element name is kept as written so that an unsupported element can
/// be reported by name when the generator maps it to a [`ShapeKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeElement {
    pub tag: String,
    /// Attributes in source order.
    pub attributes: Vec<(String, String)>,
}

impl ShapeElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The supported kind for this element, if any.
    pub fn kind(&self) -> Option<ShapeKind> {
        ShapeKind::from_tag(&self.tag)
    }
}

/// Shape elements the generator knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Path,
}

/// Closed lookup table: document tag → kind.
const SHAPE_TAGS: &[(&str, ShapeKind)] = &[("path", ShapeKind::Path)];

impl ShapeKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        SHAPE_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }

    /// The react-native-svg primitive this kind renders as.
    pub fn component(self) -> &'static str {
        match self {
            ShapeKind::Path => "Path",
        }
    }

    /// Whether this kind gets a default `fill` when the document omits one.
    pub fn fills_by_default(self) -> bool {
        match self {
            ShapeKind::Path => true,
        }
    }
}
