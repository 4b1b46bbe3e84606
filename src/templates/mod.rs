//! Template store.
//!
//! Source templates are compiled into the binary and looked up by file
//! name. A template is plain text with `#token#` placeholders; filling a
//! token replaces every occurrence of it.

use std::collections::HashMap;

use crate::error::{IconfontError, Result};

const EMBEDDED: &[(&str, &str)] = &[
    ("SingleIcon.tsx", include_str!("../../templates/SingleIcon.tsx")),
    ("SingleIcon.js", include_str!("../../templates/SingleIcon.js")),
    ("SingleIcon.d.ts", include_str!("../../templates/SingleIcon.d.ts")),
    ("Icon.tsx", include_str!("../../templates/Icon.tsx")),
    ("Icon.js", include_str!("../../templates/Icon.js")),
    ("Icon.d.ts", include_str!("../../templates/Icon.d.ts")),
    ("helper.ts", include_str!("../../templates/helper.ts")),
    ("helper.js", include_str!("../../templates/helper.js")),
    ("helper.d.ts", include_str!("../../templates/helper.d.ts")),
];

/// Placeholders understood by the bundled templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    ComponentName,
    IconContent,
    Size,
    SvgComponents,
    Helper,
    Imports,
    Exports,
    Cases,
    Names,
    NamesArray,
}

impl Token {
    /// The literal text marking this token in a template.
    pub fn placeholder(self) -> &'static str {
        match self {
            Token::ComponentName => "#componentName#",
            Token::IconContent => "#iconContent#",
            Token::Size => "#size#",
            Token::SvgComponents => "#svgComponents#",
            Token::Helper => "#helper#",
            Token::Imports => "#imports#",
            Token::Exports => "#exports#",
            Token::Cases => "#cases#",
            Token::Names => "#names#",
            Token::NamesArray => "#namesArray#",
        }
    }
}

/// Named template texts.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: HashMap<&'static str, &'static str>,
}

impl TemplateStore {
    /// The templates shipped with the crate.
    pub fn embedded() -> Self {
        Self {
            templates: EMBEDDED.iter().copied().collect(),
        }
    }

    /// Raw template text.
    pub fn get(&self, name: &str) -> Result<&'static str> {
        self.templates
            .get(name)
            .copied()
            .ok_or_else(|| IconfontError::Template {
                name: name.to_string(),
            })
    }

    /// A fillable copy of the named template.
    pub fn load(&self, name: &str) -> Result<Template> {
        self.get(name).map(|text| Template {
            text: text.to_string(),
        })
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::embedded()
    }
}

/// A template being filled in.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// Replace every occurrence of `token` with `value`.
    pub fn fill(mut self, token: Token, value: &str) -> Self {
        self.text = self.text.replace(token.placeholder(), value);
        self
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
