//! The aggregator component (`index.tsx` / `index.js`).
//!
//! Per-icon results are recorded into an [`AggregatorManifest`] during the
//! generation loop; the manifest is rendered once, after the last icon.

use crate::config::Configuration;
use crate::error::Result;
use crate::templates::{TemplateStore, Token};

use super::component::GeneratedIcon;

/// One icon as seen by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub trimmed_id: String,
    pub component_name: String,
}

/// Names, imports and case branches collected across a run.
///
/// Entries are keyed by trimmed id. Recording an id that is already present
/// replaces the earlier entry in place (last writer wins).
#[derive(Debug, Clone, Default)]
pub struct AggregatorManifest {
    entries: Vec<ManifestEntry>,
}

impl AggregatorManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generated icon. Returns the entry it displaced, if any.
    pub fn record(&mut self, icon: &GeneratedIcon) -> Option<ManifestEntry> {
        let entry = ManifestEntry {
            trimmed_id: icon.trimmed_id.clone(),
            component_name: icon.component_name.clone(),
        };

        match self
            .entries
            .iter_mut()
            .find(|existing| existing.trimmed_id == entry.trimmed_id)
        {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    /// The component name an icon should be generated under.
    ///
    /// An id that is already recorded keeps its earlier name, so a
    /// replacement overwrites the same file. Otherwise a name held by a
    /// different id gets the first free numeric suffix (`ArrowLeft2`).
    pub fn claim_name(&self, trimmed_id: &str, derived: &str) -> String {
        if let Some(existing) = self.entries.iter().find(|e| e.trimmed_id == trimmed_id) {
            return existing.component_name.clone();
        }

        let mut candidate = derived.to_string();
        let mut suffix = 2;
        while self.entries.iter().any(|e| e.component_name == candidate) {
            candidate = format!("{}{}", derived, suffix);
            suffix += 1;
        }
        candidate
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Trimmed ids in record order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.trimmed_id.as_str()).collect()
    }

    /// Component names to import, without repeats.
    pub fn imports(&self) -> Vec<&str> {
        let mut imports: Vec<&str> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !imports.contains(&entry.component_name.as_str()) {
                imports.push(&entry.component_name);
            }
        }
        imports
    }
}

/// Rendered aggregator files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorOutput {
    /// `index.tsx` or `index.js`.
    pub source_text: String,
    /// `index.d.ts`, only for untyped output.
    pub type_declaration: Option<String>,
}

/// Render the aggregator from a finished manifest.
pub fn render_aggregator(
    manifest: &AggregatorManifest,
    config: &Configuration,
    templates: &TemplateStore,
) -> Result<AggregatorOutput> {
    let imports = manifest.imports();
    let import_lines: String = imports
        .iter()
        .map(|name| format!("import {} from './{}';\n", name, name))
        .collect();
    let export_lines: String = imports
        .iter()
        .map(|name| format!("export {{ default as {} }} from './{}';\n", name, name))
        .collect();
    let svg_components = if config.use_typed_output {
        "import { GProps } from 'react-native-svg';\n"
    } else {
        ""
    };

    let template_name = format!("Icon.{}", config.component_extension());
    let mut source = templates
        .load(&template_name)?
        .fill(Token::Size, &config.default_icon_size.to_string())
        .fill(Token::Cases, &render_cases(manifest))
        .fill(Token::SvgComponents, svg_components)
        .fill(Token::Imports, &import_lines)
        .fill(Token::Exports, &export_lines);

    let type_declaration = if config.use_typed_output {
        source = source.fill(Token::Names, &name_union(manifest));
        None
    } else {
        source = source.fill(Token::NamesArray, &name_array(manifest));
        Some(
            templates
                .load("Icon.d.ts")?
                .fill(Token::Exports, &export_lines)
                .fill(Token::Names, &name_union(manifest))
                .into_string(),
        )
    };

    Ok(AggregatorOutput {
        source_text: source.into_string(),
        type_declaration,
    })
}

/// `case` branches for the `switch (name)` dispatch.
fn render_cases(manifest: &AggregatorManifest) -> String {
    manifest
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "    case {}:\n      return <{} key=\"{}\" {{...rest}} />;\n",
                quote(&entry.trimmed_id),
                entry.component_name,
                index + 1
            )
        })
        .collect()
}

/// `'home' | 'user'`, or `never` for an empty set.
fn name_union(manifest: &AggregatorManifest) -> String {
    if manifest.is_empty() {
        return "never".to_string();
    }
    manifest
        .names()
        .iter()
        .map(|name| quote(name))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `['home', 'user']`.
fn name_array(manifest: &AggregatorManifest) -> String {
    let items: Vec<String> = manifest.names().iter().map(|name| quote(name)).collect();
    format!("[{}]", items.join(", "))
}

/// Single-quoted JS string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn icon(trimmed_id: &str, component_name: &str) -> GeneratedIcon {
        GeneratedIcon {
            component_name: component_name.to_string(),
            trimmed_id: trimmed_id.to_string(),
            source_text: String::new(),
            uses_color_injection: true,
            type_declaration: None,
        }
    }

    fn config(typed: bool) -> Configuration {
        let mut config = Configuration::with_source("//at.alicdn.com/t/font_1.js").unwrap();
        config.use_typed_output = typed;
        config
    }

    #[test]
    fn test_record_keeps_order() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("home", "Home"));
        manifest.record(&icon("user", "User"));

        assert_eq!(manifest.names(), vec!["home", "user"]);
        assert_eq!(manifest.imports(), vec!["Home", "User"]);
    }

    #[test]
    fn test_duplicate_id_last_writer_wins() {
        let mut manifest = AggregatorManifest::new();
        assert!(manifest.record(&icon("home", "Home")).is_none());
        manifest.record(&icon("user", "User"));
        let displaced = manifest.record(&icon("home", "HomeV2"));

        assert_eq!(displaced.map(|e| e.component_name), Some("Home".to_string()));
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.names(), vec!["home", "user"]);
        assert_eq!(manifest.imports(), vec!["HomeV2", "User"]);
    }

    #[test]
    fn test_shared_component_name_imported_once() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("arrow-left", "ArrowLeft"));
        manifest.record(&icon("arrow_left", "ArrowLeft"));

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.imports(), vec!["ArrowLeft"]);
    }

    #[test]
    fn test_claim_name_free() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("home", "Home"));

        assert_eq!(manifest.claim_name("user", "User"), "User");
    }

    #[test]
    fn test_claim_name_taken_by_other_id() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("arrow-left", "ArrowLeft"));
        assert_eq!(manifest.claim_name("arrow_left", "ArrowLeft"), "ArrowLeft2");

        manifest.record(&icon("arrow_left", "ArrowLeft2"));
        assert_eq!(manifest.claim_name("arrow.left", "ArrowLeft"), "ArrowLeft3");
        assert_eq!(manifest.claim_name("arrow-left2", "ArrowLeft2"), "ArrowLeft22");
    }

    #[test]
    fn test_claim_name_same_id_keeps_earlier_name() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("arrow-left", "ArrowLeft"));
        manifest.record(&icon("arrow_left", "ArrowLeft2"));

        assert_eq!(manifest.claim_name("arrow_left", "ArrowLeft"), "ArrowLeft2");
        assert_eq!(manifest.claim_name("arrow-left", "ArrowLeft"), "ArrowLeft");
    }

    #[test]
    fn test_cases() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("home", "Home"));
        manifest.record(&icon("user", "User"));

        let expected = "    case 'home':\n      return <Home key=\"1\" {...rest} />;\n    case 'user':\n      return <User key=\"2\" {...rest} />;\n";
        assert_eq!(render_cases(&manifest), expected);
    }

    #[test]
    fn test_one_case_per_duplicate_id() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("home", "Home"));
        manifest.record(&icon("home", "Home"));

        let cases = render_cases(&manifest);
        assert_eq!(cases.matches("case 'home':").count(), 1);
    }

    #[test]
    fn test_render_typed() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("home", "Home"));
        manifest.record(&icon("user", "User"));

        let output = render_aggregator(&manifest, &config(true), &TemplateStore::embedded()).unwrap();
        let source = output.source_text;

        assert!(output.type_declaration.is_none());
        assert!(source.contains("import { GProps } from 'react-native-svg';\nimport Home from './Home';\nimport User from './User';\n"));
        assert!(source.contains("export { default as Home } from './Home';\n"));
        assert!(source.contains("export type IconNames = 'home' | 'user';"));
        assert!(source.contains("  switch (name) {\n    case 'home':"));
        assert!(source.contains("  size: 24,\n"));
        assert!(!source.contains("#cases#"));
        assert!(!source.contains("#names#"));
    }

    #[test]
    fn test_render_untyped() {
        let mut manifest = AggregatorManifest::new();
        manifest.record(&icon("home", "Home"));

        let output = render_aggregator(&manifest, &config(false), &TemplateStore::embedded()).unwrap();

        assert!(!output.source_text.contains("react-native-svg"));
        assert!(output.source_text.contains("export const iconNames = ['home'];"));
        let declaration = output.type_declaration.unwrap();
        assert!(declaration.contains("export type IconNames = 'home';"));
        assert!(declaration.contains("export { default as Home } from './Home';"));
    }

    #[test]
    fn test_render_empty() {
        let output = render_aggregator(
            &AggregatorManifest::new(),
            &config(true),
            &TemplateStore::embedded(),
        )
        .unwrap();

        assert!(output.source_text.contains("export type IconNames = never;"));
        assert!(output.source_text.contains("  switch (name) {\n  }"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), "'it\\'s'");
    }
}
