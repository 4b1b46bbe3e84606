//! Single-icon component generation.

use crate::config::Configuration;
use crate::error::{IconfontError, Result};
use crate::symbol::{IconSymbol, ShapeElement, ShapeKind};
use crate::templates::{TemplateStore, Token};

use super::naming::{component_name, prop_name, trim_icon_id};

/// Fill used by iconfont.cn when a shape carries none.
pub const DEFAULT_FILL: &str = "#333333";

/// Attribute that becomes a color-injection placeholder.
const FILL_ATTRIBUTE: &str = "fill";

/// Indentation of the `<Svg>` element inside `return (...)`.
const BASE_INDENT: usize = 4;

/// Output of the generator for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub component_name: String,
    pub trimmed_id: String,
    /// The rendered component source.
    pub source_text: String,
    /// True when the source calls `getIconColor`.
    pub uses_color_injection: bool,
    /// `.d.ts` companion, only for untyped output.
    pub type_declaration: Option<String>,
}

/// Per-icon counter handing out `getIconColor` indices.
///
/// A fresh counter starts at 0 for every icon.
#[derive(Debug, Default)]
pub struct ColorIndex {
    next: usize,
}

impl ColorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next index.
    pub fn advance(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// How many indices were handed out.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// Turns icon symbols into component sources.
pub struct ComponentGenerator<'a> {
    config: &'a Configuration,
    templates: &'a TemplateStore,
}

impl<'a> ComponentGenerator<'a> {
    pub fn new(config: &'a Configuration, templates: &'a TemplateStore) -> Self {
        Self { config, templates }
    }

    /// Render one icon.
    ///
    /// Fails with [`IconfontError::UnsupportedElement`] as soon as a child
    /// element has no entry in the shape table.
    pub fn generate(&self, icon: &IconSymbol) -> Result<GeneratedIcon> {
        let trimmed_id = self.trimmed_id(icon);
        let component_name = component_name(&trimmed_id);
        self.render(icon, trimmed_id, component_name)
    }

    /// The icon's id with the configured prefix stripped.
    pub fn trimmed_id(&self, icon: &IconSymbol) -> String {
        trim_icon_id(&icon.id, &self.config.icon_id_prefix)
    }

    /// Render one icon under an already chosen component name.
    pub fn render(
        &self,
        icon: &IconSymbol,
        trimmed_id: String,
        component_name: String,
    ) -> Result<GeneratedIcon> {
        let mut colors = ColorIndex::new();
        let (body, kinds) = render_svg(icon, &mut colors)?;
        let uses_color_injection = colors.issued() > 0;

        let template_name = format!("SingleIcon.{}", self.config.component_extension());
        let source_text = self
            .templates
            .load(&template_name)?
            .fill(Token::Size, &self.config.default_icon_size.to_string())
            .fill(Token::SvgComponents, &self.primitive_import(&kinds))
            .fill(Token::ComponentName, &component_name)
            .fill(Token::IconContent, &body)
            .fill(Token::Helper, helper_import(uses_color_injection))
            .into_string();

        let type_declaration = if self.config.use_typed_output {
            None
        } else {
            Some(
                self.templates
                    .load("SingleIcon.d.ts")?
                    .fill(Token::ComponentName, &component_name)
                    .into_string(),
            )
        };

        Ok(GeneratedIcon {
            component_name,
            trimmed_id,
            source_text,
            uses_color_injection,
            type_declaration,
        })
    }

    /// `import { Svg, GProps, Path } from 'react-native-svg';` with only the
    /// primitives this icon references.
    fn primitive_import(&self, kinds: &[ShapeKind]) -> String {
        let mut names = vec!["Svg"];
        if self.config.use_typed_output {
            names.push("GProps");
        }
        names.extend(kinds.iter().map(|kind| kind.component()));
        format!("import {{ {} }} from 'react-native-svg';\n", names.join(", "))
    }
}

fn helper_import(uses_color_injection: bool) -> &'static str {
    if uses_color_injection {
        "import { getIconColor } from './helper';\n"
    } else {
        ""
    }
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}

/// Render the `<Svg>` element and report the shape kinds it used, in
/// first-use order.
fn render_svg(icon: &IconSymbol, colors: &mut ColorIndex) -> Result<(String, Vec<ShapeKind>)> {
    let mut out = format!(
        "\n{}<Svg viewBox=\"{}\" width={{size}} height={{size}} {{...rest}}>\n",
        indent(BASE_INDENT),
        icon.view_box
    );
    let mut kinds = Vec::new();

    for shape in &icon.shapes {
        let kind = shape
            .kind()
            .ok_or_else(|| IconfontError::UnsupportedElement {
                icon: icon.id.clone(),
                element: shape.tag.clone(),
            })?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }

        out.push_str(&format!(
            "{}<{}{}\n{}/>\n",
            indent(BASE_INDENT + 2),
            kind.component(),
            render_attributes(kind, shape, colors),
            indent(BASE_INDENT + 2)
        ));
    }

    out.push_str(&format!("{}</Svg>\n", indent(BASE_INDENT)));
    Ok((out, kinds))
}

fn render_attributes(kind: ShapeKind, shape: &ShapeElement, colors: &mut ColorIndex) -> String {
    let mut attributes = shape.attributes.clone();
    if kind.fills_by_default() && shape.attribute(FILL_ATTRIBUTE).is_none() {
        attributes.push((FILL_ATTRIBUTE.to_string(), DEFAULT_FILL.to_string()));
    }

    let pad = indent(BASE_INDENT + 4);
    let mut out = String::new();
    for (name, value) in &attributes {
        if name == FILL_ATTRIBUTE {
            out.push_str(&format!(
                "\n{}fill={{getIconColor(color, {}, '{}')}}",
                pad,
                colors.advance(),
                value.replace('\'', "\\'")
            ));
        } else {
            out.push_str(&format!("\n{}{}=\"{}\"", pad, prop_name(name), value));
        }
    }
    out
}
