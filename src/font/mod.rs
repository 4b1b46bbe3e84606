//! Webfont stylesheet pipeline.
//!
//! Fetches the stylesheet that sits next to the symbol script, replaces its
//! `@font-face` rule with one that carries the TrueType font inline as a
//! base64 `data:` URL, and doubles pixel sizes.
//!
//! The steps run strictly in order and every fetch must succeed:
//!
//! 1. fetch `<symbol link>.css`
//! 2. find the `@font-face` rule (a miss skips embedding, not the run)
//! 3. fetch the `.ttf` named by the rule's first `url(...)`
//! 4. swap in the embedded rule
//! 5. rescale `px` values

mod block;
mod decimal;

use std::ops::Range;
use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use url::Url;

use crate::config::Configuration;
use crate::error::{FetchStage, IconfontError, Result};
use crate::fetch::Fetch;
use crate::output::Printer;

pub use block::extract_balanced_block;
pub use decimal::{scale, Decimal};

/// Factor applied to every rescaled pixel value.
pub const SCALE_FACTOR: &str = "2";

static FONT_FACE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*@font-face\s*").unwrap());
static FONT_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(['"]([\s\S]+?)['"]\)"#).unwrap());
static DATA_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(\s*['"]?data:[^)]*\)"#).unwrap());
static PIXEL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?px").unwrap());

/// Which pixel values get rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RescaleMode {
    /// Only the first `px` value in the stylesheet.
    #[default]
    First,
    /// Every `px` value outside embedded data.
    All,
}

/// Intermediate state of one stylesheet build.
#[derive(Debug, Clone, Default)]
pub struct FontAsset {
    pub raw_css: String,
    /// The `{...}` body of the font-face rule, verbatim; empty on a miss.
    pub font_face_block: String,
    pub font_binary: Vec<u8>,
    pub base64: String,
}

/// What happened while building the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StylesheetReport {
    /// The font was fetched and embedded.
    pub embedded: bool,
    /// The `.ttf` URL that was fetched.
    pub font_url: Option<Url>,
    /// Pixel values rescaled.
    pub rescaled: usize,
    /// Pixel values left untouched: past the first under
    /// [`RescaleMode::First`], or too long to multiply exactly.
    pub remaining: usize,
}

/// Final stylesheet text plus its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStylesheet {
    pub text: String,
    pub report: StylesheetReport,
}

/// Builds the embedded-font stylesheet for a configuration.
pub struct FontPipeline<'a, F: Fetch> {
    config: &'a Configuration,
    fetcher: &'a F,
    printer: &'a Printer,
    clock: fn() -> i64,
}

impl<'a, F: Fetch> FontPipeline<'a, F> {
    pub fn new(config: &'a Configuration, fetcher: &'a F, printer: &'a Printer) -> Self {
        Self {
            config,
            fetcher,
            printer,
            clock: unix_millis,
        }
    }

    /// Replace the cache-busting clock (milliseconds since the epoch).
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn build_stylesheet(&self) -> Result<RenderedStylesheet> {
        let css_url = stylesheet_url(&self.config.symbol_source_url);
        self.printer.status("Fetching", css_url.as_str());

        let mut asset = FontAsset {
            raw_css: self.fetcher.fetch_text(FetchStage::Stylesheet, &css_url)?,
            ..FontAsset::default()
        };
        let mut report = StylesheetReport::default();

        let mut text = match extract_font_face(&asset.raw_css) {
            Some(block) => {
                asset.font_face_block = block.to_string();
                match font_reference(block) {
                    Some(reference) => {
                        let font_url = font_url(reference, &css_url, (self.clock)())?;
                        self.printer.status("Fetching", font_url.as_str());
                        asset.font_binary = self.fetcher.fetch_bytes(FetchStage::Font, &font_url)?;
                        asset.base64 = STANDARD.encode(&asset.font_binary);
                        report.embedded = true;
                        report.font_url = Some(font_url);

                        let rule = render_font_face(&self.config.font_family, &asset.base64);
                        asset.raw_css.replacen(&asset.font_face_block, &rule, 1)
                    }
                    None => {
                        self.printer
                            .warning("Skipped", "font embedding: @font-face has no url(...)");
                        asset.raw_css.clone()
                    }
                }
            }
            None => {
                self.printer
                    .warning("Skipped", "font embedding: no @font-face rule in stylesheet");
                asset.raw_css.clone()
            }
        };

        let rescaled = rescale_pixels(&text, self.config.rescale);
        text = rescaled.text;
        report.rescaled = rescaled.rescaled;
        report.remaining = rescaled.remaining;

        Ok(RenderedStylesheet { text, report })
    }
}

fn unix_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// The stylesheet published next to a symbol script (`font_1.js` → `font_1.css`).
pub fn stylesheet_url(symbol_url: &Url) -> Url {
    let mut url = symbol_url.clone();
    let path = swap_extension(symbol_url.path(), "css");
    url.set_path(&path);
    url
}

/// Replace the extension of the last path segment, or append one.
fn swap_extension(path: &str, extension: &str) -> String {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) => format!("{}.{}", &path[..segment_start + dot], extension),
        None => format!("{}.{}", path, extension),
    }
}

/// Offset just past the first `@font-face` marker and its surrounding whitespace.
pub fn find_font_face(css: &str) -> Option<usize> {
    FONT_FACE_MARKER.find(css).map(|m| m.end())
}

/// The `{...}` body of the first `@font-face` rule.
///
/// `None` when there is no marker or the rule never closes; the caller then
/// leaves the stylesheet's fonts alone.
pub fn extract_font_face(css: &str) -> Option<&str> {
    let start = find_font_face(css)?;
    let block = extract_balanced_block(css, start);
    (!block.is_empty()).then_some(block)
}

/// First `url('...')` in the block that is not already inline data.
pub fn font_reference(block: &str) -> Option<&str> {
    FONT_REFERENCE
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|reference| !reference.starts_with("data:"))
}

/// Absolute https URL of the TrueType variant of a font reference.
///
/// Protocol-relative and `http:` references are pinned to https, relative
/// ones resolve against the stylesheet. The query is replaced by a
/// cache-busting `t=<millis>`.
pub fn font_url(reference: &str, stylesheet: &Url, millis: i64) -> Result<Url> {
    let absolute = if reference.starts_with("//") {
        format!("https:{}", reference)
    } else if let Some(rest) = reference.strip_prefix("http:") {
        format!("https:{}", rest)
    } else {
        reference.to_string()
    };

    let mut url = stylesheet.join(&absolute).map_err(|e| IconfontError::Parse {
        message: format!("Invalid font url \"{}\": {}", reference, e),
        help: None,
    })?;
    url.set_fragment(None);
    let path = swap_extension(url.path(), "ttf");
    url.set_path(&path);
    url.set_query(Some(&format!("t={}", millis)));
    Ok(url)
}

/// The replacement font-face body.
pub fn render_font_face(font_family: &str, base64: &str) -> String {
    format!(
        "{{font-family: '{}';src: url(data:font/truetype;charset=utf-8;base64,{}) format('truetype');font-weight: normal;font-style: normal;}}",
        font_family, base64
    )
}

/// Result of [`rescale_pixels`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rescaled {
    pub text: String,
    pub rescaled: usize,
    pub remaining: usize,
}

/// Multiply `px` values by [`SCALE_FACTOR`].
///
/// Values inside `url(data:...)` are never touched; base64 payloads can
/// contain digit runs followed by `px`. A value too long to multiply
/// exactly is left as written and counted in `remaining`.
pub fn rescale_pixels(css: &str, mode: RescaleMode) -> Rescaled {
    let protected: Vec<Range<usize>> = DATA_URL.find_iter(css).map(|m| m.range()).collect();

    let mut text = String::with_capacity(css.len());
    let mut last = 0;
    let mut rescaled = 0;
    let mut remaining = 0;

    for m in PIXEL_VALUE.find_iter(css) {
        if protected
            .iter()
            .any(|range| range.start <= m.start() && m.end() <= range.end)
        {
            continue;
        }
        if mode == RescaleMode::First && rescaled > 0 {
            remaining += 1;
            continue;
        }

        let number = &m.as_str()[..m.as_str().len() - 2];
        let Ok(doubled) = scale(number, SCALE_FACTOR) else {
            remaining += 1;
            continue;
        };
        text.push_str(&css[last..m.start()]);
        text.push_str(&doubled);
        text.push_str("px");
        last = m.end();
        rescaled += 1;
    }
    text.push_str(&css[last..]);

    Rescaled {
        text,
        rescaled,
        remaining,
    }
}
