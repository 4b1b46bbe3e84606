//! Run configuration.
//!
//! A [`Configuration`] is resolved once per run from the optional
//! `iconfont.yaml` manifest and the command-line overrides, then passed by
//! reference to the generator and the font pipeline. Resolution validates
//! the symbol link before anything touches the network.

mod manifest;

use std::path::PathBuf;

use url::Url;

use crate::error::{IconfontError, Result};
use crate::font::RescaleMode;

pub use manifest::Manifest;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "iconfont.yaml";

/// Subdirectory of `component_output_dir` that receives the components.
pub const ICON_DIR_NAME: &str = "iconfont";

/// Resolved, immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Absolute https URL of the symbol script.
    pub symbol_source_url: Url,
    /// `true` for `.tsx`, `false` for `.js` with `.d.ts` companions.
    pub use_typed_output: bool,
    pub component_output_dir: PathBuf,
    pub style_output_file: PathBuf,
    pub font_family: String,
    pub icon_id_prefix: String,
    pub default_icon_size: u32,
    /// When false only the stylesheet is produced.
    pub generate_components: bool,
    pub rescale: RescaleMode,
}

/// Command-line values that take precedence over the manifest.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub src: Option<String>,
    pub font_family: Option<String>,
    pub prefix: Option<String>,
    pub components: Option<PathBuf>,
    pub style: Option<PathBuf>,
    pub size: Option<u32>,
    pub javascript: bool,
    pub no_components: bool,
    pub rescale_all: bool,
}

impl Configuration {
    /// Merge manifest and overrides and validate the result.
    pub fn resolve(manifest: Manifest, overrides: Overrides) -> Result<Self> {
        let raw_src = overrides
            .src
            .or(manifest.src)
            .filter(|src| !src.trim().is_empty())
            .ok_or_else(|| IconfontError::Config {
                message: "No symbol link configured".to_string(),
                help: Some(format!(
                    "Add `src: //at.alicdn.com/t/font_xxx.js` to {} or pass --src",
                    MANIFEST_FILENAME
                )),
            })?;

        let rescale = if overrides.rescale_all || manifest.rescale_all {
            RescaleMode::All
        } else {
            RescaleMode::First
        };

        Ok(Self {
            symbol_source_url: normalize_source_url(&raw_src)?,
            use_typed_output: manifest.typescript && !overrides.javascript,
            component_output_dir: overrides.components.unwrap_or(manifest.components),
            style_output_file: overrides.style.unwrap_or(manifest.style),
            font_family: overrides.font_family.unwrap_or(manifest.font_family),
            icon_id_prefix: overrides.prefix.unwrap_or(manifest.prefix),
            default_icon_size: overrides.size.unwrap_or(manifest.size),
            generate_components: !overrides.no_components,
            rescale,
        })
    }

    /// Defaults for everything except the symbol link.
    pub fn with_source(src: &str) -> Result<Self> {
        Self::resolve(
            Manifest {
                src: Some(src.to_string()),
                ..Manifest::default()
            },
            Overrides::default(),
        )
    }

    /// Directory the generated components live in.
    ///
    /// It sits inside `component_output_dir` and belongs to this tool: every
    /// run clears it. Files next to it are never touched.
    pub fn icon_dir(&self) -> PathBuf {
        self.component_output_dir.join(ICON_DIR_NAME)
    }

    /// Extension for component sources.
    pub fn component_extension(&self) -> &'static str {
        if self.use_typed_output {
            "tsx"
        } else {
            "js"
        }
    }

    /// Extension for plain script modules (the color helper).
    pub fn script_extension(&self) -> &'static str {
        if self.use_typed_output {
            "ts"
        } else {
            "js"
        }
    }
}

/// Validate a symbol link and pin it to https.
///
/// Accepts `//host/...`, `http://...` and `https://...`; anything else is
/// rejected. Protocol-relative and plain-http links are upgraded.
pub fn normalize_source_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let upgraded = if let Some(rest) = raw.strip_prefix("//") {
        format!("https://{}", rest)
    } else if let Some(rest) = raw.strip_prefix("http://") {
        format!("https://{}", rest)
    } else if raw.starts_with("https://") {
        raw.to_string()
    } else {
        return Err(invalid_source(raw, "must start with //, http:// or https://"));
    };

    let url = Url::parse(&upgraded).map_err(|e| invalid_source(raw, &e.to_string()))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid_source(raw, "missing host"));
    }

    Ok(url)
}

fn invalid_source(raw: &str, reason: &str) -> IconfontError {
    IconfontError::Config {
        message: format!("Invalid symbol link \"{}\": {}", raw, reason),
        help: Some("Use the Symbol link from iconfont.cn, e.g. //at.alicdn.com/t/font_xxx.js".to_string()),
    }
}
