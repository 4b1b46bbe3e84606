//! Build command implementation.
//!
//! Resolves the configuration, fetches the symbol script and stylesheet, and
//! writes components plus the embedded-font stylesheet.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Configuration, Manifest, Overrides, MANIFEST_FILENAME};
use crate::error::{IconfontError, Result};
use crate::fetch::HttpFetcher;
use crate::output::{display_path, plural, Printer};
use crate::pipeline;

/// Generate icon components and the embedded-font stylesheet
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Project manifest (default: ./iconfont.yaml when present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Symbol link from iconfont.cn, e.g. //at.alicdn.com/t/font_xxx.js
    #[arg(long)]
    pub src: Option<String>,

    /// Font family used in the embedded @font-face rule
    #[arg(long)]
    pub font_family: Option<String>,

    /// Prefix stripped from symbol ids
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output directory for components
    #[arg(long)]
    pub components: Option<PathBuf>,

    /// Output stylesheet file
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Default icon size
    #[arg(long)]
    pub size: Option<u32>,

    /// Emit .js components with .d.ts declarations instead of .tsx
    #[arg(long)]
    pub javascript: bool,

    /// Only build the stylesheet
    #[arg(long)]
    pub no_components: bool,

    /// Double every px value, not just the first
    #[arg(long)]
    pub rescale_all: bool,
}

impl BuildArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            src: self.src.clone(),
            font_family: self.font_family.clone(),
            prefix: self.prefix.clone(),
            components: self.components.clone(),
            style: self.style.clone(),
            size: self.size,
            javascript: self.javascript,
            no_components: self.no_components,
            rescale_all: self.rescale_all,
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(args.config.as_deref())?;
    let config = Configuration::resolve(manifest, args.overrides())?;

    let fetcher = HttpFetcher::new()?;
    let summary = pipeline::run(&config, &fetcher, printer)?;

    let mut outputs = Vec::new();
    if let Some(dir) = &summary.component_dir {
        outputs.push(format!(
            "{} to {}",
            plural(summary.icons, "icon", "icons"),
            printer.cyan(&display_path(dir))
        ));
    }
    outputs.push(format!(
        "stylesheet to {}",
        printer.cyan(&display_path(&summary.stylesheet))
    ));
    printer.status("Finished", &outputs.join(", "));

    Ok(())
}

/// Load the manifest named on the command line, or `./iconfont.yaml` if it
/// exists, or fall back to defaults.
fn load_manifest(explicit: Option<&Path>) -> Result<Manifest> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(IconfontError::Config {
                    message: format!("Manifest not found: {}", path.display()),
                    help: Some("Run `iconfont init` to create one".to_string()),
                });
            }
            Manifest::load(path)
        }
        None => {
            let default = Path::new(MANIFEST_FILENAME);
            if default.exists() {
                Manifest::load(default)
            } else {
                Ok(Manifest::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_overrides_from_args() {
        let args = BuildArgs {
            src: Some("//cdn.example.com/font.js".to_string()),
            size: Some(20),
            javascript: true,
            ..BuildArgs::default()
        };

        let overrides = args.overrides();

        assert_eq!(overrides.src.as_deref(), Some("//cdn.example.com/font.js"));
        assert_eq!(overrides.size, Some(20));
        assert!(overrides.javascript);
        assert!(!overrides.no_components);
    }

    #[test]
    fn test_load_explicit_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.yaml");
        fs::write(&path, "src: //cdn.example.com/font.js\nprefix: ic\n").unwrap();

        let manifest = load_manifest(Some(&path)).unwrap();

        assert_eq!(manifest.prefix, "ic");
    }

    #[test]
    fn test_missing_explicit_manifest() {
        let result = load_manifest(Some(Path::new("/nonexistent/iconfont.yaml")));
        assert!(matches!(result, Err(IconfontError::Config { .. })));
    }

    #[test]
    fn test_invalid_src_fails_before_network() {
        let args = BuildArgs {
            config: None,
            src: Some("at.alicdn.com/t/font.js".to_string()),
            ..BuildArgs::default()
        };

        let result = run(args, &Printer::quiet());
        assert!(matches!(result, Err(IconfontError::Config { .. })));
    }
}
