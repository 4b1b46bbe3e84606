//! Init command implementation.
//!
//! Writes a starter `iconfont.yaml` with every field spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{normalize_source_url, Manifest, MANIFEST_FILENAME};
use crate::error::{IconfontError, Result};
use crate::output::{display_path, Printer};

/// Create a starter iconfont.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing iconfont.yaml
    #[arg(long)]
    pub force: bool,

    /// Symbol link to record in the manifest
    #[arg(long)]
    pub src: Option<String>,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(IconfontError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if let Some(src) = &args.src {
        normalize_source_url(src)?;
    }

    let yaml = starter_manifest(args.src.as_deref());

    fs::create_dir_all(&args.path).map_err(|e| IconfontError::Io {
        path: args.path.clone(),
        message: format!("Failed to create directory: {}", e),
    })?;
    fs::write(&manifest_path, &yaml).map_err(|e| IconfontError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    if args.src.is_none() {
        printer.info("Next", "paste your symbol link into `src` and run `iconfont build`");
    }

    Ok(())
}

/// Build YAML by hand so the defaults stay readable and commented.
fn starter_manifest(src: Option<&str>) -> String {
    let defaults = Manifest::default();
    let mut yaml = String::new();

    yaml.push_str("# Symbol link from iconfont.cn (Project > Symbol)\n");
    match src {
        Some(src) => yaml.push_str(&format!("src: \"{}\"\n", src)),
        None => yaml.push_str("# src: \"//at.alicdn.com/t/font_xxx.js\"\n"),
    }
    yaml.push_str(&format!("font_family: {}\n", defaults.font_family));
    yaml.push_str(&format!("prefix: {}\n", defaults.prefix));
    yaml.push_str(&format!("typescript: {}\n", defaults.typescript));
    yaml.push_str(&format!("components: {}\n", defaults.components.display()));
    yaml.push_str(&format!("style: {}\n", defaults.style.display()));
    yaml.push_str(&format!("size: {}\n", defaults.size));
    yaml.push_str(&format!("rescale_all: {}\n", defaults.rescale_all));

    yaml
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
            src: Some("//at.alicdn.com/t/font_123.js".to_string()),
        };

        run(args, &Printer::quiet()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.src.as_deref(), Some("//at.alicdn.com/t/font_123.js"));
        assert_eq!(manifest.prefix, "icon");
        assert_eq!(manifest.size, 24);
    }

    #[test]
    fn test_starter_manifest_round_trips_defaults() {
        let manifest = Manifest::parse(&starter_manifest(None)).unwrap();

        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "prefix: ic").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
            src: None,
        };

        let result = run(args, &Printer::quiet());
        assert!(matches!(result, Err(IconfontError::Config { .. })));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "prefix: ic").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
            src: None,
        };

        run(args, &Printer::quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("prefix: icon"));
    }

    #[test]
    fn test_init_rejects_invalid_src() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
            src: Some("ftp://example.com/font.js".to_string()),
        };

        assert!(run(args, &Printer::quiet()).is_err());
        assert!(!dir.path().join(MANIFEST_FILENAME).exists());
    }
}
