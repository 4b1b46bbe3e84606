//! Project manifest (iconfont.yaml) parsing.
//!
//! Every field is optional in the file; missing ones fall back to the
//! defaults the iconfont.cn tooling has always used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconfontError, Result};

/// Project manifest loaded from iconfont.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Symbol link copied from iconfont.cn, e.g. `//at.alicdn.com/t/font_123.js`.
    pub src: Option<String>,

    /// Family name written into the embedded font-face rule.
    pub font_family: String,

    /// Prefix stripped from symbol ids before naming components.
    pub prefix: String,

    /// Emit `.tsx`/`.ts` sources instead of `.js` plus `.d.ts` stubs.
    pub typescript: bool,

    /// Directory that receives the generated components.
    pub components: PathBuf,

    /// Stylesheet file that receives the embedded font.
    pub style: PathBuf,

    /// Default rendered icon size.
    pub size: u32,

    /// Rescale every `px` value instead of only the first one.
    pub rescale_all: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            src: None,
            font_family: "iconfont".to_string(),
            prefix: "icon".to_string(),
            typescript: true,
            components: PathBuf::from("./src/components/icon"),
            style: PathBuf::from("./src/iconfont.scss"),
            size: 24,
            rescale_all: false,
        }
    }
}

impl Manifest {
    /// Load manifest from an iconfont.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconfontError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconfontError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check iconfont.yaml syntax".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("src: //at.alicdn.com/t/font_1.js").unwrap();

        assert_eq!(manifest.src.as_deref(), Some("//at.alicdn.com/t/font_1.js"));
        assert_eq!(manifest.font_family, "iconfont");
        assert_eq!(manifest.prefix, "icon");
        assert!(manifest.typescript);
        assert_eq!(manifest.size, 24);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
src: https://at.alicdn.com/t/font_2.js
font_family: brand
prefix: bi
typescript: false
components: app/icons
style: app/brand.css
size: 32
rescale_all: true
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.font_family, "brand");
        assert_eq!(manifest.prefix, "bi");
        assert!(!manifest.typescript);
        assert_eq!(manifest.components, PathBuf::from("app/icons"));
        assert_eq!(manifest.style, PathBuf::from("app/brand.css"));
        assert_eq!(manifest.size, 32);
        assert!(manifest.rescale_all);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        assert!(Manifest::parse("size: [1, 2").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Manifest::load(Path::new("/nonexistent/iconfont.yaml"));
        assert!(matches!(result, Err(IconfontError::Io { .. })));
    }
}
