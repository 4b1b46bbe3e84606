use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Which network step a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// The icon-symbol script.
    Document,
    /// The webfont stylesheet next to the symbol script.
    Stylesheet,
    /// The binary font referenced by the font-face rule.
    Font,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStage::Document => write!(f, "symbol document"),
            FetchStage::Stylesheet => write!(f, "stylesheet"),
            FetchStage::Font => write!(f, "font binary"),
        }
    }
}

/// Main error type for iconfont operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconfontError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconfont::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(iconfont::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unable to transform element <{element}> in icon \"{icon}\"")]
    #[diagnostic(
        code(iconfont::unsupported_element),
        help("Only <path> children are supported inside a <symbol>")
    )]
    UnsupportedElement { icon: String, element: String },

    #[error("Failed to fetch {stage} from {url}: {message}")]
    #[diagnostic(code(iconfont::network))]
    Network {
        stage: FetchStage,
        url: String,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconfont::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Template not found: {name}")]
    #[diagnostic(code(iconfont::template))]
    Template { name: String },

    #[error("Not a decimal number: {value}")]
    #[diagnostic(code(iconfont::decimal))]
    Decimal { value: String },
}

pub type Result<T> = std::result::Result<T, IconfontError>;
