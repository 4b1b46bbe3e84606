//! iconfont - icon component and webfont stylesheet generator
//!
//! Turns an iconfont.cn symbol link into one react-native-svg component per
//! icon plus an `index` component that picks an icon by name, and rewrites
//! the matching webfont stylesheet so the font travels inline.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod font;
pub mod generate;
pub mod output;
pub mod pipeline;
pub mod symbol;
pub mod templates;
pub mod writer;

pub use config::{Configuration, Manifest, Overrides};
pub use error::{FetchStage, IconfontError, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use font::{FontPipeline, RenderedStylesheet, RescaleMode, StylesheetReport};
pub use generate::{AggregatorManifest, ComponentGenerator, GeneratedIcon};
pub use pipeline::{run, RunSummary};
pub use symbol::{parse_symbol_document, IconSymbol, ShapeElement, ShapeKind};
pub use templates::TemplateStore;
