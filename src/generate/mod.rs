//! Component generation.
//!
//! Each [`IconSymbol`](crate::symbol::IconSymbol) becomes one component
//! source through [`ComponentGenerator`]; the results are collected into an
//! [`AggregatorManifest`] which renders the `index` component that
//! dispatches on an icon name.

mod aggregator;
mod component;
pub mod naming;

pub use aggregator::{render_aggregator, AggregatorManifest, AggregatorOutput, ManifestEntry};
pub use component::{ColorIndex, ComponentGenerator, GeneratedIcon, DEFAULT_FILL};
