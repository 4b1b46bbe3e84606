//! One full run: components first, then the stylesheet.
//!
//! Nothing is rolled back on failure. Files written before the failing
//! step stay on disk; the next run clears the component directory and
//! overwrites the stylesheet.

use std::path::PathBuf;

use crate::config::Configuration;
use crate::error::{FetchStage, Result};
use crate::fetch::Fetch;
use crate::font::{FontPipeline, StylesheetReport};
use crate::generate::naming::component_name;
use crate::generate::{render_aggregator, AggregatorManifest, ComponentGenerator};
use crate::output::{display_path, plural, Printer};
use crate::symbol::{parse_symbol_document, IconSymbol};
use crate::templates::TemplateStore;
use crate::writer::{write_file, ComponentWriter};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Case branches in the aggregator (0 when components were skipped).
    pub icons: usize,
    /// Directory holding the components, if they were generated.
    pub component_dir: Option<PathBuf>,
    pub stylesheet: PathBuf,
    pub report: StylesheetReport,
}

/// Run the whole pipeline against `fetcher`.
pub fn run<F: Fetch>(config: &Configuration, fetcher: &F, printer: &Printer) -> Result<RunSummary> {
    let templates = TemplateStore::embedded();

    let mut icons = 0;
    let mut component_dir = None;
    if config.generate_components {
        printer.status("Fetching", config.symbol_source_url.as_str());
        let script = fetcher.fetch_text(FetchStage::Document, &config.symbol_source_url)?;
        let symbols = parse_symbol_document(&script)?;

        let manifest = write_components(config, &symbols, &templates, printer)?;
        icons = manifest.len();
        component_dir = Some(config.icon_dir());
    }

    let stylesheet = FontPipeline::new(config, fetcher, printer).build_stylesheet()?;
    report_stylesheet(&stylesheet.report, printer);

    printer.status("Writing", &display_path(&config.style_output_file));
    write_file(&config.style_output_file, &stylesheet.text)?;

    Ok(RunSummary {
        icons,
        component_dir,
        stylesheet: config.style_output_file.clone(),
        report: stylesheet.report,
    })
}

/// Generate and write every component plus the aggregator.
///
/// Icons are processed in document order. A component name already held by
/// another id gets a numeric suffix. An unsupported element stops the loop;
/// components written before it are kept.
pub fn write_components(
    config: &Configuration,
    symbols: &[IconSymbol],
    templates: &TemplateStore,
    printer: &Printer,
) -> Result<AggregatorManifest> {
    let writer = ComponentWriter::new(config);
    writer.prepare()?;
    writer.write_helper(templates)?;

    let generator = ComponentGenerator::new(config, templates);
    let mut manifest = AggregatorManifest::new();

    for symbol in symbols {
        let trimmed_id = generator.trimmed_id(symbol);
        let derived = component_name(&trimmed_id);
        let name = manifest.claim_name(&trimmed_id, &derived);
        if name != derived {
            printer.warning(
                "Renamed",
                &format!("\"{}\" to {}: {} is already taken", trimmed_id, name, derived),
            );
        }

        let icon = generator.render(symbol, trimmed_id, name).inspect_err(|_| {
            printer.error(
                "Failed",
                &format!("{} ({} kept)", symbol.id, plural(manifest.len(), "icon", "icons")),
            );
        })?;
        writer.write_icon(&icon)?;
        printer.status(
            "Generated",
            &format!("{} ({})", icon.component_name, symbol.id),
        );

        if manifest.record(&icon).is_some() {
            printer.warning(
                "Replaced",
                &format!(
                    "\"{}\" is defined twice; {} now renders {}",
                    icon.trimmed_id, icon.component_name, symbol.id
                ),
            );
        }
    }

    let aggregator = render_aggregator(&manifest, config, templates)?;
    let index = writer.write_aggregator(&aggregator)?;
    printer.status(
        "Generated",
        &format!(
            "{} ({})",
            display_path(&index),
            plural(manifest.len(), "icon", "icons")
        ),
    );

    Ok(manifest)
}

fn report_stylesheet(report: &StylesheetReport, printer: &Printer) {
    if let Some(url) = &report.font_url {
        printer.info("Embedded", url.as_str());
    }
    printer.info(
        "Rescaled",
        &plural(report.rescaled, "px value", "px values"),
    );
    if report.remaining > 0 {
        printer.warning(
            "Unscaled",
            &format!(
                "{} left as is; set rescale_all to double them too",
                plural(report.remaining, "px value", "px values")
            ),
        );
    }
}
