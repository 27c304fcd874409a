pub mod cli;
pub mod config;
pub mod extractor;
pub mod input;
pub mod metrics;
pub mod models;
pub mod recommendations;
pub mod reporter;
pub mod seo_analyzer;
pub mod text_match;

use anyhow::{Context, Result};
use cli::Cli;
use colored::*;
use config::Config;
use extractor::ExtractOptions;
use models::PageReport;
use reporter::Reporter;
use seo_analyzer::SeoAnalyzer;
use std::path::PathBuf;
use url::Url;

pub async fn run(args: Cli) -> Result<()> {
    let args = match Config::load(args.config.as_deref())? {
        Some(config) => config.merge_with_cli(&args),
        None => args,
    };

    if args.inputs.is_empty() {
        anyhow::bail!("At least one input file is required");
    }

    if !matches!(args.output_format(), "text" | "json") {
        anyhow::bail!("Output format must be text or json");
    }

    let base_url = args
        .base_url
        .as_deref()
        .map(|raw| Url::parse(raw).with_context(|| format!("Invalid base URL: {}", raw)))
        .transpose()?;

    let options = ExtractOptions {
        base_url,
        assume_sitemap: args.sitemap,
    };

    let engine_config = args.engine_config();
    if engine_config.keywords().next().is_none() {
        tracing::warn!("No target keywords configured; keyword checks will fail");
    }

    let text_output = args.output_format() == "text";
    if text_output {
        println!(
            "{}",
            "PageScore - On-page SEO Analyzer".bright_cyan().bold()
        );
        println!("{}", "=".repeat(50).bright_blue());
        println!();
    }

    if args.verbose && text_output {
        println!("{}", "Loading pages...".bright_yellow());
    }

    let paths: Vec<PathBuf> = args.inputs.iter().map(PathBuf::from).collect();
    let pages = input::load_pages(
        &paths,
        &options,
        args.concurrency_limit(),
        args.verbose && text_output,
    )
    .await?;

    let analyzer = SeoAnalyzer::new(engine_config);
    let page_reports: Vec<PageReport> = pages
        .iter()
        .map(|(path, page)| {
            let report = analyzer.analyze_page(page);
            tracing::info!(
                source = %path.display(),
                overall_score = report.overall_score,
                "Analyzed page"
            );
            PageReport {
                source: path.display().to_string(),
                report,
            }
        })
        .collect();

    let report = Reporter::generate_report(analyzer.config(), page_reports);

    match args.output_format() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&report);
        }
    }

    if let Some(filename) = args.save {
        Reporter::save_json_report(&report, &filename)?;
    }

    Ok(())
}
