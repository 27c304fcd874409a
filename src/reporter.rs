use crate::models::{
    BatchReport, BatchSummary, Category, PageReport, Priority, RecommendationKind,
};
use crate::seo_analyzer::{EngineConfig, overall_score};
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::Write;

pub struct Reporter;

impl Reporter {
    pub fn generate_report(config: &EngineConfig, pages: Vec<PageReport>) -> BatchReport {
        let summary = Self::calculate_summary(&pages);
        let timestamp = chrono::Utc::now().to_rfc3339();

        BatchReport {
            keywords: config.keywords().cloned().collect(),
            brand: config.brand_name().to_string(),
            pages,
            summary,
            generated_at: timestamp,
        }
    }

    fn calculate_summary(pages: &[PageReport]) -> BatchSummary {
        let mut errors = 0;
        let mut warnings = 0;
        let mut infos = 0;
        let mut high_priority = 0;

        for page in pages {
            for rec in &page.report.recommendations {
                match rec.kind {
                    RecommendationKind::Error => errors += 1,
                    RecommendationKind::Warning => warnings += 1,
                    RecommendationKind::Info => infos += 1,
                }
                if rec.priority == Priority::High {
                    high_priority += 1;
                }
            }
        }

        let scores: Vec<u8> = pages.iter().map(|page| page.report.overall_score).collect();

        BatchSummary {
            total_pages: pages.len(),
            average_score: overall_score(&scores),
            errors,
            warnings,
            infos,
            high_priority,
        }
    }

    fn colored_score(score: u8) -> ColoredString {
        let text = format!("{:>3}/100", score);
        if score >= 80 {
            text.bright_green()
        } else if score >= 50 {
            text.yellow()
        } else {
            text.bright_red()
        }
    }

    pub fn print_text_report(report: &BatchReport) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "PageScore - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!(
            "{}: {}",
            "Keywords".bright_white().bold(),
            if report.keywords.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                report.keywords.join(", ")
            }
        );
        println!(
            "{}: {}",
            "Brand".bright_white().bold(),
            if report.brand.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                report.brand.clone()
            }
        );
        println!(
            "{}: {}",
            "Generated".bright_white().bold(),
            report.generated_at
        );
        println!();

        // Summary
        println!("{}", "Summary".bright_yellow().bold().underline());
        println!(
            "  Pages Analyzed:      {}",
            report.summary.total_pages.to_string().bright_green()
        );
        println!(
            "  Average Score:       {}",
            Self::colored_score(report.summary.average_score)
        );
        println!(
            "  Errors:              {}",
            if report.summary.errors > 0 {
                report.summary.errors.to_string().bright_red()
            } else {
                report.summary.errors.to_string().bright_green()
            }
        );
        println!(
            "  Warnings:            {}",
            if report.summary.warnings > 0 {
                report.summary.warnings.to_string().yellow()
            } else {
                report.summary.warnings.to_string().bright_green()
            }
        );
        println!(
            "  Info:                {}",
            report.summary.infos.to_string().bright_cyan()
        );
        println!(
            "  High Priority:       {}",
            report.summary.high_priority.to_string().bright_white()
        );

        for page in &report.pages {
            println!();
            println!("{} {}", "Page:".bright_white().bold(), page.source);
            println!(
                "  Overall: {}",
                Self::colored_score(page.report.overall_score)
            );

            for category in Category::ALL {
                println!(
                    "    {:<12} {}",
                    category.label(),
                    Self::colored_score(page.report.metrics.score(category))
                );
            }

            if page.report.recommendations.is_empty() {
                println!("  {}", "No recommendations".bright_green());
                continue;
            }

            println!("  Recommendations:");
            for rec in &page.report.recommendations {
                let kind_str = match rec.kind {
                    RecommendationKind::Error => "ERROR".bright_red(),
                    RecommendationKind::Warning => "WARN ".yellow(),
                    RecommendationKind::Info => "INFO ".bright_cyan(),
                };
                let priority_str = match rec.priority {
                    Priority::High => "high  ",
                    Priority::Medium => "medium",
                    Priority::Low => "low   ",
                };
                println!(
                    "    [{}] ({}) {}: {}",
                    kind_str,
                    priority_str,
                    rec.category.label(),
                    rec.message
                );
                if let Some(fix) = &rec.fix {
                    println!("        {} {}", "fix:".dimmed(), fix);
                }
            }
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    pub fn save_json_report(report: &BatchReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename))?;
        file.write_all(json.as_bytes())?;
        tracing::info!(path = %filename, "Report saved");
        Ok(())
    }
}
