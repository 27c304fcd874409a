use crate::metrics;
use crate::models::{AnalysisReport, PageDescription, PageMetrics, Recommendation};
use crate::recommendations;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Site-level settings the analyzer scores against.
///
/// Keywords and brand are stored lower-cased so every match is
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    keywords: BTreeSet<String>,
    brand_name: String,
}

impl EngineConfig {
    pub fn new<I, S>(keywords: I, brand_name: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Self {
            keywords,
            brand_name: brand_name.trim().to_lowercase(),
        }
    }

    pub fn keywords(&self) -> impl Iterator<Item = &String> {
        self.keywords.iter()
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }
}

pub struct SeoAnalyzer {
    config: EngineConfig,
}

impl SeoAnalyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores a page and collects its recommendations, most urgent first.
    pub fn analyze_page(&self, page: &PageDescription) -> AnalysisReport {
        let title = metrics::extract_title(&page.title, &self.config);
        let description = metrics::extract_description(&page.description, &self.config);
        let content = metrics::extract_content(&page.content, &self.config);
        let images = metrics::extract_images(&page.images);
        let links = metrics::extract_links(&page.links);
        let technical = metrics::extract_technical(
            page.has_structured_data,
            page.has_canonical_url,
            page.has_sitemap,
        );

        // Generation order: title, description, content, images, links, technical
        let mut recs: Vec<Recommendation> = Vec::new();
        recs.extend(recommendations::recommend_title(&title));
        recs.extend(recommendations::recommend_description(&description));
        recs.extend(recommendations::recommend_content(&content));
        recs.extend(recommendations::recommend_images(&images));
        recs.extend(recommendations::recommend_links(&links));
        recs.extend(recommendations::recommend_technical(&technical));

        // Stable, so equal priorities keep generation order
        recs.sort_by_key(|rec| Reverse(rec.priority.weight()));

        let metrics = PageMetrics {
            title,
            description,
            content,
            images,
            links,
            technical,
        };
        let overall_score = overall_score(&metrics.scores());

        tracing::debug!(
            overall_score,
            recommendations = recs.len(),
            "Page analysis complete"
        );

        AnalysisReport {
            overall_score,
            recommendations: recs,
            metrics,
        }
    }

    pub fn analyze_pages<'a, I>(&self, pages: I) -> Vec<AnalysisReport>
    where
        I: IntoIterator<Item = &'a PageDescription>,
    {
        pages.into_iter().map(|page| self.analyze_page(page)).collect()
    }
}

/// Mean of the sub-scores, rounded half up (62.5 becomes 63).
pub fn overall_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    let count = scores.len() as u32;
    // Integer form of floor(sum / count + 0.5)
    let rounded = (2 * sum + count) / (2 * count);
    rounded.min(100) as u8
}
