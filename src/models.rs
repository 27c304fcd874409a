use serde::{Deserialize, Serialize};

/// Everything the engine needs to know about a single page.
///
/// Omitted fields deserialize to empty sentinels, but an explicit `null`
/// is rejected so that lengths and counts are always well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDescription {
    pub title: String,
    pub description: String,
    /// Raw text or markup of the page body
    pub content: String,
    pub images: Vec<Image>,
    pub links: Vec<Link>,
    pub has_structured_data: bool,
    pub has_canonical_url: bool,
    pub has_sitemap: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub alt_text: Option<String>,
    pub source_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub target_url: String,
    pub anchor_text: String,
    pub is_internal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Title,
    Description,
    Content,
    Images,
    Links,
    Technical,
}

impl Category {
    /// Categories in generation order
    pub const ALL: [Category; 6] = [
        Category::Title,
        Category::Description,
        Category::Content,
        Category::Images,
        Category::Links,
        Category::Technical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Title => "Title",
            Category::Description => "Description",
            Category::Content => "Content",
            Category::Images => "Images",
            Category::Links => "Links",
            Category::Technical => "Technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort weight, higher first
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub category: Category,
    pub message: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMetrics {
    pub length: usize,
    pub has_keyword: bool,
    pub has_brand: bool,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionMetrics {
    pub length: usize,
    pub has_keyword: bool,
    pub has_call_to_action: bool,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub word_count: usize,
    pub keyword_density_percent: f64,
    pub has_heading_structure: bool,
    pub has_images: bool,
    pub has_internal_links: bool,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetrics {
    pub count: usize,
    pub with_alt_text: usize,
    pub optimized_count: usize,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMetrics {
    pub internal: usize,
    pub external: usize,
    /// Reserved: link reachability is not checked, so this is always zero.
    pub broken: usize,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalMetrics {
    pub has_structured_data: bool,
    pub has_canonical_url: bool,
    pub has_sitemap: bool,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub title: TitleMetrics,
    pub description: DescriptionMetrics,
    pub content: ContentMetrics,
    pub images: ImageMetrics,
    pub links: LinkMetrics,
    pub technical: TechnicalMetrics,
}

impl PageMetrics {
    pub fn score(&self, category: Category) -> u8 {
        match category {
            Category::Title => self.title.score,
            Category::Description => self.description.score,
            Category::Content => self.content.score,
            Category::Images => self.images.score,
            Category::Links => self.links.score,
            Category::Technical => self.technical.score,
        }
    }

    /// Sub-scores in generation order
    pub fn scores(&self) -> [u8; 6] {
        Category::ALL.map(|category| self.score(category))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub metrics: PageMetrics,
}

impl AnalysisReport {
    pub fn recommendations_for(&self, category: Category) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |rec| rec.category == category)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Where the page description came from (usually a file path)
    pub source: String,
    pub report: AnalysisReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub keywords: Vec<String>,
    pub brand: String,
    pub pages: Vec<PageReport>,
    pub summary: BatchSummary,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_pages: usize,
    pub average_score: u8,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub high_priority: usize,
}
