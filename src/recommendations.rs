//! Recommendation generators, one per category.
//!
//! A generator only looks at the metrics record produced by the matching
//! extractor. A satisfied check never yields a recommendation.

use crate::metrics::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, MAX_EXTERNAL_LINKS, MAX_KEYWORD_DENSITY,
    MIN_IMAGES, MIN_KEYWORD_DENSITY, THIN_CONTENT_WORDS, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::models::{
    Category, ContentMetrics, DescriptionMetrics, ImageMetrics, LinkMetrics, Priority,
    Recommendation, RecommendationKind, TechnicalMetrics, TitleMetrics,
};

fn recommendation(
    kind: RecommendationKind,
    category: Category,
    priority: Priority,
    message: &str,
    fix: Option<String>,
) -> Recommendation {
    Recommendation {
        kind,
        category,
        message: message.to_string(),
        priority,
        fix,
    }
}

pub fn recommend_title(metrics: &TitleMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.length < TITLE_MIN_LENGTH {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Title,
            Priority::High,
            "Title is too short. Aim for 30-60 characters.",
            Some(format!(
                "Expand the title by at least {} characters with descriptive terms",
                TITLE_MIN_LENGTH - metrics.length
            )),
        ));
    } else if metrics.length > TITLE_MAX_LENGTH {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Title,
            Priority::Medium,
            "Title is too long. Keep it under 60 characters.",
            Some(format!(
                "Trim {} characters so the title is not truncated in search results",
                metrics.length - TITLE_MAX_LENGTH
            )),
        ));
    }

    if !metrics.has_keyword {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Title,
            Priority::High,
            "Title should include your target keyword.",
            Some("Place the primary keyword near the start of the title".to_string()),
        ));
    }

    if !metrics.has_brand {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Title,
            Priority::Medium,
            "Consider including your brand name in the title.",
            Some("Append the brand name, e.g. \"Page Topic | Brand\"".to_string()),
        ));
    }

    recs
}

pub fn recommend_description(metrics: &DescriptionMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.length < DESCRIPTION_MIN_LENGTH {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Description,
            Priority::High,
            "Meta description is too short. Aim for 120-160 characters.",
            Some(format!(
                "Add at least {} characters summarizing what the page offers",
                DESCRIPTION_MIN_LENGTH - metrics.length
            )),
        ));
    } else if metrics.length > DESCRIPTION_MAX_LENGTH {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Description,
            Priority::Medium,
            "Meta description is too long. Keep it under 160 characters.",
            Some(format!(
                "Trim {} characters so the snippet is not cut off",
                metrics.length - DESCRIPTION_MAX_LENGTH
            )),
        ));
    }

    if !metrics.has_keyword {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Description,
            Priority::High,
            "Meta description should include your target keyword.",
            Some("Work the primary keyword naturally into the first sentence".to_string()),
        ));
    }

    if !metrics.has_call_to_action {
        recs.push(recommendation(
            RecommendationKind::Info,
            Category::Description,
            Priority::Low,
            "Add a call to action to the meta description.",
            Some("End with a phrase such as \"Learn more\" or \"Get started\"".to_string()),
        ));
    }

    recs
}

pub fn recommend_content(metrics: &ContentMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.word_count < THIN_CONTENT_WORDS {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Content,
            Priority::High,
            "Content is too thin. Aim for at least 300 words.",
            Some(format!(
                "Add roughly {} more words of useful, original content",
                THIN_CONTENT_WORDS - metrics.word_count
            )),
        ));
    }

    if metrics.keyword_density_percent < MIN_KEYWORD_DENSITY {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Content,
            Priority::Medium,
            "Keyword density is low. Use your target keyword more often.",
            Some(format!(
                "Current density is {:.2}%; aim for {}-{}%",
                metrics.keyword_density_percent, MIN_KEYWORD_DENSITY, MAX_KEYWORD_DENSITY
            )),
        ));
    } else if metrics.keyword_density_percent > MAX_KEYWORD_DENSITY {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Content,
            Priority::High,
            "Keyword density is too high. Reduce keyword stuffing.",
            Some(format!(
                "Current density is {:.2}%; replace repetitions with synonyms to stay under {}%",
                metrics.keyword_density_percent, MAX_KEYWORD_DENSITY
            )),
        ));
    }

    if !metrics.has_heading_structure {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Content,
            Priority::Medium,
            "Content lacks heading structure.",
            Some("Break the content into sections with H2 and H3 headings".to_string()),
        ));
    }

    if !metrics.has_images {
        recs.push(recommendation(
            RecommendationKind::Info,
            Category::Content,
            Priority::Low,
            "Consider adding images to the content.",
            Some("Place a relevant image with alt text near the top of the content".to_string()),
        ));
    }

    recs
}

pub fn recommend_images(metrics: &ImageMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.count == 0 {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Images,
            Priority::Medium,
            "Page has no images. Visual content improves engagement.",
            Some(format!(
                "Add at least {} descriptive images with alt text",
                MIN_IMAGES
            )),
        ));
    }

    if metrics.with_alt_text < metrics.count {
        let missing = metrics.count - metrics.with_alt_text;
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Images,
            Priority::High,
            &format!("{} image(s) missing alt text.", missing),
            Some("Describe each image in its alt attribute".to_string()),
        ));
    }

    if metrics.optimized_count < metrics.count {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Images,
            Priority::Medium,
            &format!(
                "{} image(s) are not in an optimized format.",
                metrics.count - metrics.optimized_count
            ),
            Some("Serve images as WebP, JPEG or PNG".to_string()),
        ));
    }

    recs
}

pub fn recommend_links(metrics: &LinkMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.internal == 0 {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Links,
            Priority::High,
            "Page has no internal links.",
            Some("Link to at least three related pages on your site".to_string()),
        ));
    }

    if metrics.external == 0 {
        recs.push(recommendation(
            RecommendationKind::Info,
            Category::Links,
            Priority::Low,
            "Consider linking to authoritative external sources.",
            Some("Cite one or two reputable external sources that support the content".to_string()),
        ));
    } else if metrics.external > MAX_EXTERNAL_LINKS {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Links,
            Priority::Medium,
            "Page has too many external links.",
            Some(format!(
                "Keep external links to {} or fewer",
                MAX_EXTERNAL_LINKS
            )),
        ));
    }

    if metrics.broken > 0 {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Links,
            Priority::High,
            &format!("{} broken link(s) found.", metrics.broken),
            Some("Fix or remove links that no longer resolve".to_string()),
        ));
    }

    recs
}

pub fn recommend_technical(metrics: &TechnicalMetrics) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if !metrics.has_structured_data {
        recs.push(recommendation(
            RecommendationKind::Error,
            Category::Technical,
            Priority::High,
            "Page is missing structured data.",
            Some("Add a JSON-LD block describing the page (e.g. Article or Organization)".to_string()),
        ));
    }

    if !metrics.has_canonical_url {
        recs.push(recommendation(
            RecommendationKind::Warning,
            Category::Technical,
            Priority::Medium,
            "Page is missing a canonical URL.",
            Some("Add <link rel=\"canonical\" href=\"...\"> to the head".to_string()),
        ));
    }

    if !metrics.has_sitemap {
        recs.push(recommendation(
            RecommendationKind::Info,
            Category::Technical,
            Priority::Low,
            "No sitemap detected.",
            Some("Publish a sitemap.xml and submit it to search engines".to_string()),
        ));
    }

    recs
}
