//! Per-category metric extraction.
//!
//! Each extractor is a pure function of one slice of the page description
//! (plus the engine configuration where keywords or brand matter). Scores
//! start at 100, every rule applies independently, and the result is
//! clamped into `0..=100`.

use crate::models::{
    ContentMetrics, DescriptionMetrics, Image, ImageMetrics, Link, LinkMetrics, TechnicalMetrics,
    TitleMetrics,
};
use crate::seo_analyzer::EngineConfig;
use crate::text_match;

pub const TITLE_MIN_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 60;
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
pub const DESCRIPTION_MAX_LENGTH: usize = 160;
pub const THIN_CONTENT_WORDS: usize = 300;
pub const RICH_CONTENT_WORDS: usize = 600;
pub const MIN_KEYWORD_DENSITY: f64 = 0.5;
pub const MAX_KEYWORD_DENSITY: f64 = 3.0;
pub const MIN_IMAGES: usize = 3;
pub const MIN_INTERNAL_LINKS: usize = 3;
pub const MAX_EXTERNAL_LINKS: usize = 10;

/// Extensions treated as web-optimized image formats
pub const OPTIMIZED_IMAGE_EXTENSIONS: [&str; 3] = [".webp", ".jpg", ".png"];

const BASE_SCORE: i32 = 100;

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

pub fn extract_title(title: &str, config: &EngineConfig) -> TitleMetrics {
    let length = title.chars().count();
    let has_keyword = text_match::contains_any_keyword(title, config.keywords());
    let has_brand = text_match::contains_ignore_case(title, config.brand_name());

    let mut score = BASE_SCORE;
    if length < TITLE_MIN_LENGTH {
        score -= 20;
    } else if length > TITLE_MAX_LENGTH {
        score -= 15;
    } else {
        score += 10;
    }
    if !has_keyword {
        score -= 25;
    }
    if !has_brand {
        score -= 15;
    }

    TitleMetrics {
        length,
        has_keyword,
        has_brand,
        score: clamp_score(score),
    }
}

pub fn extract_description(description: &str, config: &EngineConfig) -> DescriptionMetrics {
    let length = description.chars().count();
    let has_keyword = text_match::contains_any_keyword(description, config.keywords());
    let has_call_to_action = text_match::has_call_to_action(description);

    let mut score = BASE_SCORE;
    if length < DESCRIPTION_MIN_LENGTH {
        score -= 20;
    } else if length > DESCRIPTION_MAX_LENGTH {
        score -= 15;
    } else {
        score += 10;
    }
    if !has_keyword {
        score -= 25;
    }
    if !has_call_to_action {
        score -= 10;
    }

    DescriptionMetrics {
        length,
        has_keyword,
        has_call_to_action,
        score: clamp_score(score),
    }
}

/// Percentage of words in `content` that are whole-word keyword hits.
pub fn keyword_density(content: &str, config: &EngineConfig) -> f64 {
    let words = text_match::word_count(content);
    if words == 0 {
        return 0.0;
    }

    let hits: usize = config
        .keywords()
        .map(|keyword| text_match::count_whole_word(content, keyword))
        .sum();

    hits as f64 * 100.0 / words as f64
}

pub fn extract_content(content: &str, config: &EngineConfig) -> ContentMetrics {
    let word_count = text_match::word_count(content);
    let keyword_density_percent = keyword_density(content, config);
    let has_heading_structure = text_match::has_heading_markup(content);
    let has_images = text_match::has_image_markup(content);
    let has_internal_links = text_match::has_internal_link_markup(content);

    let mut score = BASE_SCORE;
    if word_count < THIN_CONTENT_WORDS {
        score -= 30;
    } else if word_count < RICH_CONTENT_WORDS {
        score -= 15;
    } else {
        score += 10;
    }
    if keyword_density_percent < MIN_KEYWORD_DENSITY {
        score -= 20;
    } else if keyword_density_percent > MAX_KEYWORD_DENSITY {
        score -= 15;
    } else {
        score += 10;
    }
    if !has_heading_structure {
        score -= 15;
    }
    if !has_images {
        score -= 10;
    }
    if !has_internal_links {
        score -= 10;
    }

    ContentMetrics {
        word_count,
        keyword_density_percent,
        has_heading_structure,
        has_images,
        has_internal_links,
        score: clamp_score(score),
    }
}

fn is_optimized_format(source_url: &str) -> bool {
    let lowered = source_url.to_lowercase();
    OPTIMIZED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
}

pub fn extract_images(images: &[Image]) -> ImageMetrics {
    let count = images.len();
    let with_alt_text = images
        .iter()
        .filter(|img| img.alt_text.as_deref().is_some_and(|alt| !alt.trim().is_empty()))
        .count();
    let optimized_count = images
        .iter()
        .filter(|img| is_optimized_format(&img.source_url))
        .count();

    let mut score = BASE_SCORE;
    if count == 0 {
        score -= 30;
    } else if count < MIN_IMAGES {
        score -= 10;
    }
    if with_alt_text < count {
        score -= 20;
    }
    if optimized_count < count {
        score -= 15;
    }

    ImageMetrics {
        count,
        with_alt_text,
        optimized_count,
        score: clamp_score(score),
    }
}

pub fn extract_links(links: &[Link]) -> LinkMetrics {
    let internal = links.iter().filter(|link| link.is_internal).count();
    let external = links.len() - internal;
    let broken = 0;

    let mut score = BASE_SCORE;
    if internal == 0 {
        score -= 20;
    } else if internal < MIN_INTERNAL_LINKS {
        score -= 10;
    }
    if external == 0 {
        score -= 10;
    } else if external > MAX_EXTERNAL_LINKS {
        score -= 15;
    }
    if broken > 0 {
        score -= 25;
    }

    LinkMetrics {
        internal,
        external,
        broken,
        score: clamp_score(score),
    }
}

pub fn extract_technical(
    has_structured_data: bool,
    has_canonical_url: bool,
    has_sitemap: bool,
) -> TechnicalMetrics {
    let mut score = BASE_SCORE;
    if !has_structured_data {
        score -= 20;
    }
    if !has_canonical_url {
        score -= 15;
    }
    if !has_sitemap {
        score -= 10;
    }

    TechnicalMetrics {
        has_structured_data,
        has_canonical_url,
        has_sitemap,
        score: clamp_score(score),
    }
}
