use crate::models::{Image, Link, PageDescription};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

/// Options for turning an HTML document into a page description
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Public URL of the page; used to resolve relative references and to
    /// tell internal links from external ones.
    pub base_url: Option<Url>,
    /// The site is known to publish a sitemap even if the page does not link one
    pub assume_sitemap: bool,
}

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[src]").expect("img[src] selector should be valid"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("a[href] selector should be valid"));
static STRUCTURED_DATA_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json'], [itemscope]")
        .expect("structured data selector should be valid")
});
static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel='canonical'][href]").expect("canonical selector should be valid")
});
static SITEMAP_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link[rel='sitemap']").expect("sitemap selector should be valid"));

const SKIPPED_SCHEMES: [&str; 4] = ["mailto:", "tel:", "javascript:", "data:"];

pub fn extract_page(html: &str, options: &ExtractOptions) -> PageDescription {
    let document = Html::parse_document(html);

    PageDescription {
        title: extract_title(&document),
        description: extract_meta_description(&document),
        content: extract_body(&document),
        images: extract_images(&document, options),
        links: extract_links(&document, options),
        has_structured_data: document.select(&STRUCTURED_DATA_SELECTOR).next().is_some(),
        has_canonical_url: document.select(&CANONICAL_SELECTOR).next().is_some(),
        has_sitemap: options.assume_sitemap || document.select(&SITEMAP_SELECTOR).next().is_some(),
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_meta_description(document: &Html) -> String {
    document
        .select(&META_DESC_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn extract_body(document: &Html) -> String {
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| body.inner_html())
        .unwrap_or_else(|| document.root_element().html())
}

fn resolve(reference: &str, base_url: Option<&Url>) -> String {
    base_url
        .and_then(|base| base.join(reference).ok())
        .map(|url| url.to_string())
        .unwrap_or_else(|| reference.to_string())
}

fn extract_images(document: &Html, options: &ExtractOptions) -> Vec<Image> {
    document
        .select(&IMG_SELECTOR)
        .filter_map(|element| {
            let src = element.value().attr("src")?;
            Some(Image {
                alt_text: element.value().attr("alt").map(|s| s.to_string()),
                source_url: resolve(src, options.base_url.as_ref()),
            })
        })
        .collect()
}

/// Checks if a URL shares host and port with the page's base URL
fn is_same_site(url: &Url, base_url: &Url) -> bool {
    url.host_str() == base_url.host_str()
        && url.port_or_known_default() == base_url.port_or_known_default()
}

fn is_relative_reference(href: &str) -> bool {
    !href.starts_with("//") && Url::parse(href).is_err()
}

fn extract_links(document: &Html, options: &ExtractOptions) -> Vec<Link> {
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href").map(str::trim) else {
            continue;
        };

        let lowered = href.to_lowercase();
        if href.is_empty()
            || href.starts_with('#')
            || SKIPPED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
        {
            continue;
        }

        let (target_url, is_internal) = match &options.base_url {
            Some(base_url) => match base_url.join(href) {
                Ok(absolute_url) => {
                    if !matches!(absolute_url.scheme(), "http" | "https") {
                        continue;
                    }
                    let internal = is_same_site(&absolute_url, base_url);
                    (absolute_url.to_string(), internal)
                }
                Err(e) => {
                    tracing::debug!(href = %href, error = %e, "Skipping unresolvable link");
                    continue;
                }
            },
            None => {
                if let Ok(absolute_url) = Url::parse(href)
                    && !matches!(absolute_url.scheme(), "http" | "https")
                {
                    continue;
                }
                (href.to_string(), is_relative_reference(href))
            }
        };

        links.push(Link {
            target_url,
            anchor_text: element.text().collect::<String>().trim().to_string(),
            is_internal,
        });
    }

    links
}
