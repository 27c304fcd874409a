use pagescore::extractor::{ExtractOptions, extract_page};
use pagescore::models::{Category, PageDescription};
use pagescore::seo_analyzer::{EngineConfig, SeoAnalyzer};
use url::Url;

const GUIDE_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Acme WebDev Guides for Modern Teams</title>
  <meta name="description" content="Practical webdev guides from Acme. Learn more about shipping faster.">
  <link rel="canonical" href="https://acme.test/guides/">
  <link rel="sitemap" href="/sitemap.xml">
  <script type="application/ld+json">{"@type": "Article"}</script>
</head>
<body>
  <h1>Guides</h1>
  <img src="/a.webp" alt="A">
  <img src="b.png" alt="B">
  <img src="c.jpg" alt="C">
  <img alt="no source">
  <a href="/about">  About us  </a>
  <a href="intro">Intro</a>
  <a href="https://ACME.test/blog">Blog</a>
  <a href="https://acme.test:8443/admin">Admin</a>
  <a href="https://developer.mozilla.org/">MDN</a>
  <a href="tel:123">Call</a>
  <a href="javascript:void(0)">Menu</a>
  <a href="#top">Top</a>
  <a href="ftp://files.acme.test/x">Files</a>
</body>
</html>"##;

fn options() -> ExtractOptions {
    ExtractOptions {
        base_url: Some(Url::parse("https://acme.test/guides/").unwrap()),
        assume_sitemap: false,
    }
}

fn analyzer() -> SeoAnalyzer {
    SeoAnalyzer::new(EngineConfig::new(["webdev"], "Acme"))
}

#[test]
fn test_extracted_links_are_classified_against_base_url() {
    let page = extract_page(GUIDE_PAGE, &options());

    let links: Vec<_> = page
        .links
        .iter()
        .map(|l| (l.target_url.as_str(), l.is_internal))
        .collect();
    assert_eq!(
        links,
        vec![
            ("https://acme.test/about", true),
            ("https://acme.test/guides/intro", true),
            ("https://acme.test/blog", true),
            ("https://acme.test:8443/admin", false),
            ("https://developer.mozilla.org/", false),
        ]
    );
    assert_eq!(page.links[0].anchor_text, "About us");
}

#[test]
fn test_extracted_images_resolve_and_skip_missing_sources() {
    let page = extract_page(GUIDE_PAGE, &options());

    let sources: Vec<_> = page.images.iter().map(|i| i.source_url.as_str()).collect();
    assert_eq!(
        sources,
        vec![
            "https://acme.test/a.webp",
            "https://acme.test/guides/b.png",
            "https://acme.test/guides/c.jpg",
        ]
    );
    assert!(page.images.iter().all(|i| i.alt_text.is_some()));
}

#[test]
fn test_extracted_page_scores_through_analyzer() {
    let page = extract_page(GUIDE_PAGE, &options());
    let report = analyzer().analyze_page(&page);
    let metrics = &report.metrics;

    assert_eq!(metrics.title.score, 100);
    assert!(metrics.description.has_keyword);
    assert!(metrics.description.has_call_to_action);
    assert!(metrics.content.has_heading_structure);
    assert!(metrics.content.has_images);
    assert!(metrics.content.has_internal_links);
    assert_eq!(metrics.images.score, 100);
    assert_eq!(metrics.links.internal, 3);
    assert_eq!(metrics.links.external, 2);
    assert_eq!(metrics.links.score, 100);
    assert_eq!(metrics.technical.score, 100);

    assert_eq!(report.recommendations_for(Category::Links).count(), 0);
    assert_eq!(report.recommendations_for(Category::Technical).count(), 0);
}

#[test]
fn test_punctuated_keyword_counts_in_extracted_body() {
    let html = "<html><body><h2>C++ notes</h2><p>Modern c++ in practice.</p></body></html>";
    let page = extract_page(html, &ExtractOptions::default());

    let analyzer = SeoAnalyzer::new(EngineConfig::new(["C++"], ""));
    let report = analyzer.analyze_page(&page);
    assert!(report.metrics.content.keyword_density_percent > 0.0);
    assert!(
        report
            .recommendations
            .iter()
            .all(|r| !r.message.starts_with("Keyword density is low"))
    );
}

#[test]
fn test_empty_document_matches_empty_description() {
    let page = extract_page("", &ExtractOptions::default());
    assert_eq!(page, PageDescription::default());

    let analyzer = analyzer();
    assert_eq!(
        analyzer.analyze_page(&page),
        analyzer.analyze_page(&PageDescription::default())
    );
}

#[test]
fn test_assumed_sitemap_without_link_tag() {
    let options = ExtractOptions {
        base_url: None,
        assume_sitemap: true,
    };
    let page = extract_page("<html><body><p>hi</p></body></html>", &options);
    assert!(page.has_sitemap);
    assert!(!page.has_structured_data);
    assert!(!page.has_canonical_url);
    assert!(page.links.is_empty());
}
