use pagescore::cli::Cli;
use pagescore::run;
use std::fs;
use tempfile::tempdir;

const GOOD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Acme WebDev Guides for Modern Teams</title>
  <meta name="description" content="Practical webdev guides from Acme covering tooling, testing and deployment for busy teams. Learn more about shipping faster today.">
  <link rel="canonical" href="https://acme.test/guides">
  <script type="application/ld+json">{"@type": "Article"}</script>
</head>
<body>
  <h1>Guides</h1>
  <img src="/a.webp" alt="A">
  <a href="/about">About</a>
</body>
</html>"#;

fn cli_for(inputs: Vec<String>) -> Cli {
    Cli {
        inputs,
        keywords: vec!["webdev".to_string()],
        brand: Some("Acme".to_string()),
        base_url: Some("https://acme.test/guides".to_string()),
        sitemap: true,
        output: None,
        save: None,
        verbose: false,
        concurrency: Some(2),
        config: None,
    }
}

#[tokio::test]
async fn test_run_text_output_with_html_and_json_inputs() {
    let dir = tempdir().unwrap();
    let html_path = dir.path().join("index.html");
    let json_path = dir.path().join("page.json");
    fs::write(&html_path, GOOD_PAGE).unwrap();
    fs::write(&json_path, r#"{ "title": "Home" }"#).unwrap();

    let args = cli_for(vec![
        html_path.display().to_string(),
        json_path.display().to_string(),
    ]);

    let result = run(args).await;
    assert!(result.is_ok(), "run failed: {:?}", result.err());
}

#[tokio::test]
async fn test_run_saves_json_report() {
    let dir = tempdir().unwrap();
    let html_path = dir.path().join("index.html");
    let report_path = dir.path().join("report.json");
    fs::write(&html_path, GOOD_PAGE).unwrap();

    let args = Cli {
        output: Some("json".to_string()),
        save: Some(report_path.display().to_string()),
        ..cli_for(vec![html_path.display().to_string()])
    };

    run(args).await.expect("run should succeed");

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(saved["summary"]["total_pages"], 1);
    assert_eq!(saved["keywords"][0], "webdev");
    let metrics = &saved["pages"][0]["report"]["metrics"];
    assert_eq!(metrics["title"]["score"], 100);
    assert_eq!(metrics["technical"]["score"], 100);
    assert_eq!(metrics["links"]["internal"], 1);
}

#[tokio::test]
async fn test_run_rejects_null_fields() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("page.json");
    fs::write(&json_path, r#"{ "title": null }"#).unwrap();

    let result = run(cli_for(vec![json_path.display().to_string()])).await;
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid page description"));
}

#[tokio::test]
async fn test_run_rejects_unsupported_input() {
    let result = run(cli_for(vec!["notes.txt".to_string()])).await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Unsupported input format")
    );
}

#[tokio::test]
async fn test_run_rejects_missing_file() {
    let result = run(cli_for(vec!["/nonexistent/page.html".to_string()])).await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read input file")
    );
}

#[tokio::test]
async fn test_run_rejects_invalid_base_url() {
    let args = Cli {
        base_url: Some("not a url".to_string()),
        ..cli_for(vec!["index.html".to_string()])
    };
    let result = run(args).await;
    assert!(result.unwrap_err().to_string().contains("Invalid base URL"));
}

#[tokio::test]
async fn test_run_rejects_unknown_output_format() {
    let args = Cli {
        output: Some("xml".to_string()),
        ..cli_for(vec!["index.html".to_string()])
    };
    let result = run(args).await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Output format must be text or json")
    );
}

#[tokio::test]
async fn test_run_uses_explicit_config_file() {
    let dir = tempdir().unwrap();
    let html_path = dir.path().join("index.html");
    let config_path = dir.path().join("pagescore.toml");
    let report_path = dir.path().join("report.json");
    fs::write(&html_path, GOOD_PAGE).unwrap();
    fs::write(
        &config_path,
        format!(
            "keywords = [\"guides\"]\nbrand = \"Globex\"\noutput = \"json\"\nsave = \"{}\"\n",
            report_path.display()
        ),
    )
    .unwrap();

    let args = Cli {
        keywords: vec![],
        brand: None,
        config: Some(config_path.display().to_string()),
        ..cli_for(vec![html_path.display().to_string()])
    };
    run(args).await.expect("run should succeed");

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(saved["keywords"][0], "guides");
    assert_eq!(saved["brand"], "globex");
    assert_eq!(
        saved["pages"][0]["report"]["metrics"]["title"]["has_brand"],
        false
    );
}
