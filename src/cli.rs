use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "text";
pub const DEFAULT_CONCURRENCY: usize = 5;

#[derive(Parser, Debug, Clone)]
#[command(name = "pagescore")]
#[command(about = "Score pages for on-page SEO and get prioritized recommendations", long_about = None)]
pub struct Cli {
    /// Page files to analyze (.html, .htm, .json, .toml, .yaml, .yml)
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Target keyword (repeat for several)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Brand name expected in titles
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Public URL of the pages, used to classify links in HTML input
    #[arg(long)]
    pub base_url: Option<String>,

    /// The site publishes a sitemap
    #[arg(long)]
    pub sitemap: bool,

    /// Output format: text or json (default: text)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of input files loaded concurrently (default: 5)
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}

impl Cli {
    /// Output format after defaults are applied
    pub fn output_format(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency.unwrap_or(DEFAULT_CONCURRENCY)
    }
}
