//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::backends::iconify::{DEFAULT_COLLECTION, DEFAULT_ENDPOINT, DEFAULT_LIMIT};
use crate::backends::resolve::DEFAULT_CONCURRENCY;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::check::{run_check, CheckOptions};

pub const DEFAULT_ROOT: &str = "/workspaces/openshift/charts";

/// chart-icons - check which chart applications have an icon in an Iconify collection.
#[derive(Parser, Debug)]
#[command(name = "chart-icons")]
#[command(
    author,
    version,
    about,
    long_about = r#"chart-icons walks a chart tree laid out as <ROOT>/<group>/<application>,
queries the Iconify search API once per application name and reports which
applications have a matching icon in the selected collection.

An icon matches when its name equals the application name. Otherwise the first
returned icon whose name contains the application name (or is contained in it)
is used. Lookups that fail are counted as "not found" unless
--report-failures is given.

Output formats:
- text: colored summary, table and list (default)
- jsonl: one JSON record per application
- json: the whole report as a single JSON object
- md: Markdown

Examples:
    chart-icons
    chart-icons --root ./charts --format jsonl
    chart-icons --collection logos --concurrency 4 --report-failures
"#
)]
pub struct Cli {
    /// Root of the chart tree.
    #[arg(
        long,
        env = "CHART_ICONS_ROOT",
        default_value = DEFAULT_ROOT,
        value_name = "ROOT",
        long_help = "Root of the chart tree.\n\n\
Every directory two levels below ROOT (<ROOT>/<group>/<application>) is an\n\
application. Files at either level are ignored. A missing ROOT is an error."
    )]
    pub root: PathBuf,

    /// Iconify search endpoint.
    #[arg(
        long,
        env = "CHART_ICONS_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        value_name = "URL"
    )]
    pub endpoint: String,

    /// Icon collection to search.
    #[arg(
        long,
        env = "CHART_ICONS_COLLECTION",
        default_value = DEFAULT_COLLECTION,
        value_name = "ID",
        long_help = "Icon collection to search.\n\n\
Icons are returned as <ID>:<name>; the prefix is stripped before matching and\n\
re-attached in the report."
    )]
    pub collection: String,

    /// Maximum number of icons requested per lookup.
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_name = "N")]
    pub limit: u32,

    /// Maximum number of lookups in flight.
    #[arg(
        long,
        env = "CHART_ICONS_CONCURRENCY",
        default_value_t = DEFAULT_CONCURRENCY,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from),
        value_name = "N"
    )]
    pub concurrency: usize,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "CHART_ICONS_TIMEOUT",
        default_value_t = 15,
        value_name = "SECS",
        long_help = "Per-request timeout in seconds. A lookup that times out is treated like\n\
any other failed lookup."
    )]
    pub timeout: u64,

    /// List failed lookups separately instead of counting them as not found.
    #[arg(
        long,
        long_help = "By default a failed lookup (network error, timeout, bad status, malformed\n\
response) is indistinguishable from an application without an icon. With this\n\
flag such applications are listed in their own \"could not check\" group."
    )]
    pub report_failures: bool,

    /// Output format (text/jsonl/json/md).
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors. NO_COLOR is honored as well."
    )]
    pub no_color: bool,

    /// Quiet mode (no banner, no progress).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            root: self.root.clone(),
            endpoint: self.endpoint.clone(),
            collection: self.collection.clone(),
            limit: self.limit,
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout),
            report_failures: self.report_failures,
            quiet: self.quiet,
        }
    }
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> Result<()> {
    crate::core::logger::init_tracing(cli.verbose, cli.quiet);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_else(|err| {
        tracing::warn!("{}, falling back to text", err);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    run_check(cli.check_options(), render_config).await
}
