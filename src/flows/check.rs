//! Check flow - collect names, resolve icons, print the report
//!
//! Fatal errors (bad root, unusable HTTP client) are returned; every
//! per-application failure has already been folded into the report.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::backends::collect::collect_names;
use crate::backends::iconify::{IconSearch, IconifyClient};
use crate::backends::resolve::Resolver;
use crate::core::model::{Collection, Report};
use crate::core::progress::Progress;
use crate::core::render::{render_banner, OutputFormat, RenderConfig, Renderer};

/// Options for one check run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub root: PathBuf,
    pub endpoint: String,
    pub collection: String,
    pub limit: u32,
    pub concurrency: usize,
    pub timeout: Duration,
    pub report_failures: bool,
    pub quiet: bool,
}

/// Resolve names and reduce them into a report; draws only the progress line
pub async fn check<S: IconSearch>(
    names: &[String],
    resolver: &Resolver<S>,
    collection: &Collection,
    concurrency: usize,
    progress: &Progress,
    report_failures: bool,
) -> Report {
    let resolutions = resolver.resolve_all(names, concurrency, progress).await;
    progress.finish();
    Report::from_resolutions(collection, resolutions, report_failures)
}

/// Run the check command
pub async fn run_check(options: CheckOptions, config: RenderConfig) -> Result<()> {
    let names = collect_names(&options.root)?;
    let collection = Collection::new(&options.collection);

    tracing::debug!(
        apps = names.len(),
        endpoint = %options.endpoint,
        collection = collection.id(),
        concurrency = options.concurrency,
        "starting icon check"
    );

    let text = config.format == OutputFormat::Text;
    if text && !options.quiet {
        println!("{}", render_banner(names.len(), collection.id()));
    }

    let client = IconifyClient::new(
        &options.endpoint,
        collection.id(),
        options.limit,
        options.timeout,
    )
    .context("Failed to build HTTP client")?;
    let resolver = Resolver::new(client, collection.clone()).report_failures(options.report_failures);

    let progress = if text && !options.quiet {
        Progress::new("Checking icons...", names.len())
    } else {
        Progress::hidden(names.len())
    };

    let report = check(
        &names,
        &resolver,
        &collection,
        options.concurrency,
        &progress,
        options.report_failures,
    )
    .await;

    if report.is_empty() {
        tracing::warn!(root = %options.root.display(), "no applications found");
    }

    let renderer = Renderer::with_config(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    renderer
        .render_to(&report, &mut out)
        .context("Failed to write report")?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LookupError;
    use async_trait::async_trait;
    use std::fs;
    use tempfile::tempdir;

    struct ScriptedSearch;

    #[async_trait]
    impl IconSearch for ScriptedSearch {
        async fn search(&self, query: &str) -> Result<Vec<String>, LookupError> {
            match query {
                "app1" => Ok(vec!["cbi:app1-dark".into(), "cbi:app1".into()]),
                "app2" => Ok(vec!["cbi:postgres".into()]),
                "app3" => Ok(vec!["cbi:app3-icon".into()]),
                _ => Err(LookupError::Status(503)),
            }
        }
    }

    #[tokio::test]
    async fn test_check_end_to_end() {
        let temp = tempdir().unwrap();
        for dir in ["groupA/app1", "groupA/app2", "groupB/app2", "groupB/app3"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }

        let names = collect_names(temp.path()).unwrap();
        assert_eq!(names, vec!["app1", "app2", "app3"]);

        let collection = Collection::new("cbi");
        let resolver = Resolver::new(ScriptedSearch, collection.clone());
        let progress = Progress::hidden(names.len());

        let report = check(&names, &resolver, &collection, 8, &progress, false).await;

        assert_eq!(report.total, 3);
        assert_eq!(report.found_count, 2);
        assert_eq!(report.found[0].app, "app1");
        assert_eq!(report.found[0].icon, "cbi:app1");
        assert_eq!(report.found[1].app, "app3");
        assert_eq!(report.found[1].icon, "cbi:app3-icon");
        assert_eq!(report.not_found, vec!["app2"]);
    }

    #[tokio::test]
    async fn test_check_failures_fold_into_not_found() {
        let names = vec!["app1".to_string(), "broken".to_string()];
        let collection = Collection::new("cbi");
        let resolver = Resolver::new(ScriptedSearch, collection.clone());
        let progress = Progress::hidden(names.len());

        let report = check(&names, &resolver, &collection, 2, &progress, false).await;

        assert_eq!(report.not_found, vec!["broken"]);
        assert!(report.check_failed.is_empty());
        assert_eq!(report.found_count + report.not_found_count, report.total);
    }

    #[tokio::test]
    async fn test_check_failures_reported_separately() {
        let names = vec!["app1".to_string(), "broken".to_string()];
        let collection = Collection::new("cbi");
        let resolver = Resolver::new(ScriptedSearch, collection.clone()).report_failures(true);
        let progress = Progress::hidden(names.len());

        let report = check(&names, &resolver, &collection, 2, &progress, true).await;

        assert!(report.not_found.is_empty());
        assert_eq!(report.check_failed.len(), 1);
        assert_eq!(report.check_failed[0].reason, "unexpected status 503");
    }

    #[tokio::test]
    async fn test_run_check_missing_root() {
        let temp = tempdir().unwrap();
        let options = CheckOptions {
            root: temp.path().join("missing"),
            endpoint: "http://127.0.0.1:1/search".to_string(),
            collection: "cbi".to_string(),
            limit: 10,
            concurrency: 1,
            timeout: Duration::from_secs(1),
            report_failures: false,
            quiet: true,
        };

        let err = run_check(options, RenderConfig::new(OutputFormat::Json))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
