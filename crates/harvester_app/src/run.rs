use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use harvester_core::Link;
use harvester_engine::{
    write_links_csv, ContentFilterPipeline, FilterReport, LogProgressSink, PdfTextExtractor,
    ReqwestFetcher, RunConfig,
};

use crate::cli::Cli;

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let links = match &cli.links_file {
        Some(path) => read_links(path)?,
        None => harvest(&config).await.context("harvesting the listing failed")?,
    };

    let fetcher = ReqwestFetcher::new(config.fetch_settings())?;
    let pipeline = ContentFilterPipeline::new(
        Arc::new(fetcher),
        Arc::new(PdfTextExtractor),
        config.pipeline_settings(),
    )?;
    let sink = LogProgressSink::new(pipeline.keyword());
    let report = pipeline.filter(&links, &sink).await;

    print_summary(&links, &report, pipeline.keyword());

    let written = write_links_csv(&config.output.path, report.matches.as_slice())
        .with_context(|| format!("writing {}", config.output.path.display()))?;
    engine_info!("Saved {} links to {}", report.matches.len(), written.display());
    Ok(())
}

/// One link per non-empty line, surrounding whitespace trimmed.
fn read_links(path: &Path) -> Result<Vec<Link>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let links: Vec<Link> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Link::from)
        .collect();
    engine_info!("Loaded {} links from {}", links.len(), path.display());
    Ok(links)
}

#[cfg(feature = "browser")]
async fn harvest(config: &RunConfig) -> Result<Vec<Link>, harvester_engine::HarvestError> {
    use harvester_engine::{ChromiumRenderer, LinkHarvester};

    let parser = config
        .listing
        .parser()
        .map_err(|err| harvester_engine::HarvestError::Parse(err.to_string()))?;
    let renderer = ChromiumRenderer::launch(&config.fetch.user_agent).await?;
    let mut harvester = LinkHarvester::new(renderer, parser, config.harvest_settings());
    let result = harvester.harvest().await;
    harvester.into_renderer().close().await;
    result
}

#[cfg(not(feature = "browser"))]
async fn harvest(_config: &RunConfig) -> Result<Vec<Link>, harvester_engine::HarvestError> {
    Err(harvester_engine::HarvestError::Unsupported(
        "built without the `browser` feature; pass --links-file or rebuild with --features browser"
            .to_string(),
    ))
}

fn print_summary(links: &[Link], report: &FilterReport, keyword: &str) {
    engine_info!("=============================================");
    engine_info!("Total link count: {}", links.len());
    engine_info!("'{}' included links: {}", keyword, report.matches.len());
    engine_info!(
        "Failed documents: {} (network {}, decode {}, lost {})",
        report.failures(),
        report.network_failures,
        report.decode_failures,
        report.lost_workers
    );
    engine_info!("=============================================");
    for link in &report.matches {
        engine_info!("- {}", link);
    }
}
