use anyhow::Context;
use clap::Parser;
use marquee::catalog::CatalogMovies;
use marquee::cli::Cli;
use marquee::config::{default_config_path, Config};
use marquee::domain::GetPopularMovies;
use marquee::model::MoviesScreenModel;
use marquee::trace::init_tracing;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => Config::load_from(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let use_case: Arc<dyn GetPopularMovies> = match catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using catalog file");
            Arc::new(CatalogMovies::from_file(path))
        }
        None => Arc::new(CatalogMovies::bundled()),
    };

    // The UI loop owns the main thread; async fetch work runs on the
    // runtime's workers. Dependencies are wired here, nowhere else.
    let runtime = Runtime::new().context("starting async runtime")?;
    let model = Arc::new(MoviesScreenModel::new(use_case, runtime.handle().clone()));

    marquee::ui::run(model, runtime.handle(), &config.ui).context("running terminal ui")?;
    Ok(())
}
