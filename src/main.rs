use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use albumview::application::{GalleryRequest, LoadGalleryUseCase};
use albumview::infrastructure::photo_api::{USER_AGENT, build_client};
use albumview::infrastructure::{
    AppConfig, Bounds, CliArgs, Command, CustomerAlbumClient, DanbooruClient, HostEnvironment,
    SelectedObserver, StorageManager,
};
use albumview::presentation::GalleryView;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        // stdout carries the JSON output.
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_use_case(config: &AppConfig) -> Result<LoadGalleryUseCase> {
    let api = &config.api;
    let client = build_client(USER_AGENT, Duration::from_secs(api.timeout_secs))?;

    let posts = DanbooruClient::with_client(client.clone(), api.posts_base_url.clone())
        .with_limit(api.posts_limit)
        .with_tags(api.posts_tags.clone());
    let albums = CustomerAlbumClient::with_client(
        client,
        api.album_base_url.clone(),
        api.effective_thumb_base_url(),
        api.effective_raw_base_url(),
    );

    Ok(LoadGalleryUseCase::new(Arc::new(posts), Arc::new(albums)))
}

async fn run(args: CliArgs, config: AppConfig) -> Result<()> {
    let use_case = create_use_case(&config)?;

    match args.command {
        Command::Posts => {
            let response = use_case.execute(GalleryRequest::Posts).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Album { id } => {
            let request = GalleryRequest::album(id);
            let response = use_case
                .execute(request.clone())
                .await
                .wrap_err_with(|| format!("failed to load {request}"))?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Preview {
            id,
            scroll,
            viewport_height,
            upgrade_raw,
        } => {
            let request = id.map_or(GalleryRequest::Posts, GalleryRequest::album);
            let response = use_case
                .execute(request.clone())
                .await
                .wrap_err_with(|| format!("failed to load {request}"))?;

            let preview = &config.preview;
            let height = viewport_height.unwrap_or(preview.viewport_height);
            let observer = SelectedObserver::for_environment(
                HostEnvironment::from_headless(config.lazy_load.headless),
                config.lazy_load.root_margin,
                Bounds::new(0.0, 0.0, preview.viewport_width, height),
            );

            let view = GalleryView::new(response.images, &observer, preview);
            let loaded = view.scroll_to(scroll);
            info!(loaded = loaded.len(), scroll, "Preview rendered");

            if upgrade_raw {
                view.upgrade_to_raw();
            }

            println!("{}", serde_json::to_string_pretty(&view.snapshot())?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = albumview::VERSION, "Starting {}", albumview::NAME);

    run(args, config).await
}
