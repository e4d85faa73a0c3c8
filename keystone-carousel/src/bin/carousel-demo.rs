use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use keystone_carousel::prelude::*;
use keystone_carousel::sources::{JsonFileSource, LoggingNavigator};
use keystone_config::ConfigLoader;
use log::LevelFilter;
use tokio::time;

#[derive(Parser)]
#[command(
    name = "carousel-demo",
    about = "Drive the ongoing projects carousel from a JSON file"
)]
struct Cli {
    /// JSON array of project records
    #[arg(long)]
    items: PathBuf,
    /// Viewport width in px used for layout
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// How long to let autoplay run before exiting
    #[arg(long, default_value = "20s", value_parser = humantime::parse_duration)]
    run_for: Duration,
    /// Carousel settings file; falls back to the environment when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("keystone_carousel", LevelFilter::Debug)
        .filter_module("carousel_demo", LevelFilter::Debug)
        .init();
}

fn describe(view: &CarouselView) -> String {
    match view {
        CarouselView::Loading { message }
        | CarouselView::Error { message }
        | CarouselView::Empty { message } => message.to_string(),
        CarouselView::Ready(frame) => {
            let cards = frame
                .cards
                .iter()
                .map(|card| {
                    let marker = if card.is_focal { "*" } else { " " };
                    format!(
                        "{marker}{:+}:{} ({:.2})",
                        card.display_offset, card.content.title, card.style.scale
                    )
                })
                .collect::<Vec<_>>()
                .join(" | ");
            let dots = frame
                .indicators
                .iter()
                .map(|dot| if dot.active { 'o' } else { '.' })
                .collect::<String>();
            format!(
                "[{}] {cards}  {dots}{}",
                frame.breakpoint,
                if frame.controls.auto_playing { "  (auto)" } else { "" }
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();

    let loader = ConfigLoader::from_env();
    let config = match &cli.config {
        Some(path) => loader.load_file(path),
        None => loader.load(),
    }
    .context("failed to load carousel settings")?;
    if !config.warnings.is_empty() {
        log::warn!(
            "carousel settings accepted with {} warning(s)",
            config.warnings.len()
        );
    }
    log::info!("carousel settings loaded from {:?}", config.source);

    let source = JsonFileSource::new(&cli.items);
    let panel = CarouselPanel::load(
        &source,
        Arc::new(LoggingNavigator),
        config.settings,
    )
    .await;

    let viewport = cli.width;
    println!("{}", describe(&panel.view(&viewport)));

    let Some(controller) = panel.controller() else {
        return Ok(());
    };

    let mut updates = controller.subscribe();
    let deadline = time::sleep(cli.run_for);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                if !snapshot.is_transitioning {
                    println!("{}", describe(&panel.view(&viewport)));
                }
            }
        }
    }

    controller.dispose();
    Ok(())
}
