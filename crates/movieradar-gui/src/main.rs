mod app;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use movieradar_core::config::AppConfig;

/// Search movies and TV shows and keep a personal watchlist.
#[derive(Debug, Parser)]
#[command(name = "movieradar", version, about)]
struct Cli {
    /// Backend base URL, overriding `[api] base_url` from the config file.
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        AppConfig::default()
    });
    if let Some(base) = cli.api_base {
        config.api.base_url = base;
    }
    tracing::info!(api = %config.api.base_url, "starting movieradar");

    let win = iced::window::Settings {
        size: iced::Size::new(1180.0, 800.0),
        min_size: Some(iced::Size::new(720.0, 480.0)),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    iced::application(
        move || app::MovieRadar::new(config.clone()),
        app::MovieRadar::update,
        app::MovieRadar::view,
    )
    .title(app::MovieRadar::title)
    .subscription(app::MovieRadar::subscription)
    .theme(app::MovieRadar::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}

/// Log to stderr, plus a daily file under the data dir when it is writable.
///
/// The returned guard flushes the file writer on drop and must outlive the
/// application.
fn init_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("movieradar=info"));

    let file = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("movieradar")
        .filename_suffix("log")
        .build(AppConfig::logs_dir());

    match file {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .init();
            tracing::warn!(error = %e, "file logging disabled");
            None
        }
    }
}
