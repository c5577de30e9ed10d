//! Exhibit player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exhibit_domain::Dataset;
use exhibit_player::ExhibitConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exhibit_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting exhibit player");

    let config = load_config();
    tracing::debug!(shell = ?config.shell, breakpoint = config.mobile_breakpoint_px, "configuration loaded");

    let dataset = match Dataset::builtin() {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!(error = %e, "exhibit dataset is invalid");
            panic!("exhibit dataset is invalid: {e}");
        }
    };
    tracing::info!(
        events = dataset.timeline.len(),
        locations = dataset.locations.len(),
        themes = dataset.themes.len(),
        "dataset loaded"
    );

    // Platform
    let platform = exhibit_player::infrastructure::platform::create_platform(&config);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_exhibit_css();
        let head = format!("<style>{}</style>", css);
        let window = dioxus_desktop::WindowBuilder::new().with_title(dataset.title.clone());
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(config.shell)
        .with_context(config)
        .with_context(dataset)
        .launch(exhibit_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> ExhibitConfig {
    match ExhibitConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "invalid exhibit configuration");
            panic!("invalid exhibit configuration: {e:#}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> ExhibitConfig {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0);
    ExhibitConfig::for_web(width)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_exhibit_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/exhibit.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
