use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

/// Sized for the form and results panels side by side
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Subreddit Search")
        .with_inner_size(LogicalSize::new(960, 900))
        .with_min_inner_size(LogicalSize::new(640, 480))
}
