#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod seed;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Resolved storage location, written once before launch
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kindred")
}

/// Kindred - People directory and chat inbox
#[derive(Parser, Debug)]
#[command(name = "kindred-desktop")]
#[command(about = "Kindred - Local-first people directory and chat inbox")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: kindred-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Instance number (shorthand for --name with a number)
    #[arg(short, long)]
    instance: Option<u8>,
}

impl Args {
    /// Pick the storage directory and an instance label for the title.
    ///
    /// An explicit `--data-dir` wins over `--name`, which wins over
    /// `--instance`. Instance 1 maps onto the default directory so a
    /// plain single-instance launch never leaves its data behind.
    fn resolve(&self) -> (PathBuf, String) {
        if let Some(dir) = &self.data_dir {
            let label = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom")
                .to_string();
            return (dir.clone(), label);
        }

        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        if let Some(name) = &self.name {
            return (base.join(format!("kindred-{}", name)), name.clone());
        }
        if let Some(n) = self.instance {
            let dir = if n == 1 {
                base.join("kindred")
            } else {
                base.join(format!("kindred-{}", n))
            };
            return (dir, format!("Instance {}", n));
        }

        (default_data_dir(), String::new())
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let (data_dir, label) = args.resolve();
    let title = if label.is_empty() {
        "Kindred".to_string()
    } else {
        format!("Kindred - {}", label)
    };

    let _ = DATA_DIR.set(data_dir.clone());
    tracing::info!("Starting {} with data dir {:?}", title, data_dir);

    let window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(LogicalSize::new(1000.0, 720.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
