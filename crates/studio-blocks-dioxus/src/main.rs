use anyhow::{Context, Result, bail};
use dioxus::prelude::*;
use relative_path::RelativePath;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

mod export;
mod preview;
mod ui;

use studio_blocks_config::Config;
use studio_blocks_engine::io;
use ui::App;

enum Command {
    Preview {
        content_dir: Option<PathBuf>,
    },
    Export {
        page: String,
        out: PathBuf,
        content_dir: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("studio-blocks starting up");

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [flag, page, out, rest @ ..] if flag == "--export" && rest.len() <= 1 => {
            Ok(Command::Export {
                page: page.clone(),
                out: PathBuf::from(out),
                content_dir: rest.first().map(PathBuf::from),
            })
        }
        [flag, ..] if flag == "--export" => bail!("--export needs <page> and <out.html>"),
        [] => Ok(Command::Preview { content_dir: None }),
        [dir] if !dir.starts_with("--") => Ok(Command::Preview {
            content_dir: Some(PathBuf::from(dir)),
        }),
        _ => bail!("Unexpected arguments: {}", args.join(" ")),
    }
}

fn print_usage() {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "studio-blocks-dioxus".to_string());
    eprintln!("Usage: {program_name} [content-dir]");
    eprintln!("       {program_name} --export <page> <out.html> [content-dir]");
    eprintln!(
        "Without a content dir, content_path is read from {}",
        Config::config_path().display()
    );
}

/// Config file settings, with the content directory overridden from the
/// command line when given.
fn resolve_config(content_dir: Option<PathBuf>) -> Result<Config> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let loaded = Config::load().context("Failed to load config file")?;
    let config = match (loaded, content_dir) {
        (Some(mut config), Some(dir)) => {
            config.content_path = dir;
            config
        }
        (Some(config), None) => {
            log::info!(
                "Loaded content path from config: {}",
                config.content_path.display()
            );
            config
        }
        (None, Some(dir)) => Config::new(dir),
        (None, None) => bail!(
            "No content directory provided and no config file found at {}",
            config_path.display()
        ),
    };

    io::validate_content_dir(&config.content_path).with_context(|| {
        format!(
            "Content path '{}' is invalid",
            config.content_path.display()
        )
    })?;
    Ok(config)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Export {
            page,
            out,
            content_dir,
        } => {
            let config = resolve_config(content_dir)?;
            export::export_page(&config, RelativePath::new(&page), Path::new(&out))
        }
        Command::Preview { content_dir } => {
            let config = resolve_config(content_dir)?;
            log::info!("Launching preview for {}", config.content_path.display());
            dioxus::LaunchBuilder::desktop()
                .with_cfg(make_window_config())
                .with_context(config)
                .launch(app_root);
            Ok(())
        }
    }
}

fn app_root() -> Element {
    let config = use_context::<Config>();
    rsx! {
        App { config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("studio-blocks preview")
        .with_always_on_top(false);

    Config::default().with_window(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_export_with_content_dir() {
        let command = parse_args(&args(&["--export", "about.json", "out.html", "/srv/content"]))
            .unwrap();

        let Command::Export {
            page,
            out,
            content_dir,
        } = command
        else {
            panic!("expected export");
        };
        assert_eq!(page, "about.json");
        assert_eq!(out, PathBuf::from("out.html"));
        assert_eq!(content_dir, Some(PathBuf::from("/srv/content")));
    }

    #[test]
    fn test_parse_preview() {
        assert!(matches!(
            parse_args(&[]).unwrap(),
            Command::Preview { content_dir: None }
        ));
        assert!(matches!(
            parse_args(&args(&["/srv/content"])).unwrap(),
            Command::Preview {
                content_dir: Some(_)
            }
        ));
    }

    #[test]
    fn test_parse_rejects_incomplete_export() {
        assert!(parse_args(&args(&["--export", "about.json"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }
}
