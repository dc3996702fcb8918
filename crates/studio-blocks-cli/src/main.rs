use anyhow::{Context, Result, bail};
use relative_path::RelativePath;
use std::path::{Path, PathBuf};
use std::{env, process};
use studio_blocks_config::{Config, Mode};
use studio_blocks_engine::{
    CdnImageUrlBuilder, RenderMode, RenderSettings, io, outline, render_document, structured_data,
    validate_document,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Validate(String),
    Outline(String),
    JsonLd(String),
    Pages,
    Init(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
struct Cli {
    content: Option<PathBuf>,
    command: Command,
}

/// What a command printed and whether it succeeded.
struct Report {
    text: String,
    ok: bool,
}

impl Report {
    fn ok(text: String) -> Self {
        Self { text, ok: true }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            process::exit(2);
        }
    };

    let result = match &cli.command {
        // Runs before any config file exists, so it must not load one.
        Command::Init(dir) => init(dir, &Config::config_path()),
        command => load_config(cli.content.clone()).and_then(|config| run(command, &config)),
    };

    match result {
        Ok(report) => {
            print!("{}", report.text);
            if !report.ok {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: studio-blocks-cli [--content <dir>] <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  validate <page>   check nesting rules, exit 1 on violations");
    eprintln!("  outline <page>    print the rendered block tree with paths");
    eprintln!("  jsonld <page>     print structured data for the page");
    eprintln!("  pages             list documents under <content>/pages");
    eprintln!("  init <dir>        store <dir> as content_path in the config file");
}

fn parse_args(args: &[String]) -> Result<Cli> {
    let mut content = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--content" {
            let dir = iter.next().context("--content needs a directory")?;
            content = Some(PathBuf::from(dir));
        } else {
            rest.push(arg.as_str());
        }
    }

    let command = match rest.as_slice() {
        ["validate", page] => Command::Validate(page.to_string()),
        ["outline", page] => Command::Outline(page.to_string()),
        ["jsonld", page] => Command::JsonLd(page.to_string()),
        ["pages"] => Command::Pages,
        ["init", dir] => Command::Init(PathBuf::from(dir)),
        [] => bail!("No command given"),
        other => bail!("Unknown command: {}", other.join(" ")),
    };

    Ok(Cli { content, command })
}

fn load_config(content: Option<PathBuf>) -> Result<Config> {
    let loaded = Config::load().context("Failed to load config file")?;
    let config = match (loaded, content) {
        (Some(mut config), Some(dir)) => {
            config.content_path = dir;
            config
        }
        (Some(config), None) => config,
        (None, Some(dir)) => Config::new(dir),
        (None, None) => bail!(
            "No --content given and no config file found at {}",
            Config::config_path().display()
        ),
    };
    io::validate_content_dir(&config.content_path)?;
    Ok(config)
}

/// Point the config file at `dir`, keeping any other settings already there.
fn init(dir: &Path, config_path: &Path) -> Result<Report> {
    io::validate_content_dir(dir)
        .with_context(|| format!("'{}' is not a content directory", dir.display()))?;
    let config = match Config::load_from_path(config_path)? {
        Some(mut config) => {
            config.content_path = dir.to_path_buf();
            config
        }
        None => Config::new(dir),
    };
    config
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(Report::ok(format!(
        "content_path set to {} in {}\n",
        dir.display(),
        config_path.display()
    )))
}

fn render_settings(config: &Config) -> RenderSettings {
    let project_id = config.studio.project_id.clone().unwrap_or_default();
    RenderSettings::new(CdnImageUrlBuilder::new(
        project_id,
        config.studio.dataset.clone(),
    ))
    .with_mode(match config.mode {
        Mode::Development => RenderMode::Development,
        Mode::Production => RenderMode::Production,
    })
}

fn run(command: &Command, config: &Config) -> Result<Report> {
    let root = &config.content_path;
    match command {
        Command::Init(dir) => init(dir, &Config::config_path()),
        Command::Pages => {
            let pages = io::scan_documents(root)?;
            Ok(Report::ok(
                pages.iter().map(|page| format!("{page}\n")).collect(),
            ))
        }
        Command::Validate(page) => {
            let document = io::read_document(RelativePath::new(page), root)?;
            let violations = validate_document(&document);
            if violations.is_empty() {
                return Ok(Report::ok(format!("{page}: ok\n")));
            }
            let mut text: String = violations.iter().map(|v| format!("{v}\n")).collect();
            text.push_str(&format!("{page}: {} violation(s)\n", violations.len()));
            Ok(Report { text, ok: false })
        }
        Command::Outline(page) => {
            let document = io::read_document(RelativePath::new(page), root)?;
            let site = io::read_site_data(root)?;
            let rendered = render_document(&document, &site, &render_settings(config));
            Ok(Report::ok(outline(&rendered)))
        }
        Command::JsonLd(page) => {
            let document = io::read_document(RelativePath::new(page), root)?;
            let site = io::read_site_data(root)?;
            let data = structured_data(&site, &document, &config.site_url());
            Ok(Report::ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&data)?
            )))
        }
    }
}
