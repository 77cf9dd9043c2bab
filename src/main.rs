use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Prefix for root-relative links (defaults to the config value, usually "/")
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory (wiped before each build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template = template;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    let config = cli.apply(config);
    log::debug!("Using {config:?}");

    let pages = mdsite::site::build_site(&config).with_context(|| {
        format!(
            "Failed to build site from {} into {}",
            config.content_dir.display(),
            config.output_dir.display()
        )
    })?;

    println!(
        "Created {} pages in {}",
        pages.len(),
        config.output_dir.display()
    );
    Ok(())
}
