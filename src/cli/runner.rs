//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ParseFormat};
use crate::config::Config;
use crate::error::{Error, Result, ResultExt};
use crate::fetch::{DocumentSource, GitHubFetcher};
use crate::generate::{parse_document, render_document, GenerateReport, Generator};
use crate::render::renderer_for;
use crate::store::DocStore;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            None => self.run_pipeline(false).await,
            Some(Commands::Run { fetch }) => self.run_pipeline(*fetch).await,
            Some(Commands::Fetch) => {
                let config = self.load_config()?;
                let generator = Generator::from_config(&config);
                generator.store().ensure_layout()?;
                let fetcher = GitHubFetcher::from_config(&config)?;
                fetch_into(&fetcher, generator.store()).await.map(|_| ())
            }
            Some(Commands::Generate) => {
                let config = self.load_config()?;
                let generator = Generator::from_config(&config);
                generator.store().ensure_layout()?;
                self.generate(&generator).map(|_| ())
            }
            Some(Commands::Parse { file, format }) => self.parse(file, *format),
        }
    }

    /// Load (or create) the config file and apply command-line overrides
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_create(&self.cli.config)?;
        info!("loaded {}", self.cli.config.display());
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(target) = self.cli.target {
            config.target = target;
        }
        if let Some(ref token) = self.cli.token {
            config.token.clone_from(token);
        }
    }

    /// Fetch when asked to or when the layout was missing, then regenerate
    async fn run_pipeline(&self, force_fetch: bool) -> Result<()> {
        let config = self.load_config()?;
        let generator = Generator::from_config(&config);

        let created = generator.store().ensure_layout()?;
        if force_fetch || created {
            if created {
                debug!("Output layout was missing, fetching documents");
            }
            let fetcher = GitHubFetcher::from_config(&config)?;
            fetch_into(&fetcher, generator.store()).await?;
        }

        self.generate(&generator)?;
        Ok(())
    }

    fn generate(&self, generator: &Generator) -> Result<GenerateReport> {
        generator.store().clear_output()?;
        info!("parsing markdown...");

        let report = generator.run()?;
        info!(
            "generated {} files with {} structs into {}",
            report.generated.len(),
            report.total_records(),
            generator.store().output_dir().display()
        );
        Ok(report)
    }

    /// Render a single document to stdout
    fn parse(&self, file: &Path, format: ParseFormat) -> Result<()> {
        let mut config = if self.cli.config.exists() {
            Config::load(&self.cli.config)?
        } else {
            Config::default()
        };
        self.apply_overrides(&mut config);

        if !file.exists() {
            return Err(Error::file_not_found(file.display().to_string()));
        }
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        match format {
            ParseFormat::Code => {
                let renderer = renderer_for(config.target);
                match render_document(&text, renderer.as_ref(), &config.package) {
                    Some(rendered) => print!("{rendered}"),
                    None => info!("parsed {} but found no structs", file.display()),
                }
            }
            ParseFormat::Json => {
                let records = parse_document(&text);
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
        }
        Ok(())
    }
}

/// Replace the store's markdown with everything the source yields.
/// Returns the number of documents written.
pub async fn fetch_into(source: &dyn DocumentSource, store: &DocStore) -> Result<usize> {
    info!("fetching new markdown files...");
    let documents = source.fetch_documents().await?;

    store.reset_markdown()?;
    for document in &documents {
        store.write_markdown(document)?;
    }
    Ok(documents.len())
}
