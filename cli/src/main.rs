//! CLI entrypoint for draftsmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config decides the tier ladder and whether the
//! backend is reachable, the invoker is constructed enabled or disabled
//! exactly once, and the orchestrator drives the drafting flows.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use draftsmith_application::{
    GenerationLogger, GenerationOrchestrator, ModelInvoker, NoGenerationLogger,
};
use draftsmith_domain::{DocumentKind, DocumentSpec, SectionSpec};
use draftsmith_infrastructure::{ConfigLoader, JsonlGenerationLogger, OpenAiBackend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "draftsmith", version, about = "AI-assisted document drafting")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to a config file (overrides discovered files)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore all config files and use built-in defaults
    #[arg(long, global = true)]
    no_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an outline: section titles for a topic
    Outline {
        /// Main topic of the document
        #[arg(long)]
        topic: String,

        /// Document kind: report or slides
        #[arg(long, default_value = "report")]
        kind: String,

        /// Number of section titles to request
        #[arg(long, default_value_t = 5)]
        sections: usize,
    },

    /// Generate content for every section, in order, threading context
    Generate {
        /// Main topic of the document
        #[arg(long)]
        topic: String,

        /// Document kind: report or slides
        #[arg(long, default_value = "report")]
        kind: String,

        /// Section title (repeat in document order)
        #[arg(long = "section", required = true)]
        sections: Vec<String>,
    },

    /// Refine one section's content with an instruction
    Refine {
        /// Title of the section being refined
        #[arg(long)]
        title: String,

        /// The refinement instruction
        #[arg(long)]
        instruction: String,

        /// Current content, inline
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Current content, read from a file
        #[arg(long)]
        content_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting draftsmith");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e.to_string()))?
    };
    config.validate()?;
    let tiers = config.model_tiers()?;

    // === Dependency Injection ===
    // The enabled/disabled decision is made exactly once, here.
    let invoker = match config.resolved_api_key() {
        Some(api_key) => {
            let mut backend = OpenAiBackend::new(api_key);
            if let Some(base_url) = &config.backend.base_url {
                backend = backend.with_base_url(base_url);
            }
            if let Some(secs) = config.backend.timeout_seconds {
                backend = backend.with_timeout(Duration::from_secs(secs));
            }
            ModelInvoker::new(Arc::new(backend), tiers)
        }
        None => {
            warn!("No API key configured; generation is disabled");
            ModelInvoker::disabled(tiers)
        }
    };

    let event_logger: Arc<dyn GenerationLogger> = match config
        .logging
        .generation_log
        .as_deref()
        .and_then(JsonlGenerationLogger::new)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoGenerationLogger),
    };

    let orchestrator = GenerationOrchestrator::new(invoker.with_logger(event_logger.clone()))
        .with_logger(event_logger);

    match cli.command {
        Commands::Outline {
            topic,
            kind,
            sections,
        } => {
            let kind: DocumentKind = kind.parse()?;
            let spec = DocumentSpec::new(topic, kind);
            let titles = orchestrator.generate_outline(&spec, sections).await;

            for (i, title) in titles.iter().enumerate() {
                println!("{}. {}", i + 1, title);
            }
        }

        Commands::Generate {
            topic,
            kind,
            sections,
        } => {
            let kind: DocumentKind = kind.parse()?;
            let spec = DocumentSpec::new(topic, kind);
            let section_specs: Vec<SectionSpec> = sections
                .iter()
                .enumerate()
                .map(|(i, title)| SectionSpec::new(title.clone(), i as u32))
                .collect();

            let contents = orchestrator
                .generate_all_sections(&spec, &section_specs)
                .await?;

            for section in &section_specs {
                println!("== {} ==", section.title);
                println!("{}", contents[&section.order]);
                println!();
            }
        }

        Commands::Refine {
            title,
            instruction,
            content,
            content_file,
        } => {
            let current = match (content, content_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => bail!("Provide --content or --content-file"),
            };

            let record = orchestrator
                .refine_section(&current, &instruction, &title)
                .await;

            println!("-- before --");
            println!("{}", record.previous_content);
            println!();
            println!("-- after ({}) --", record.created_at.to_rfc3339());
            println!("{}", record.new_content);
        }
    }

    Ok(())
}
