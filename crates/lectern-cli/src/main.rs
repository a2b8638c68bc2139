//! lectern command-line interface.
//!
//! Wires configuration, environment credentials, and the remote clients
//! into a resolver and answers a single question from the indexed corpus.
//! Message transports (chat bots and the like) sit on top of the same
//! wiring and are out of scope here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lectern_core::config::LecternConfig;
use lectern_core::models::AlphaSchedule;
use lectern_embeddings::{TfIdfVocabulary, VectorEncoder};
use lectern_remote::{OpenAiClient, PineconeIndex};
use lectern_retrieval::{QueryResolver, RetrievalClient};
use lectern_synthesis::AnswerSynthesizer;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lectern",
    about = "Question answering over an indexed textbook corpus",
    version
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "lectern.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a question from the indexed corpus.
    Ask {
        /// The question to answer.
        question: String,
        /// Passages to retrieve per attempt.
        #[arg(long)]
        top_k: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = if cli.config.exists() {
        LecternConfig::load(&cli.config)?
    } else {
        info!(path = %cli.config.display(), "no config file, using defaults");
        LecternConfig::default()
    };

    match cli.command {
        Command::Ask { question, top_k } => ask(&config, &question, top_k),
    }
}

fn ask(config: &LecternConfig, question: &str, top_k: Option<usize>) -> anyhow::Result<()> {
    let openai_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
    let pinecone_key = std::env::var("PINECONE_API_KEY").context("PINECONE_API_KEY is not set")?;
    anyhow::ensure!(
        !config.retrieval.index_host.is_empty(),
        "retrieval.index_host is not configured"
    );

    let openai = Arc::new(
        OpenAiClient::new(openai_key)
            .with_embedding_model(&config.embedding.model, config.embedding.dimensions)
            .with_completion_model(&config.synthesis.model),
    );
    let index = Arc::new(PineconeIndex::new(
        &config.retrieval.index_host,
        pinecone_key,
    ));
    let vocabulary = Arc::new(
        TfIdfVocabulary::load(Path::new(&config.vocabulary.path))
            .context("loading the fitted vocabulary")?,
    );

    let encoder = VectorEncoder::new(
        openai.clone(),
        vocabulary,
        config.embedding.encoding_cache_size,
    );
    let client = RetrievalClient::new(
        index,
        &config.retrieval.namespace,
        &config.retrieval.source_label,
    );
    let synthesizer = AnswerSynthesizer::new(openai, config.synthesis.temperature);

    let resolver = QueryResolver::new(encoder, client, synthesizer)
        .with_schedule(AlphaSchedule::new(config.resolver.alpha_schedule.clone())?)
        .with_top_k(top_k.unwrap_or(config.retrieval.top_k))
        .with_deadline_ms(config.resolver.deadline_ms);

    let resolution = resolver.resolve(question)?;
    println!("{}", resolution.text);
    Ok(())
}
