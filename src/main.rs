use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use greetbot::bot::{ChatSession, Responder};
use greetbot::config::BotConfig;
use greetbot::grammar::corpus::{self, SMOKE_TEST_UTTERANCES, TRAINING_CORPUS};
use greetbot::parser::DependencyParser;

#[tokio::main]
async fn main() -> Result<()> {
    // Replies go to stdout, logs to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    corpus::validate(TRAINING_CORPUS).context("training corpus is malformed")?;

    let config = BotConfig::from_env().context("failed to load config")?;
    config.validate().context("config failed validation")?;

    let responder = Arc::new(Responder::with_lexicon(config).context("failed to build parser")?);
    tracing::info!(examples = TRAINING_CORPUS.len(), "greetbot ready");

    if std::env::args().any(|arg| arg == "--inspect") {
        inspect(&responder);
        return Ok(());
    }

    let mut session = ChatSession::new(responder, rand::thread_rng());
    println!("Say hi, or ask me how I'm doing. Ctrl+D to quit.");
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("console session failed")?;

    Ok(())
}

/// Parses each smoke-test utterance and prints its relations and a reply.
fn inspect(responder: &Responder) {
    let mut rng = rand::thread_rng();
    for text in SMOKE_TEST_UTTERANCES {
        println!("{}", text);
        match responder.parser().parse(text) {
            Ok(graph) => println!("{:?}", graph.relations()),
            Err(e) => println!("parse failed: {}", e),
        }
        match responder.respond_with(text, &mut rng) {
            Ok(reply) => println!("Response: {}", reply),
            Err(e) => println!("No response: {}", e),
        }
        println!("\n{}\n", "-".repeat(20));
    }
}
