use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trivia_quiz::{
    DEFAULT_ANSWER_WINDOW_SECS, DEFAULT_REVEAL_DELAY, Quiz, QuizConfig, QuizError,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (built-in classic rock set if omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seconds allowed per question
    #[arg(long, default_value_t = DEFAULT_ANSWER_WINDOW_SECS, value_parser = clap::value_parser!(u32).range(1..))]
    answer_seconds: u32,

    /// Seconds the answer stays on screen before the next question
    #[arg(long, default_value_t = DEFAULT_REVEAL_DELAY.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    reveal_seconds: u64,

    /// File to write logs to (the terminal is busy with the quiz)
    #[arg(long, default_value = "trivia-quiz.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_file) {
        eprintln!("Error opening log file {}: {}", args.log_file.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::classic_rock(),
    };

    let config = QuizConfig::default()
        .with_answer_window(args.answer_seconds)?
        .with_reveal_delay(Duration::from_secs(args.reveal_seconds))?;

    quiz.with_config(config).run()
}

fn init_logging(path: &Path) -> io::Result<()> {
    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
