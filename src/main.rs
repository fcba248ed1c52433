use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use retort::{EngineResult, Model, Session, TrainOptions};

/// Default softmax temperature for `ask` and `chat`; above 1 so repeated
/// questions can draw different answers.
const DEFAULT_TEMPERATURE: f64 = 1.2;

#[derive(Parser)]
#[command(
    name = "retort",
    version,
    about = "Train a canned-answer text classifier and query it"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a model on a `question : answer` corpus and save it
    Learn {
        /// Corpus file, one `question : answer` per line
        corpus: PathBuf,
        /// Where to write the model; defaults to the corpus path with a
        /// `.bin` extension
        #[arg(long)]
        output: Option<PathBuf>,
        /// JSON file with training options; the flags below override it
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        hidden_size: Option<usize>,
        #[arg(long)]
        epochs: Option<usize>,
        #[arg(long)]
        learning_rate: Option<f64>,
        /// Seed for weight initialization; omit for an entropy seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Load a model file and print its dimensions
    Load {
        model: PathBuf,
    },
    /// Ask one question against a saved model
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true)]
        question: Vec<String>,
        #[arg(long)]
        model: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temp: f64,
        /// Seed for answer sampling; omit for an entropy seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interactive question loop against a saved model
    Chat {
        #[arg(long)]
        model: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temp: f64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("retort=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> EngineResult<()> {
    match command {
        Command::Learn {
            corpus,
            output,
            config,
            hidden_size,
            epochs,
            learning_rate,
            seed,
        } => {
            let mut options = match config {
                Some(path) => TrainOptions::load_json(&path)?,
                None => TrainOptions::default(),
            };
            if let Some(value) = hidden_size {
                options.hidden_size = value;
            }
            if let Some(value) = epochs {
                options.epochs = value;
            }
            if let Some(value) = learning_rate {
                options.learning_rate = value;
            }

            let mut session = new_session(seed);
            let report = session.learn(&corpus, &options)?;
            let output = output.unwrap_or_else(|| default_model_path(&corpus));
            session.save(&output)?;

            println!(
                "Trained for {} epoch(s); mean loss {:.6} -> {:.6}.",
                report.epochs, report.initial_loss, report.final_loss
            );
            println!("Model saved to {}.", output.display());
            Ok(())
        }
        Command::Load { model } => {
            let model = Model::load_file(&model)?;
            println!(
                "Model loaded: {} keyword(s), {} hidden unit(s), {} answer(s).",
                model.input_size(),
                model.hidden_size(),
                model.output_size()
            );
            Ok(())
        }
        Command::Ask {
            question,
            model,
            temp,
            seed,
        } => {
            let mut session = new_session(seed);
            session.load(&model)?;
            println!("{}", session.ask(&question.join(" "), temp)?);
            Ok(())
        }
        Command::Chat { model, temp, seed } => {
            let mut session = new_session(seed);
            session.load(&model)?;
            chat_loop(&mut session, temp)
        }
    }
}

fn new_session(seed: Option<u64>) -> Session {
    match seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    }
}

/// `corpus.txt` trains into `corpus.bin` unless `--output` says otherwise.
fn default_model_path(corpus: &Path) -> PathBuf {
    corpus.with_extension("bin")
}

/// Reads questions line by line until `exit`, `quit`, or EOF.
fn chat_loop(session: &mut Session, temperature: f64) -> EngineResult<()> {
    println!("Type a question, or `exit` to leave.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }
        println!("{}", session.ask(question, temperature)?);
    }
    Ok(())
}
