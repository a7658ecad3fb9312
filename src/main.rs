use std::path::PathBuf;

use clap::Parser;
use trivia::{MalformedLines, Settings, Trivia};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Question file, one `prompt|answer` per line (or a .json array)
    #[arg(short, long, default_value = trivia::DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Background image; its size sets the canvas size
    #[arg(short, long, default_value = trivia::DEFAULT_BACKGROUND_PATH)]
    background: PathBuf,

    /// Run without a background image
    #[arg(long, conflicts_with = "background")]
    no_background: bool,

    /// Field separator between prompt and answer
    #[arg(short, long, default_value_t = trivia::DEFAULT_SEPARATOR)]
    separator: char,

    /// Skip lines with more than one separator instead of refusing the file
    #[arg(long)]
    skip_malformed: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            questions: args.questions,
            background: (!args.no_background).then_some(args.background),
            separator: args.separator,
            malformed: if args.skip_malformed {
                MalformedLines::Skip
            } else {
                MalformedLines::Reject
            },
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        if let Err(e) = trivia::logging::init(log_file) {
            eprintln!("Cannot open log file {}: {}", log_file.display(), e);
            std::process::exit(1);
        }
    }

    let trivia = match Trivia::new(args.into()) {
        Ok(trivia) => trivia,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = trivia.run() {
        eprintln!("Error running trivia: {}", e);
        std::process::exit(1);
    }
}
