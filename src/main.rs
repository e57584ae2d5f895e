use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use snaketrace::areas::engine::Engine;
use snaketrace::areas::pager::Output;
use snaketrace::artifacts::diff::config::{DEFAULT_MAX_INPUT_LEN, DiffConfig, Mode};

#[derive(Parser)]
#[command(
    name = "snaketrace",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Minimal edit scripts with Myers' algorithm, step by step",
    long_about = "This tool computes minimal edit scripts between two strings using Myers' \
    edit graph algorithm. Besides the final script it can print every step of the \
    search, either the plain forward search or the linear-space divide-and-conquer \
    variant built around middle snakes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Never page the output")]
    no_pager: bool,
}

#[derive(Args)]
struct Inputs {
    #[arg(index = 1, help = "The old sequence")]
    old: String,
    #[arg(index = 2, help = "The new sequence")]
    new: String,
    #[arg(short, long, help = "Treat OLD and NEW as paths and diff the files' contents")]
    file: bool,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_INPUT_LEN,
        help = "Reject inputs whose combined length exceeds this many characters"
    )]
    max_len: usize,
}

impl Inputs {
    fn resolve(&self) -> Result<(String, String)> {
        if !self.file {
            return Ok((self.old.clone(), self.new.clone()));
        }

        let old = std::fs::read_to_string(&self.old)
            .with_context(|| format!("failed to read old file {}", self.old))?;
        let new = std::fs::read_to_string(&self.new)
            .with_context(|| format!("failed to read new file {}", self.new))?;
        Ok((old, new))
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Print the minimal edit script",
        long_about = "This command prints one line per character of the edit script: \
        '-' for deletions, '+' for insertions and ' ' for kept characters."
    )]
    Diff {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = Mode::Bidirectional,
            help = "The search to run"
        )]
        mode: Mode,
        #[arg(short, long, help = "Solve independent sub-problems in parallel")]
        parallel: bool,
    },
    #[command(
        name = "trace",
        about = "Print every step of the search",
        long_about = "This command prints one line per step record: direction, whether the \
        record starts an outer step, the diagonal, the path end point and the edit-annotated \
        reconstruction of the path."
    )]
    Trace {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(
            short,
            long,
            value_enum,
            default_value_t = Mode::Bidirectional,
            help = "The search to run"
        )]
        mode: Mode,
        #[arg(short, long, help = "Solve independent sub-problems in parallel")]
        parallel: bool,
    },
    #[command(
        name = "snake",
        about = "Print the middle snake of the two sequences",
        long_about = "This command runs the simultaneous forward and reverse searches once and \
        prints the snake where they meet together with the edit script length."
    )]
    Snake {
        #[command(flatten)]
        inputs: Inputs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::detect(!cli.no_pager);
    if !output.is_terminal() {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Diff {
            inputs,
            mode,
            parallel,
        } => {
            let (old, new) = inputs.resolve()?;
            let engine = Engine::new(
                DiffConfig::new(*mode, *parallel, inputs.max_len),
                output.writer(),
            );

            engine.diff(&old, &new)?
        }
        Commands::Trace {
            inputs,
            mode,
            parallel,
        } => {
            let (old, new) = inputs.resolve()?;
            let engine = Engine::new(
                DiffConfig::new(*mode, *parallel, inputs.max_len),
                output.writer(),
            );

            engine.trace(&old, &new)?
        }
        Commands::Snake { inputs } => {
            let (old, new) = inputs.resolve()?;
            let config = DiffConfig {
                max_input_len: inputs.max_len,
                ..DiffConfig::default()
            };
            let engine = Engine::new(config, output.writer());

            engine.snake(&old, &new)?
        }
    }

    output.finish()
}
