//! `pwd-rules` - check a password or print suggestions from the command line.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use secrecy::SecretString;

use pwd_rules::{
    Config, DEFAULT_MIN_LENGTH, DEFAULT_SUGGESTION_COUNT, DEFAULT_SUGGESTION_LENGTH,
    MIN_LENGTH_ENV, PasswordError, Presenter, SUGGESTION_COUNT_ENV, SUGGESTION_LENGTH_ENV,
    TextPresenter, evaluate, suggest_with,
};

#[derive(Parser, Debug)]
#[command(name = "pwd-rules", version, about = "Password strength checker and generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a password against the composition rules
    Check {
        /// Password to check (read from stdin when omitted)
        password: Option<String>,

        /// Minimum number of characters
        #[arg(long, env = MIN_LENGTH_ENV)]
        min_length: Option<usize>,
    },

    /// Print random password suggestions
    Suggest {
        /// Number of suggestions
        #[arg(long, env = SUGGESTION_COUNT_ENV)]
        count: Option<usize>,

        /// Characters per suggestion
        #[arg(long, env = SUGGESTION_LENGTH_ENV)]
        length: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command, io::stdin().lock(), io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the command succeeded; `check` fails on a non-strong password.
fn run<R: BufRead, W: Write>(command: Command, input: R, out: W) -> Result<bool, PasswordError> {
    let mut presenter = TextPresenter::new(out);

    match command {
        Command::Check {
            password,
            min_length,
        } => {
            let config = Config::new(
                min_length.unwrap_or(DEFAULT_MIN_LENGTH),
                DEFAULT_SUGGESTION_COUNT,
                DEFAULT_SUGGESTION_LENGTH,
            )?;
            let password = match password {
                Some(p) => SecretString::new(p.into()),
                None => read_password(input)?,
            };
            let report = evaluate(&password, config.min_length);
            presenter.show_report(&report)?;
            Ok(report.is_strong())
        }
        Command::Suggest {
            count,
            length,
            seed,
        } => {
            let config = Config::new(
                DEFAULT_MIN_LENGTH,
                count.unwrap_or(DEFAULT_SUGGESTION_COUNT),
                length.unwrap_or(DEFAULT_SUGGESTION_LENGTH),
            )?;
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            let batch = suggest_with(&config, &mut rng)?;
            presenter.show_suggestions(&batch)?;
            Ok(true)
        }
    }
}

fn read_password<R: BufRead>(mut input: R) -> Result<SecretString, PasswordError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(SecretString::new(trimmed.into()))
}
