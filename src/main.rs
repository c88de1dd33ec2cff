use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use passcheck::config::load_config;
use passcheck::password::generator::MAX_PASSWORD_LENGTH;
use passcheck::utils::display::{render_history_entry, render_report};
use passcheck::{AppConfig, AppError, GeneratorConfig, PasswordService};

#[derive(Parser, Debug)]
#[command(author, version, about = "Check password strength and generate passwords", long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a password (read from stdin when omitted)
    Check {
        password: Option<String>,
    },

    /// Generate random passwords
    Generate {
        /// Password length (defaults to GENERATOR_LENGTH)
        #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..=MAX_PASSWORD_LENGTH as i64))]
        length: Option<u16>,

        /// Number of passwords to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,

        #[arg(long)]
        no_uppercase: bool,

        #[arg(long)]
        no_lowercase: bool,

        #[arg(long)]
        no_numbers: bool,

        #[arg(long)]
        no_symbols: bool,
    },

    /// Check passwords line by line, keeping a session history
    Interactive,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    log::debug!("Starting {} v{}", passcheck::SERVICE_NAME, passcheck::VERSION);

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args, config: &AppConfig) -> Result<(), AppError> {
    let mut service = PasswordService::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Check {
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => read_line(&mut io::stdin().lock())?.unwrap_or_default(),
            };
            let result = service.evaluate(&password);
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(out, "{}", render_report(&result))?;
            }
        },
        Command::Generate {
            length,
            count,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => {
            let options = GeneratorConfig {
                length: length.map(usize::from).unwrap_or(config.generator_length),
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
            };
            let passwords =
                (0..count).map(|_| service.generate(&options)).collect::<Result<Vec<_>, _>>()?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&passwords)?)?;
            } else {
                for password in passwords {
                    writeln!(out, "{password}")?;
                }
            }
        },
        Command::Interactive => interactive(&mut service, args.json, &mut out)?,
    }

    Ok(())
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
}

/// A line typed in interactive mode
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    History,
    Clear,
    Generate(Option<usize>),
    Check(&'a str),
}

/// Commands are matched against the whole line, so anything with extra
/// whitespace is checked as a password. `:q`, `:quit`, `:history`, `:clear`
/// and `:generate` are reserved.
fn parse_input(line: &str) -> Result<Input<'_>, String> {
    let input = match line {
        ":quit" | ":q" => Input::Quit,
        ":history" => Input::History,
        ":clear" => Input::Clear,
        ":generate" => Input::Generate(None),
        _ => match line.strip_prefix(":generate ") {
            Some(arg) => Input::Generate(Some(parse_length(arg)?)),
            None => Input::Check(line),
        },
    };
    Ok(input)
}

fn parse_length(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(length) if (1..=MAX_PASSWORD_LENGTH).contains(&length) => Ok(length),
        _ => Err(format!("Length must be a number between 1 and {MAX_PASSWORD_LENGTH}")),
    }
}

fn interactive(service: &mut PasswordService, json: bool, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "Type a password to check it. Commands: :history, :clear, :generate [length], :quit")?;
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    while let Some(line) = read_line(&mut reader)? {
        let input = match parse_input(&line) {
            Ok(input) => input,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            },
        };

        match input {
            Input::Quit => break,
            Input::History => {
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&service.history_store().masked())?)?;
                } else if service.history_store().is_empty() {
                    writeln!(out, "No history yet. Check passwords to see them here.")?;
                } else {
                    for entry in service.history() {
                        writeln!(out, "{}", render_history_entry(entry))?;
                    }
                }
            },
            Input::Clear => {
                service.clear_history();
                writeln!(out, "History cleared!")?;
            },
            Input::Generate(length) => {
                let mut options = service.default_generator_config();
                if let Some(length) = length {
                    options.length = length;
                }
                match service.generate(&options) {
                    Ok(password) => writeln!(out, "{password}")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            },
            Input::Check(password) => match service.check(password) {
                Some(result) if json => writeln!(out, "{}", serde_json::to_string(&result)?)?,
                Some(result) => writeln!(out, "{}\n", render_report(&result))?,
                None => writeln!(out, "Start typing to create a password.")?,
            },
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(parse_input(":quit"), Ok(Input::Quit));
        assert_eq!(parse_input(":q"), Ok(Input::Quit));
        assert_eq!(parse_input(":history"), Ok(Input::History));
        assert_eq!(parse_input(":clear"), Ok(Input::Clear));
        assert_eq!(parse_input(":generate"), Ok(Input::Generate(None)));
        assert_eq!(parse_input(":generate 24"), Ok(Input::Generate(Some(24))));
    }

    #[test]
    fn test_padded_commands_are_passwords() {
        assert_eq!(parse_input(" :quit "), Ok(Input::Check(" :quit ")));
        assert_eq!(parse_input(":clear "), Ok(Input::Check(":clear ")));
        assert_eq!(parse_input("hunter2"), Ok(Input::Check("hunter2")));
        assert_eq!(parse_input(""), Ok(Input::Check("")));
    }

    #[test]
    fn test_generate_length_bounds() {
        assert_eq!(parse_input(":generate 1024"), Ok(Input::Generate(Some(MAX_PASSWORD_LENGTH))));
        assert!(parse_input(":generate 100000000000").is_err());
        assert!(parse_input(":generate 1025").is_err());
        assert!(parse_input(":generate 0").is_err());
        assert!(parse_input(":generate lots").is_err());
    }
}
