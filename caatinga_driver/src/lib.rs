//! Drives the analysis of `.252` source files: validates the path, runs the scanner and the
//! semantic passes, and writes the reports.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use caatinga_base::{
    diagnostic::{Counting, Handler},
    log::{Message, Severity},
    source_file::SourceFile,
};
use caatinga_semantic::symbol_table::SymbolTable;
pub use clap::Parser;

pub mod error;
pub mod report;

pub use error::Error;

/// The extension every source file must have, compared case-insensitively.
pub const SOURCE_EXTENSION: &str = "252";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "caatinga",
    about = "Lexical analyzer of the Caatinga programming language.",
    author = "caatinga@ucsal.edu.br"
)]
pub struct Argument {
    /// The `.252` source file to analyze; without it, paths are read from the standard input.
    pub file: Option<PathBuf>,

    /// The directory the `.LEX` and `.TAB` reports are written to.
    #[clap(long = "output-dir", default_value = "Output/Report")]
    pub output_dir: PathBuf,

    /// Prints out the token stream of the program.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,

    /// Skips writing the symbol table report.
    #[clap(long = "no-symbol-table")]
    pub no_symbol_table: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
struct Printer;

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
    }
}

/// Is the outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Summary {
    /// The number of tokens scanned.
    pub token_count: usize,

    /// The number of fragments the scanner discarded.
    pub discarded_count: usize,

    /// The path of the written `.LEX` report.
    pub lexical_report: PathBuf,

    /// The path of the written `.TAB` report, if it was requested.
    pub symbol_table_report: Option<PathBuf>,
}

/// Checks that the path is non-empty, exists and has the `.252` extension.
///
/// # Errors
///
/// Returns the first check that failed.
pub fn validate(path: &Path) -> Result<(), Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }

    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();

    if extension.eq_ignore_ascii_case(SOURCE_EXTENSION) {
        Ok(())
    } else {
        Err(Error::InvalidExtension {
            extension: if extension.is_empty() {
                extension
            } else {
                format!(".{extension}")
            },
        })
    }
}

fn create_report(
    output_dir: &Path,
    stem: &str,
    extension: &str,
    write: impl FnOnce(&mut File) -> std::io::Result<()>,
) -> Result<PathBuf, Error> {
    let path = output_dir.join(format!("{stem}.{extension}"));
    let mut file = File::create(&path)?;

    write(&mut file)?;
    file.flush()?;

    Ok(path)
}

/// Analyzes the source file at the given path and writes its reports.
///
/// Discarded fragments are printed to the standard error stream as they are found.
///
/// # Errors
///
/// See [`Error`] for the possible errors.
pub fn compile(path: &Path, argument: &Argument) -> Result<Summary, Error> {
    validate(path)?;

    let source_file = SourceFile::load(File::open(path)?, path.to_path_buf())?;
    let handler = Counting::new(Printer);

    let token_stream = caatinga_semantic::analyze(source_file.iter(), &handler);

    if argument.dump_tokens {
        for token in token_stream.iter() {
            println!(
                "{:>4} {} {} {}",
                token.line(),
                token.category().code(),
                token.symbol_type(),
                token.lexeme()
            );
        }
    }

    if token_stream.is_empty() {
        println!(
            "{}",
            Message::new(
                Severity::Warning,
                "no token was found or the file is empty"
            )
        );
    } else {
        println!(
            "{}",
            Message::new(
                Severity::Info,
                format!("tokens identified: {}", token_stream.len())
            )
        );
    }

    std::fs::create_dir_all(&argument.output_dir)?;

    let source_name = path
        .file_name()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lexical_report = create_report(&argument.output_dir, &stem, "LEX", |file| {
        report::write_lexical_report(file, &source_name, &token_stream)
    })?;

    let symbol_table_report = if argument.no_symbol_table {
        None
    } else {
        let symbol_table = SymbolTable::build(&token_stream);

        Some(create_report(&argument.output_dir, &stem, "TAB", |file| {
            report::write_symbol_table_report(file, &source_name, &symbol_table)
        })?)
    };

    Ok(Summary {
        token_count: token_stream.len(),
        discarded_count: handler.count(),
        lexical_report,
        symbol_table_report,
    })
}

fn compile_and_report(path: &Path, argument: &Argument) -> bool {
    println!("{}", "-".repeat(60));
    println!(
        "{}",
        Message::new(Severity::Info, format!("analyzing {}", path.display()))
    );

    let succeeded = match compile(path, argument) {
        Ok(summary) => {
            if summary.discarded_count > 0 {
                println!(
                    "{}",
                    Message::new(
                        Severity::Warning,
                        format!("fragments discarded: {}", summary.discarded_count)
                    )
                );
            }

            println!(
                "{}",
                Message::new(
                    Severity::Info,
                    format!("lexical report written: {}", summary.lexical_report.display())
                )
            );

            if let Some(symbol_table_report) = &summary.symbol_table_report {
                println!(
                    "{}",
                    Message::new(
                        Severity::Info,
                        format!("symbol table written: {}", symbol_table_report.display())
                    )
                );
            }

            true
        }
        Err(error) => {
            eprintln!(
                "{}",
                Message::new(Severity::Error, format!("{}: {error}", path.display()))
            );

            false
        }
    };

    println!("{}", "-".repeat(60));

    succeeded
}

/// Is what a line typed at the interactive prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Command {
    /// The line was blank.
    Skip,

    /// The line was `exit`, `quit` or `sair`.
    Exit,

    /// The line named a source file; surrounding quotes are removed.
    Compile(PathBuf),
}

impl Command {
    /// Interprets a line typed at the interactive prompt.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().replace('"', "");
        let line = line.trim();

        if line.is_empty() {
            Self::Skip
        } else if ["exit", "quit", "sair"]
            .iter()
            .any(|x| line.eq_ignore_ascii_case(x))
        {
            Self::Exit
        } else {
            Self::Compile(PathBuf::from(line))
        }
    }
}

/// Prompts for source file paths until an exit command or the end of the input.
///
/// # Errors
///
/// Returns an error if reading the input or writing the prompt fails.
pub fn interact(
    input: impl BufRead,
    mut prompt: impl Write,
    argument: &Argument,
) -> std::io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(prompt, "\nsource file path (or `exit` to quit): ")?;
        prompt.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Skip => {}
            Command::Exit => return Ok(()),
            Command::Compile(path) => {
                compile_and_report(&path, argument);
            }
        }
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    if let Some(file) = &argument.file {
        return if compile_and_report(file, &argument) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match interact(std::io::stdin().lock(), std::io::stdout(), &argument) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, error));
            ExitCode::FAILURE
        }
    }
}
