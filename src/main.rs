use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lume::ast;
use lume::error::LexError;
use lume::error::report::{self, Level};
use lume::interpreter::lexer::core::tokenize;
use lume::interpreter::lexer::token::dump_tokens;
use lume::interpreter::parser::core::parse;
use lume::run_script;

/// lume runs scripts written in the Lume language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream instead of running the script.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed syntax tree instead of running the script.
    #[arg(long)]
    dump_ast: bool,

    /// Disable ANSI colors in diagnostics.
    #[arg(long)]
    no_color: bool,

    /// The script file to run.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();
    let color = !args.no_color;

    let source = fs::read(&args.file).unwrap_or_else(|_| {
        let message = format!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            args.file.display()
        );
        report::emit_plain(&mut io::stdout(), Level::Error, &message, color);
        process::exit(1);
    });
    let filename = args.file.display().to_string();

    if args.dump_tokens {
        process::exit(dump_token_stream(&source, &filename, color));
    }
    if args.dump_ast {
        process::exit(dump_syntax_tree(&source, &filename, color));
    }

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let code = run_script(&source, &filename, &mut input, &mut output, color);
    let _ = output.flush();
    process::exit(code);
}

/// Tokenizes the script and prints one line per token, then any lexical
/// errors. Exits nonzero only when tokenization could not finish.
fn dump_token_stream(source: &[u8], filename: &str, color: bool) -> i32 {
    let mut output = io::stdout();
    let (tokens, lex_errors) = tokenize(source);

    let _ = write!(output, "{}", dump_tokens(&tokens, source));
    for error in &lex_errors {
        report::emit(&mut output, source, filename, error, color);
    }
    let _ = output.flush();

    i32::from(lex_errors.iter().any(LexError::is_fatal))
}

/// Tokenizes and parses the script, then prints the indented tree form of
/// the program.
fn dump_syntax_tree(source: &[u8], filename: &str, color: bool) -> i32 {
    let mut output = io::stdout();
    let (tokens, lex_errors) = tokenize(source);

    for error in &lex_errors {
        report::emit(&mut output, source, filename, error, color);
    }
    if lex_errors.iter().any(LexError::is_fatal) {
        let _ = output.flush();
        return 1;
    }

    let code = match parse(&tokens, source) {
        Ok(program) => {
            let _ = write!(output, "{}", ast::dump(&program, source));
            0
        },
        Err(error) => {
            report::emit(&mut output, source, filename, &error, color);
            1
        },
    };
    let _ = output.flush();
    code
}
