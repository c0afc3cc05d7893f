//! rlox: The Lox token scanner CLI.
//!
//! Usage:
//!   rlox            start the interactive prompt
//!   rlox [script]   scan a script file and list its tokens

use clap::Parser as ClapParser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "rlox", about = "rlox - A Lox scanner written in Rust")]
struct Cli {
    /// Lox script to scan. Starts the interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    files: Vec<String>,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const PROMPT: &str = ">> ";

fn main() {
    let cli = Cli::parse();

    if cli.files.len() > 1 {
        eprintln!("Usage: rlox [script]");
        process::exit(64);
    }

    if let Some(path) = cli.files.first() {
        let exit_code = run_file(path);
        process::exit(exit_code);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_prompt(stdin.lock(), stdout.lock()) {
        print_error(&e.to_string());
        process::exit(1);
    }
}

/// Scan a whole script file once and list its tokens.
fn run_file(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("Failed to read '{}': {}", path, e));
            return 1;
        }
    };

    let stdout = io::stdout();
    match print_tokens(&mut stdout.lock(), &source) {
        Ok(()) => 0,
        Err(e) => {
            print_error(&e.to_string());
            1
        }
    }
}

/// Read lines from `input`, scanning each as an independent source string
/// and listing its tokens on `output`. Returns when input is exhausted.
fn run_prompt(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let source = line.strip_suffix('\n').unwrap_or(&line);
        let source = source.strip_suffix('\r').unwrap_or(source);

        print_tokens(&mut output, source)?;
    }
}

/// Write one line per token, end-of-input token included.
fn print_tokens(output: &mut impl Write, source: &str) -> io::Result<()> {
    for token in rlox_scanner::scan(source) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_scans_each_line_independently() {
        let input = Cursor::new("1 + 2\nprint x;\n");
        let mut output = Vec::new();
        run_prompt(input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with(">> "));
        assert!(text.contains("NumericLiteral \"1\" line 0"));
        assert!(text.contains("PlusToken \"+\" line 0"));
        assert!(text.contains("PrintKeyword \"print\" line 0"));
        // A prompt per scanned line, plus the one answered by end of input.
        assert_eq!(text.matches(">> ").count(), 3);
    }

    #[test]
    fn test_prompt_returns_on_end_of_input() {
        let input = Cursor::new("");
        let mut output = Vec::new();
        run_prompt(input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), ">> ");
    }

    #[test]
    fn test_prompt_handles_crlf_lines() {
        let input = Cursor::new("nil\r\n");
        let mut output = Vec::new();
        run_prompt(input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("NilKeyword \"nil\" line 0"));
        assert!(!text.contains("Unknown"));
    }

    #[test]
    fn test_token_listing_ends_with_eof_token() {
        let mut output = Vec::new();
        print_tokens(&mut output, "@").unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Unknown"));
        assert!(lines[1].starts_with("EndOfFileToken"));
    }
}
