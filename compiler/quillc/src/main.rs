//! Quill front-end CLI.

use quillc::{check_files, init_tracing, lex_file, parse_file, DriverError, Options, Status};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return;
    };

    let result = match command.as_str() {
        "lex" => Options::parse(rest).and_then(|o| lex_file(&o)),
        "parse" => Options::parse(rest).and_then(|o| parse_file(&o)),
        "check" => Options::parse(rest).and_then(|o| check_files(&o)),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("Quill front end {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => Err(DriverError::Usage(format!("unknown command '{command}'"))),
    };

    match result {
        Ok(Status::Clean) => {}
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!();
                eprintln!("Run `quill help` for usage.");
            }
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Quill front end: lexer and parser with error recovery");
    println!();
    println!("Usage: quill <command> [options] [files...]");
    println!();
    println!("Commands:");
    println!("  lex [file]           Tokenize a file and print the tokens");
    println!("  parse [file]         Parse a file and print a summary");
    println!("  check [files...]     Parse files in parallel, reporting diagnostics only");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Files default to input.txt.");
    println!();
    println!("Options:");
    println!("  --tree               parse: print the parse tree");
    println!("  --color=<mode>       auto (default), always, never");
    println!("  --quiet, -q          Print diagnostics only");
    println!();
    println!("Environment:");
    println!("  NO_COLOR             Disable colors in auto mode");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=quill_parse=debug");
    println!();
    println!("Exit status: 0 clean, 1 the input has errors, 2 the driver failed.");
}
