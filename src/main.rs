// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
//! Email Restriction Block CLI
//!
//! Renders restricted blocks from an attributes file, for previewing what a
//! given viewer would see and for checking that an email pattern compiles.

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use email_restriction_block::block::{BlockType, EmailPattern};
use email_restriction_block::{BlockConfig, BlockRenderer, ViewerIdentity};

mod settings;

use settings::Settings;

const HELP: &str = r#"
Email Restriction Block CLI

USAGE:
    restrict-block [OPTIONS] <COMMAND>

COMMANDS:
    render      Render a block for one viewer
    check       Check that the email pattern compiles
    repl        Try emails interactively against a block
    schema      Print the block type metadata as JSON

OPTIONS:
    -c, --config <FILE>      Block attributes file (.json or .yaml)
    -e, --email <EMAIL>      Render as a logged-in viewer with this email
    -a, --anonymous          Render as an anonymous viewer (default)
        --content <HTML>     Inner content (read from stdin when omitted)
    -h, --help               Print help information
    -V, --version            Print version information

ENVIRONMENT:
    LOG_LEVEL       Log level (default: warn)
    LOG_FORMAT      "pretty" or "json" (default: pretty)
    BLOCK_CONFIG    Attributes file used when --config is omitted

EXAMPLES:
    # Preview the block for a student
    restrict-block render -c block.yaml -e alice@school.edu --content '<p>Notes</p>'

    # Check the pattern before publishing
    restrict-block check -c block.yaml

    # Interactive mode ('-' renders as an anonymous viewer)
    restrict-block repl -c block.yaml
"#;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", HELP);
        return ExitCode::FAILURE;
    }

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings);

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            println!("{}", HELP);
            ExitCode::SUCCESS
        }
        "-V" | "--version" | "version" => {
            println!("restrict-block {}", email_restriction_block::VERSION);
            ExitCode::SUCCESS
        }
        "render" => run_render(&args[2..], &settings),
        "check" => run_check(&args[2..], &settings),
        "repl" => run_repl(&args[2..], &settings),
        "schema" => run_schema(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("{}", HELP);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(settings: &Settings) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level));

    if settings.log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init();
    }
}

fn option_value<'a>(args: &'a [String], short: &str, long: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| (!short.is_empty() && a == short) || a == long)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], short: &str, long: &str) -> bool {
    args.iter().any(|a| a == short || a == long)
}

fn load_config(args: &[String], settings: &Settings) -> Result<BlockConfig, String> {
    let path = option_value(args, "-c", "--config")
        .map(PathBuf::from)
        .or_else(|| settings.block_config.clone());

    match path {
        Some(path) => BlockConfig::load(&path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e)),
        None => {
            tracing::info!("no attributes file given, using block defaults");
            Ok(BlockConfig::default())
        }
    }
}

fn viewer_from_args(args: &[String]) -> ViewerIdentity {
    if has_flag(args, "-a", "--anonymous") {
        return ViewerIdentity::anonymous();
    }
    match option_value(args, "-e", "--email") {
        Some(email) => ViewerIdentity::authenticated(email),
        None => ViewerIdentity::anonymous(),
    }
}

fn run_render(args: &[String], settings: &Settings) -> ExitCode {
    let config = match load_config(args, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let content = match option_value(args, "", "--content") {
        Some(html) => html.to_string(),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read content from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let viewer = viewer_from_args(args);
    let renderer = BlockRenderer::new();
    println!("{}", renderer.render(&config, &viewer, &content));
    ExitCode::SUCCESS
}

fn run_check(args: &[String], settings: &Settings) -> ExitCode {
    let config = match load_config(args, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let pattern = config.effective_pattern();
    match EmailPattern::compile(pattern) {
        Ok(_) => {
            println!("OK: Email pattern compiles ({})", pattern);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("INVALID: {}", e);
            eprintln!("Logged-in viewers will see the restricted message until this is fixed.");
            ExitCode::FAILURE
        }
    }
}

fn run_repl(args: &[String], settings: &Settings) -> ExitCode {
    let config = match load_config(args, settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let renderer = BlockRenderer::new();

    println!("Email Restriction Block REPL");
    println!("Pattern: {}", config.effective_pattern());
    println!("Enter an email per line, '-' for an anonymous viewer, or 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == "quit" || line == "exit" {
            break;
        }

        let viewer = if line == "-" {
            ViewerIdentity::anonymous()
        } else {
            ViewerIdentity::authenticated(line)
        };

        match renderer.decide(&config, &viewer) {
            Ok(()) => println!("allowed"),
            Err(denial) => println!("{} ({})", denial.code(), denial),
        }
    }

    ExitCode::SUCCESS
}

fn run_schema() -> ExitCode {
    let metadata = BlockType::restricted_content().metadata_json();
    match serde_json::to_string_pretty(&metadata) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize block metadata: {}", e);
            ExitCode::FAILURE
        }
    }
}
