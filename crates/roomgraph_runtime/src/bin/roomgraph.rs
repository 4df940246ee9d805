//! Roomgraph CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use roomgraph_resolver::{
    DiagnosticFormatter, HumanFormatter, JsonFormatter, Report, Resolver, ResolverConfig,
};
use roomgraph_runtime::serialize::{from_json_str, load_from_file, save_to_file, to_json_string};
use roomgraph_runtime::{Pipeline, init_logging};
use roomgraph_scene::SceneGraph;
use roomgraph_scene::schema::generator_function_spec;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    input: Option<String>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    json_diagnostics: bool,
    strict: bool,
    summary: bool,
    print_schema: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--json-diagnostics" => config.json_diagnostics = true,
            "--strict" => config.strict = true,
            "--summary" => config.summary = true,
            "--print-schema" => config.print_schema = true,
            "-o" | "--output" => config.output = Some(next_value(&args, &mut i)?),
            "-c" | "--config" => config.config = Some(next_value(&args, &mut i)?),
            "-" => config.input = Some("-".to_string()),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.input.is_some() {
                    return Err(format!("unexpected extra input: {path}").into());
                }
                config.input = Some(path.to_string());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn next_value(args: &[String], i: &mut usize) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(PathBuf::from)
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("roomgraph {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    if config.print_schema {
        println!("{}", serde_json::to_string_pretty(&generator_function_spec())?);
        return Ok(ExitCode::SUCCESS);
    }

    let input = config
        .input
        .as_deref()
        .ok_or("no input given (use '-' for stdin, or --help)")?;

    let resolver_config = match &config.config {
        Some(path) => ResolverConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => ResolverConfig::default(),
    };

    let graph = read_input(input)?;
    let output = Pipeline::new(Resolver::new(resolver_config)).run(graph)?;

    print_diagnostics(&output.report, config.json_diagnostics);
    if config.summary {
        print_summary(&output.report);
    }

    match &config.output {
        Some(path) => save_to_file(&output.graph, path)?,
        None => println!("{}", to_json_string(&output.graph)?),
    }

    if config.strict && !output.report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(input: &str) -> Result<SceneGraph, Box<dyn std::error::Error>> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(from_json_str(&text)?)
    } else {
        Ok(load_from_file(input)?)
    }
}

fn print_diagnostics(report: &Report, json: bool) {
    if report.diagnostics.is_empty() {
        return;
    }
    let text = if json {
        JsonFormatter.format_many(&report.diagnostics)
    } else {
        HumanFormatter.format_many(&report.diagnostics)
    };
    eprintln!("{text}");
}

fn print_summary(report: &Report) {
    let stats = &report.stats;
    eprintln!("\x1b[1;36m=== Normalization Summary ===\x1b[0m");
    eprintln!("Rooms defaulted:      {}", stats.rooms_defaulted);
    eprintln!("Objects sized:        {}", stats.objects_dimensioned);
    eprintln!("Objects placed:       {}", stats.objects_positioned);
    eprintln!("Unresolved parents:   {}", stats.unresolved_parents);
    eprintln!("Unknown, unsized:     {}", stats.unknown_kinds_without_dimensions);
}

fn print_help() {
    println!(
        "\x1b[1mRoomgraph\x1b[0m - Scene-graph normalization

\x1b[1mUSAGE:\x1b[0m
    roomgraph [OPTIONS] <INPUT>

\x1b[1mARGUMENTS:\x1b[0m
    <INPUT>    Scene document (.json, or .msgpack/.mp); '-' reads JSON from stdin

\x1b[1mOPTIONS:\x1b[0m
    -o, --output PATH      Write the normalized document to PATH (default: stdout, JSON)
    -c, --config PATH      Load default sizes from a JSON config file
        --json-diagnostics Print diagnostics as JSON lines
        --strict           Exit with failure if any diagnostic was produced
        --summary          Print what was filled in
        --print-schema     Print the generator function schema and exit
    -h, --help             Print help information
    -V, --version          Print version information

\x1b[1mEXAMPLES:\x1b[0m
    roomgraph scene.json                     Normalize and print to stdout
    roomgraph scene.json -o scene.msgpack    Normalize to a MessagePack file
    roomgraph --strict --summary scene.json  Fail on unresolved parents

Set RUST_LOG=debug for per-pass logging."
    );
}
