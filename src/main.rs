use vmspec::cli::commands::CliArgs;
use vmspec::cli::output::{OutputFormat, OutputFormatter};
use vmspec::extract::{self, StatusDocument};
use vmspec::{NAME, VERSION};

use clap::Parser;
use std::env;
use std::io::Read;
use std::process;
use tracing::{debug, error, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_spec(&args);
    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if let Some(level_str) = &args.log_level {
            parse_level(level_str)
        } else if args.verbose {
            Level::DEBUG
        } else if args.quiet {
            Level::ERROR
        } else {
            let level_str = env::var("VMSPEC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(format!("vmspec={}", level).parse().unwrap());
        }

        // stdout is reserved for the one output line; everything else goes
        // to stderr.
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn handle_spec(args: &CliArgs) -> i32 {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        error!("Failed to read status document from stdin: {}", e);
        return 1;
    }
    debug!("Read {} bytes from stdin", input.len());

    let document = match StatusDocument::parse(&input) {
        Ok(document) => document,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let spec = match extract::resource_spec(&document, &args.vm_name) {
        Ok(spec) => spec,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };
    debug!("Extracted spec for {}: {}", args.vm_name, spec);

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    let output = match formatter.format(&spec) {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to format output: {}", e);
            return 1;
        }
    };

    println!("{}", output);
    0
}
