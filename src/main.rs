use clap::Parser;
use superchain_check::{
    apis::GoPlusClient,
    arguments::{Args, USAGE_MESSAGE},
    checker::run_check,
    config::TokensConfig,
    errors::CheckError,
    logger::{self as logger, LogTag},
    paths,
};

/// Main entry point for superchain_check
///
/// Exit codes:
/// - 0: report or informational message printed (also for a missing argument or
///   a missing data file, which only print a message)
/// - 1: the data file could not be read or parsed, or the HTTP client failed
#[tokio::main]
async fn main() {
    let args = Args::parse();

    logger::init(args.verbose, args.quiet, &args.debug_tags());

    let Some(data_file) = args.data_file.as_deref() else {
        println!("{}", USAGE_MESSAGE);
        return;
    };

    if let Err(e) = run(&args, data_file).await {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: &Args, data_file: &std::path::Path) -> Result<(), CheckError> {
    let path = paths::resolve_input_path(data_file);
    let config = TokensConfig::load(&path)?;

    let client = GoPlusClient::new(args.timeout, args.rate_limit)?.with_base_url(&args.api_url);

    let outcome = run_check(&config, &client).await;
    if !outcome.failures.is_empty() {
        logger::warning(
            LogTag::System,
            &format!("{} network(s) were left out of the report", outcome.failures.len()),
        );
    }

    println!("{}", outcome.output());
    Ok(())
}
