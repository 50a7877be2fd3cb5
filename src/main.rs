use clap::Parser;

use ignore_catalog::cli::Args;
use ignore_catalog::types::Config;

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = Config {
        groups: Config::select_groups(&args.group),
        extra_excludes: args.exclude,
        view: args.view,
        format: args.format,
        output_path: args.output,
    };

    if let Err(e) = ignore_catalog::run(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn setup_logging(verbose: u8) {
    // RUST_LOG wins over -v; globset is noisy at debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
