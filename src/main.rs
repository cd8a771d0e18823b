use clap::Parser;
use tracing_subscriber::EnvFilter;

use breed_resolver::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("breed_resolver=debug,info")
    } else {
        EnvFilter::new("breed_resolver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let source = cli.catalog_source();

    match cli.command {
        cli::Commands::Resolve(args) => {
            cli::resolve::run(args, source, cli.format, cli.verbose)?;
        }
        cli::Commands::Breeds(args) => {
            cli::breeds::run(args, source, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args, source)?;
        }
    }

    Ok(())
}
