use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod hotp;
mod refresh;
mod registry;
mod totp;
mod utils;
mod writer;

#[cfg(test)]
mod tests;

use config::Config;
use error::Result;
use refresh::RefreshLoop;
use registry::ProviderRegistry;
use totp::Clock;
use writer::{OtpWriter, OutErr};

fn main() {
    // Diagnostics go to stderr so codes on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "totp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = cli::command().get_matches();
    let mut writer = OtpWriter::new();

    if let Err(err) = run(&matches, &mut writer) {
        writer.write_err(&format!("{}\n", err));
        process::exit(err.exit_code());
    }
}

fn run<W>(matches: &clap::ArgMatches, writer: &mut W) -> Result<()>
where
    W: OutErr,
{
    let config = Config::load(matches)?;
    let registry = ProviderRegistry::from_source(config.source.as_deref(), writer)?;

    RefreshLoop::new(&registry, &config, Clock::new()).run(writer);
    Ok(())
}
