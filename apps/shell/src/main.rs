use anyhow::Context;
use bolt::domain::config::ClientConfig;
use bolt::http::HttpGateway;
use bolt::kernel::config::load_config;
use bolt_logger::Logger;
use bolt_shell::cli::Cli;
use bolt_shell::{commands, render};
use clap::Parser;

#[bolt_runtime::main(single_threaded)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: ClientConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if cli.verbose {
        cfg.logging.level = "debug".to_owned();
    }

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;
    let gateway = HttpGateway::new(&cfg.api)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::header(&mut out)?;
    commands::run(cli.command, &gateway, &mut out).await
}
