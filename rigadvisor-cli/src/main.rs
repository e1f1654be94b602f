pub(crate) mod common;
mod modules;
mod options;

use std::io::stdout;

use erased_serde::Serializer;
use rigadvisor::Advisor;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use crate::common::Run;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("rigadvisor={0},rigadvisor_cli={0}", level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opt = options::Options::from_args();
    init_tracing(opt.log_level());

    let advisor = Advisor::new(opt.load_catalog().await?);

    opt.command
        .run(
            &advisor,
            &mut <dyn Serializer>::erase(&mut serde_json::Serializer::pretty(stdout())),
        )
        .await?;

    println!();
    Ok(())
}
