use clap::Parser;
use env_logger::Env;
use magpie::{cli::Cli, configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let configuration = get_configuration().expect("Failed to read configuration.");

    run(args, configuration).await
}
