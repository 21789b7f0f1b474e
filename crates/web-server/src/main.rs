// This main function is the entry point when running `cargo run -p web-server`.
// Its only job is to load the configuration, set up logging and call `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let _log_guard = web_server::telemetry::init_tracing(&config.logging);

    web_server::run_server(&config).await
}
