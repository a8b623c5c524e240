use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let config = match entail_cli::resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if config.address_was_generated {
        info!("addr: {}", config.address);
    }

    if let Err(e) = entail_cli::run(config).await {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
