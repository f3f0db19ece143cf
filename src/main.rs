use chnroutes::cli::Cli;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    chnroutes::logging::init()?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = Cli::parse().into_config()?;
    let generated = chnroutes::run(&config).await?;

    log::info!(
        "#End main() {} route(s) for {} in {} file(s)",
        generated.route_count,
        generated.platform,
        generated.files.len()
    );
    println!("{}", generated.usage_hint);

    Ok(())
}
