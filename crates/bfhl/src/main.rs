use bfhl::cli::App;
use bfhl::prelude::*;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    bfhl::server::run(app.serve, app.identity, app.global).await
}
