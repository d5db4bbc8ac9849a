mod app;
mod config;
mod health;
mod interactive;
mod lookup;
mod page;
mod terminal;

#[cfg(test)]
mod tests;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cmd = app::Command::parse();
    cmd.set_log_level();

    let client = match cmd.build_client() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("unable to build client: {err}");
            eprintln!("error: unable to build client: {err}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    tracing::debug!("using lookup service at {}", client.base_url());

    std::process::exit(cmd.execute(client).await);
}
