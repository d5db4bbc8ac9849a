use iplookup::Client;

pub async fn execute(client: Client) -> i32 {
    match client.health().await {
        Ok(health) if health.is_ok() => {
            println!("{}", health.status);
            exitcode::OK
        }
        Ok(health) => {
            tracing::warn!("service reported status {:?}", health.status);
            println!("{}", health.status);
            exitcode::UNAVAILABLE
        }
        Err(err) => {
            tracing::error!("unable to reach service: {err:?}");
            eprintln!("error: {err}");
            exitcode::UNAVAILABLE
        }
    }
}
