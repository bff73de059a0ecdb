use std::time::Duration;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "myfinance={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let timeout = Duration::from_secs(settings.database.timeout_secs);
    let store = match engine::Store::connect(&settings.database.uri, timeout).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("failed to connect to the document store: {err}");
            return Err(err.into());
        }
    };
    let engine = engine::Engine::new(&store);

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    if let Err(err) = server::run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
