use interview_details::{Config, ConfigError, InterviewDetailsHandler, InterviewDetailsService, SupabaseStore};
use lamedh_http::{handler, lambda, lambda::Error};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // the platform timestamps every line
        .without_time()
        .init();

    let service = match Config::from_env().and_then(|config| build_store(&config)) {
        Ok(store) => InterviewDetailsService::new(store),
        Err(e) => {
            error!("interview store unavailable: {}", e);
            InterviewDetailsService::misconfigured(e)
        }
    };

    lambda::run(handler(InterviewDetailsHandler::new(service))).await
}

fn build_store(config: &Config) -> Result<SupabaseStore, ConfigError> {
    let store = SupabaseStore::new(config)?;
    info!(url = %config.supabase_url, timeout = ?config.timeout, "interview store configured");
    Ok(store)
}
