mod config;
mod web;

use anyhow::Result;
use tracing::info;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env();
    info!(
        "starting valuator in {} mode (debug: {})",
        config.environment, config.debug
    );
    web::start_web(config).await
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    #[test]
    fn rust_log_directives_are_understood() {
        let filter = EnvFilter::try_new("valuator=debug,tower_http=trace").unwrap();
        let directives = filter.to_string();
        assert!(directives.contains("valuator=debug"));
        assert!(directives.contains("tower_http=trace"));
    }
}
