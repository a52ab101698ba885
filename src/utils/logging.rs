use std::str::FromStr;
use tracing::Level;

// Installs the JSON formatter used for CloudWatch; unknown levels fall back to info.
pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes show up garbled in CloudWatch logs.
        .with_ansi(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .json()
        .init();
}

pub(crate) fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::utils::logging::parse_level;

    #[tokio::test]
    async fn test_should_parse_level() {
        assert_eq!(Level::DEBUG, parse_level("debug"));
        assert_eq!(Level::WARN, parse_level(" WARN "));
        assert_eq!(Level::INFO, parse_level("chatty"));
    }
}
