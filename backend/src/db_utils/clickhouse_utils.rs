pub const DEFAULT_CLICKHOUSE_URL: &str = "http://localhost:8123";

pub fn get_clickhouse_client() -> clickhouse::Client {
    clickhouse::Client::default()
        .with_url(std::env::var("CLICKHOUSE_URL").unwrap_or(DEFAULT_CLICKHOUSE_URL.to_string()))
        .with_user(std::env::var("CLICKHOUSE_USER").unwrap_or("catalog".to_string()))
        .with_password(std::env::var("CLICKHOUSE_PASSWORD").unwrap_or("catalog".to_string()))
        .with_database(std::env::var("CLICKHOUSE_DATABASE").unwrap_or("catalog".to_string()))
}
