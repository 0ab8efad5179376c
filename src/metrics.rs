use lazy_static::lazy_static;
use prometheus::{
    Counter, Encoder, Gauge, Histogram, TextEncoder, register_counter, register_gauge,
    register_histogram,
};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("chicken_requests_total", "Total number of generation requests").unwrap();
    pub static ref CHICKENS_SERVED: Counter =
        register_counter!("chicken_served_total", "Total chickens handed out").unwrap();
    pub static ref INVALID_COUNTS: Counter =
        register_counter!("chicken_invalid_count_total", "Requests rejected with cluck nope").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "chicken_request_latency_seconds",
        "Generation latency in seconds"
    )
    .unwrap();
    pub static ref LEADERBOARD_CLIENTS: Gauge =
        register_gauge!("chicken_leaderboard_clients", "Distinct clients on the leaderboard").unwrap();
}

// Render every registered metric in the prometheus text format
pub fn render() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
