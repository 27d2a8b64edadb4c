use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;

/// 量測 classify-number 端點的回應時間
#[derive(Debug, Parser)]
#[command(name = "latency_check")]
#[command(about = "Time a single request against a running number-classifier")]
struct ProbeArgs {
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    url: String,

    #[arg(long, default_value = "371", allow_hyphen_values = true)]
    number: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = ProbeArgs::parse();
    let endpoint = format!("{}/api/classify-number", args.url.trim_end_matches('/'));

    let client = reqwest::Client::new();

    let start_time = Instant::now();
    let response = client
        .get(&endpoint)
        .query(&[("number", args.number.as_str())])
        .send()
        .await
        .with_context(|| format!("request to {} failed", endpoint))?;
    let elapsed = start_time.elapsed();

    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("response body was not JSON")?;

    println!("Response Time: {:.2} ms", elapsed.as_secs_f64() * 1000.0);
    println!("Status Code: {}", status.as_u16());
    println!("Response: {}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
