#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use pickup_schedule::{Schedule, http_api};

    let addr: SocketAddr = std::env::var("PICKUP_SCHEDULE_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
        .parse()?;

    println!("pickup-schedule web UI listening on http://{addr}");
    let schedule = Schedule::current_term();
    http_api::serve(addr, schedule).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
