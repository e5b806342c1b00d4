//! Report the resolved service configuration and token availability.

use anyhow::Result;
use gridmap_runtime::config::Settings;
use gridmap_runtime::session::MapSession;
use serde_json::json;

pub async fn run(settings: Settings, json: bool) -> Result<()> {
    let session = MapSession::new(settings.clone());
    let map_config = session.map_config().await;

    if json {
        let document = json!({
            "base_url": settings.base_url,
            "login_url": settings.login_url,
            "poll_max_attempts": settings.poll.max_attempts,
            "poll_interval_ms": settings.poll.interval.as_millis() as u64,
            "mapbox_token_present": map_config.has_token(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        println!("Service base URL: {}", settings.base_url);
        println!("Login URL:        {}", settings.login_url);
        println!(
            "Task polling:     {} attempts, {}ms apart",
            settings.poll.max_attempts,
            settings.poll.interval.as_millis()
        );
        println!(
            "Mapbox token:     {}",
            if map_config.has_token() { "configured" } else { "missing" }
        );
    }
    Ok(())
}
