//! The viewer's three screens, keyed on the acquisition outcome:
//! a loading spinner, an error screen with a retreat hint, or the ready
//! summary (datasets plus the derived layer config).

use anyhow::Result;
use gridmap_runtime::config::Settings;
use gridmap_runtime::session::{AuthGate, CycleEnd, MapSession, Outcome};
use indicatif::ProgressBar;
use serde_json::json;
use std::time::Duration;

pub async fn run(settings: Settings, id: Option<String>, json: bool, quiet: bool) -> Result<()> {
    let session = MapSession::new(settings);

    if session.check_auth().await == AuthGate::LoginRequired {
        return login_redirect(&session);
    }

    // An unusable token is its own terminal screen; no point acquiring
    // data the viewer cannot draw.
    let map_config = session.map_config().await;
    if !map_config.has_token() {
        eprintln!("Mapbox token required.");
        eprintln!("Configure MAPBOX_TOKEN on the service, then retry.");
        eprintln!("A free token is available at https://www.mapbox.com/");
        std::process::exit(1);
    }

    let label = id.as_deref().unwrap_or("(none)").to_string();
    let spinner = if quiet || json {
        None
    } else {
        let bar = ProgressBar::new_spinner();
        bar.set_message(format!("Loading network {label}..."));
        bar.enable_steady_tick(Duration::from_millis(120));
        Some(bar)
    };

    let ended = session.begin_cycle(id.as_deref()).await;
    if let Some(bar) = &spinner {
        bar.finish_and_clear();
    }

    if ended == CycleEnd::Unauthorized {
        return login_redirect(&session);
    }

    match session.outcome().await {
        Outcome::Ready { datasets, config } => {
            if json {
                let document = json!({
                    "datasets": datasets,
                    "config": config,
                    "mapbox_token": map_config.mapbox_token,
                });
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                println!("Network {label}: {} layer(s)", datasets.len());
                for dataset in datasets.iter() {
                    println!("  - {} ({} rows)", dataset.info.label, dataset.data.rows.len());
                }
            }
            Ok(())
        }
        Outcome::Error(message) => {
            eprintln!("Error loading network: {message}");
            eprintln!("Go back and pick another network.");
            std::process::exit(1);
        }
        Outcome::Loading => {
            // Only reachable if another cycle superseded this one.
            eprintln!("Load superseded before completion.");
            std::process::exit(1);
        }
    }
}

fn login_redirect(session: &MapSession) -> Result<()> {
    eprintln!("Not signed in, or the session expired.");
    eprintln!("Log in at {} and retry.", session.settings().login_url);
    std::process::exit(1);
}
