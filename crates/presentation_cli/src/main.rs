//! Wayfarer CLI
//!
//! Command-line client for a running Wayfarer server.

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use domain::{LocationInput, TransportMode};
use serde_json::{Value, json};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wayfarer CLI
#[derive(Parser)]
#[command(name = "wayfarer-cli")]
#[command(author, version, about = "Wayfarer delivery estimator CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Server URL
    #[arg(
        short,
        long,
        global = true,
        env = "WAYFARER_URL",
        default_value = "http://localhost:3000"
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate delivery time for one transport mode
    ///
    /// Locations are either free text or "lat,lng".
    /// Example: wayfarer-cli calculate "Berlin, Germany" "48.8566,2.3522" --mode pigeon
    Calculate {
        /// Where the delivery starts
        origin: String,

        /// Where the delivery ends
        destination: String,

        /// Transport mode (walking, swimming, pigeon, rock-climbing)
        #[arg(short, long, default_value = "walking")]
        mode: String,
    },

    /// Estimate delivery time for every transport mode
    CalculateAll {
        /// Where the delivery starts
        origin: String,

        /// Where the delivery ends
        destination: String,
    },

    /// List the available transport modes
    Modes,

    /// Check server health and provider configuration
    Health,

    /// Guess where the owner of an email address is located
    LocateEmail {
        /// Email address to look up
        email: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Read a location argument: "lat,lng" becomes coordinates, anything else an address
fn parse_location(raw: &str) -> LocationInput {
    let coordinates = raw.split_once(',').and_then(|(lat, lng)| {
        let lat = lat.trim().parse::<f64>().ok()?;
        let lng = lng.trim().parse::<f64>().ok()?;
        Some((lat, lng))
    });

    match coordinates {
        Some((lat, lng)) => LocationInput::coordinates(lat, lng),
        None => LocationInput::address(raw.trim()),
    }
}

/// Unwrap the `{success, data}` envelope or turn the error body into an error
fn into_data(body: Value) -> anyhow::Result<Value> {
    if body.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(body.get("data").cloned().unwrap_or(Value::Null));
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    let code = body.get("code").and_then(Value::as_str).unwrap_or("error");
    anyhow::bail!("{message} ({code})")
}

/// One line summary of a delivery estimate
fn describe_estimate(estimate: &Value) -> String {
    let text = estimate["deliveryTimeText"].as_str().unwrap_or("?");
    let distance = estimate["distanceText"].as_str().unwrap_or("?");
    let marker = if estimate["isEstimate"].as_bool() == Some(true) {
        " (estimated distance)"
    } else {
        ""
    };
    format!("{text} over {distance}{marker}")
}

/// One line per mode present in a calculate-all response, in registry order
fn describe_all(estimates: &Value) -> Vec<String> {
    TransportMode::ALL
        .iter()
        .filter_map(|mode| {
            let estimate = estimates.get(mode.as_str())?;
            Some(format!("{:<14} {}", mode.as_str(), describe_estimate(estimate)))
        })
        .collect()
}

async fn post(client: &reqwest::Client, url: &str, path: &str, body: Value) -> anyhow::Result<Value> {
    let endpoint = endpoint_url(url, path);
    debug!(%endpoint, "POST");
    let body = client
        .post(endpoint)
        .json(&body)
        .send()
        .await?
        .json::<Value>()
        .await?;
    into_data(body)
}

async fn get(client: &reqwest::Client, url: &str, path: &str) -> anyhow::Result<Value> {
    let endpoint = endpoint_url(url, path);
    debug!(%endpoint, "GET");
    let body = client.get(endpoint).send().await?.json::<Value>().await?;
    into_data(body)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = reqwest::Client::new();
    let url = cli.url;

    match cli.command {
        Commands::Calculate {
            origin,
            destination,
            mode,
        } => {
            let request = json!({
                "origin": parse_location(&origin),
                "destination": parse_location(&destination),
                "mode": mode,
            });
            let estimate = post(&client, &url, "/calculate", request).await?;

            println!("📦 {origin} → {destination} by {mode}:");
            println!("   {}", describe_estimate(&estimate));
        },

        Commands::CalculateAll {
            origin,
            destination,
        } => {
            let request = json!({
                "origin": parse_location(&origin),
                "destination": parse_location(&destination),
            });
            let estimates = post(&client, &url, "/calculate-all", request).await?;

            println!("📦 {origin} → {destination}:");
            for line in describe_all(&estimates) {
                println!("   {line}");
            }
        },

        Commands::Modes => {
            let modes = get(&client, &url, "/modes").await?;

            println!("🚶 Transport modes:");
            for mode in modes.as_array().into_iter().flatten() {
                println!(
                    "   {:<14} {:>5} km/h  {}",
                    mode["mode"].as_str().unwrap_or("?"),
                    mode["speedKmH"].as_f64().unwrap_or_default(),
                    mode["description"].as_str().unwrap_or("")
                );
            }
        },

        Commands::Health => {
            match client.get(endpoint_url(&url, "/health")).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body = resp.json::<Value>().await?;
                    println!("✅ Healthy");
                    println!("   primary:  {}", body["providers"]["primary"]);
                    println!("   fallback: {}", body["providers"]["fallback"]);
                },
                Ok(resp) => {
                    println!("❌ Unhealthy: HTTP {}", resp.status());
                    std::process::exit(1);
                },
                Err(e) => {
                    println!("❌ Unhealthy: {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::LocateEmail { email } => {
            let found = post(&client, &url, "/locate-email", json!({ "email": email })).await?;

            println!(
                "📍 {} → {} ({})",
                found["email"].as_str().unwrap_or(&email),
                found["location"].as_str().unwrap_or("?"),
                found["source"].as_str().unwrap_or("?")
            );
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn endpoint_url_concatenates_correctly() {
        assert_eq!(
            endpoint_url("http://localhost:3000", "/modes"),
            "http://localhost:3000/modes"
        );
    }

    #[test]
    fn endpoint_url_strips_trailing_slash() {
        assert_eq!(
            endpoint_url("http://example.com/", "/calculate"),
            "http://example.com/calculate"
        );
    }

    #[test]
    fn coordinates_are_recognised() {
        assert_eq!(
            parse_location("48.8566, 2.3522"),
            LocationInput::coordinates(48.8566, 2.3522)
        );
    }

    #[test]
    fn everything_else_is_an_address() {
        assert_eq!(
            parse_location(" Paris, France "),
            LocationInput::address("Paris, France")
        );
        assert_eq!(parse_location("Berlin"), LocationInput::address("Berlin"));
    }

    #[test]
    fn success_envelope_yields_data() {
        let data = into_data(json!({"success": true, "data": [1, 2]})).unwrap();
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    fn error_envelope_becomes_error() {
        let err = into_data(json!({
            "success": false,
            "message": "Unknown transport mode: jetpack",
            "code": "unknown_mode"
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown transport mode: jetpack (unknown_mode)");
    }

    #[test]
    fn estimate_summary_marks_fallback() {
        let summary = describe_estimate(&json!({
            "deliveryTimeText": "10 hours, 58 minutes",
            "distanceText": "878 km",
            "isEstimate": true
        }));
        assert_eq!(summary, "10 hours, 58 minutes over 878 km (estimated distance)");
    }

    #[test]
    fn all_modes_listed_in_registry_order() {
        let estimate = |text: &str| {
            json!({"deliveryTimeText": text, "distanceText": "80 km", "isEstimate": false})
        };
        let lines = describe_all(&json!({
            "pigeon": estimate("1 hours, 0 minutes"),
            "rock-climbing": estimate("3 days, 8 hours"),
            "swimming": estimate("1 days, 2 hours"),
            "walking": estimate("16 hours, 0 minutes"),
        }));

        let modes: Vec<&str> = lines
            .iter()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(modes, ["walking", "swimming", "pigeon", "rock-climbing"]);
        assert_eq!(lines[0], "walking        16 hours, 0 minutes over 80 km");
    }

    #[test]
    fn cli_parses_calculate() {
        let cli = Cli::try_parse_from([
            "wayfarer-cli",
            "calculate",
            "Berlin",
            "Paris",
            "--mode",
            "pigeon",
        ])
        .unwrap();
        assert_eq!(cli.url, "http://localhost:3000");
        match cli.command {
            Commands::Calculate {
                origin,
                destination,
                mode,
            } => {
                assert_eq!(origin, "Berlin");
                assert_eq!(destination, "Paris");
                assert_eq!(mode, "pigeon");
            },
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn cli_accepts_global_url_and_verbosity() {
        let cli = Cli::try_parse_from(["wayfarer-cli", "-vv", "modes", "--url", "http://api:8080"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.url, "http://api:8080");
        assert!(matches!(cli.command, Commands::Modes));
    }

    #[test]
    fn cli_rejects_missing_destination() {
        assert!(Cli::try_parse_from(["wayfarer-cli", "calculate-all", "Berlin"]).is_err());
    }
}
