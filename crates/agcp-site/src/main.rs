//! # agcp-site
//!
//! Website server binary: loads settings, applies command-line overrides,
//! starts the HTTP server and waits for ctrl-c.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use agcp_contact::HttpFormRelay;
use agcp_core::logging::{LogFormat, init_subscriber};
use agcp_server::{ServerConfig, SiteServer};
use agcp_settings::{SiteSettings, load_settings, load_settings_from_path};
use anyhow::{Context, Result};
use clap::Parser;

/// AGCP Farmaceuticos website server.
#[derive(Parser, Debug)]
#[command(name = "agcp-site", version, about = "AGCP Farmaceuticos website server")]
struct Cli {
    /// Settings file (defaults to `~/.agcp/settings.json`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind.
    #[arg(long)]
    port: Option<u16>,

    /// Directory of public files (portraits, favicon).
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Form relay origin contact submissions are posted to.
    #[arg(long)]
    relay_url: Option<String>,

    /// Log level filter (overridden by `RUST_LOG`).
    #[arg(long)]
    log_level: Option<String>,
}

/// Load the settings layers, then let explicit flags win.
fn resolve_settings(cli: &Cli) -> Result<SiteSettings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings_from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => load_settings().context("Failed to load settings")?,
    };

    if let Some(host) = &cli.host {
        settings.server.host.clone_from(host);
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(dir) = &cli.public_dir {
        settings.server.public_dir = dir.to_string_lossy().into_owned();
    }
    if let Some(url) = &cli.relay_url {
        settings.contact.relay_url.clone_from(url);
    }
    if let Some(level) = &cli.log_level {
        settings.logging.level.clone_from(level);
    }

    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;

    init_subscriber(
        &settings.logging.level,
        LogFormat::parse(&settings.logging.format).unwrap_or_default(),
    );

    let metrics = agcp_server::metrics::install_recorder()
        .context("Failed to install metrics recorder")?;

    let relay = HttpFormRelay::new(
        &settings.contact.relay_url,
        settings.contact.timeout_ms.map(Duration::from_millis),
    )
    .context("Failed to build form relay client")?;
    tracing::info!(endpoint = relay.endpoint(), "form relay configured");

    let server = SiteServer::new(ServerConfig::from_settings(&settings), Arc::new(relay), metrics);

    let (addr, handle) = server.listen().await.context("Failed to bind server")?;
    tracing::info!("AGCP site v{} listening on http://{addr}", agcp_core::VERSION);

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    tracing::info!("Shutting down...");
    if !server.shutdown_and_wait(handle).await {
        tracing::warn!("Shutdown did not drain cleanly");
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(json: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn cli_flags_default_to_none() {
        let cli = Cli::parse_from(["agcp-site"]);
        assert!(cli.config.is_none());
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "agcp-site",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--public-dir",
            "/srv/public",
        ]);
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.public_dir, Some(PathBuf::from("/srv/public")));
    }

    #[test]
    fn flags_override_file() {
        let (_dir, path) = write_settings(
            r#"{"server": {"port": 4000, "host": "0.0.0.0"}, "contact": {"relayUrl": "https://forms.example.net"}}"#,
        );
        let config = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["agcp-site", "--config", &config, "--port", "5000"]);

        let settings = resolve_settings(&cli).unwrap();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn invalid_relay_url_is_rejected() {
        let (_dir, path) = write_settings("{}");
        let config = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["agcp-site", "--config", &config, "--relay-url", "ftp://relay"]);

        let err = resolve_settings(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("contact.relayUrl"));
    }

    #[test]
    fn missing_relay_is_rejected() {
        let (_dir, path) = write_settings("{}");
        let config = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["agcp-site", "--config", &config]);

        let err = resolve_settings(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("contact.relayUrl is required"));
    }

    #[test]
    fn relay_on_site_origin_is_rejected() {
        let (_dir, path) = write_settings(r#"{"site": {"baseUrl": "https://agcp.pt"}}"#);
        let config = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["agcp-site", "--config", &config, "--relay-url", "https://agcp.pt/"]);

        let err = resolve_settings(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("separate host"));
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let (_dir, path) = write_settings("{not json");
        let config = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["agcp-site", "--config", &config]);

        let err = resolve_settings(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load settings"));
    }
}
