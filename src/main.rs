use clap::{Parser, ValueEnum};
use sdash_core::{config::Config, Dashboard};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sdash", about = "Terminal dashboard for fire/intruder sensor alerts")]
struct Cli {
    /// Config file (default: ~/.config/sdash/config.toml, created if missing).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Event log written by the sensor daemon.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Directory the sensor daemon saves captures into.
    #[arg(long, value_name = "PATH")]
    captures_dir: Option<PathBuf>,

    /// Seconds between automatic refreshes.
    #[arg(long, value_name = "N")]
    refresh_secs: Option<u64>,

    /// Run one refresh cycle, print the dashboard to stdout, and exit.
    #[arg(long)]
    once: bool,

    /// Output format for --once.
    #[arg(long, value_enum, default_value_t = Format::Json, requires = "once")]
    format: Format,

    /// Write debug logs to /tmp/sdash-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/sdash-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("sdash debug log started, tail -f /tmp/sdash-debug.log");
    }

    let config = resolve_config(&cli)?;

    if cli.once {
        let dashboard = sdash_sources::refresh(&config);
        let mut out = std::io::stdout().lock();
        match cli.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut out, &dashboard)?;
                writeln!(out)?;
            }
            Format::Text => print_text(&mut out, &dashboard)?,
        }
        return Ok(());
    }

    sdash_tui::run(config)
}

/// Load the config file and apply command-line overrides on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = &cli.log_file {
        config.sources.log_file = path.clone();
    }
    if let Some(dir) = &cli.captures_dir {
        config.sources.captures_dir = dir.clone();
    }
    if let Some(secs) = cli.refresh_secs {
        config.dashboard.refresh_secs = secs;
    }
    Ok(config)
}

fn print_text(out: &mut impl Write, d: &Dashboard) -> std::io::Result<()> {
    let m = &d.metrics;
    writeln!(out, "Fire alerts:     {}", m.fire_alerts)?;
    writeln!(out, "Intruder alerts: {}", m.intruder_alerts)?;
    writeln!(out, "Last temp:       {:.1}°C", m.last_temp)?;
    writeln!(out, "Last humidity:   {:.1}%", m.last_humidity)?;

    writeln!(out, "\nRecent captures:")?;
    if d.captures.is_empty() {
        writeln!(out, "  No captures yet - trigger an alert!")?;
    }
    for t in &d.captures {
        writeln!(out, "  {} {} ({}x{})", t.capture.kind, t.timestamp(), t.width, t.height)?;
    }

    writeln!(out, "\nEvent log ({} of {}):", d.feed.len(), d.total_events)?;
    if d.feed.is_empty() {
        writeln!(out, "  No events yet")?;
    }
    for e in &d.feed {
        writeln!(
            out,
            "  {} {} | Temp: {:.1}°C | Humidity: {:.1}% | Distance: {:.1}cm",
            e.kind, e.timestamp, e.temp, e.humidity, e.distance
        )?;
    }
    Ok(())
}
