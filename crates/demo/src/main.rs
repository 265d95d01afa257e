// File: crates/demo/src/main.rs
// Summary: Demo CLI; renders a saved locationforecast document to SVG, or the wind-barb reference sheet.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wx_core::ingest::{parse_expiry, parse_forecast};
use wx_core::svg::glyph_sheet_svg;
use wx_core::windbarb::reference_sheet;
use wx_core::{ChartRenderer, ForecastTimeline, Palette, RenderOptions, SvgOptions, TimelineState};

#[derive(Parser)]
#[command(name = "wx-demo")]
#[command(about = "Render a compact multi-day forecast chart to SVG")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "./config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a forecast document as a chart
    Render {
        /// locationforecast/2.0 JSON document
        #[arg(short, long)]
        forecast: PathBuf,
        /// Value of the response's Expires header
        #[arg(long)]
        expires: Option<String>,
        /// Render as of this RFC 3339 instant instead of the wall clock
        #[arg(long)]
        now: Option<String>,
        #[arg(short, long, default_value = "target/out/wx.svg")]
        out: PathBuf,
    },
    /// Draw wind barbs for 0 to 109 knots
    Barbs {
        #[arg(short, long, default_value = "target/out/barbs.svg")]
        out: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct Settings {
    lat: f64,
    long: f64,
    placename: String,
    #[serde(default)]
    resolution: Option<[u32; 2]>,
    #[serde(default)]
    colors: Palette,
    #[serde(default)]
    icon_dir: Option<PathBuf>,
}

impl Settings {
    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions { place: self.placename.clone(), palette: self.colors.clone(), ..RenderOptions::default() };
        if let Some([w, h]) = self.resolution {
            opts.width = w;
            opts.height = h;
        }
        opts
    }

    fn svg_options(&self) -> Result<SvgOptions> {
        let dir = self.icon_dir.clone().unwrap_or_else(|| PathBuf::from("weather/svg"));
        let dir = if dir.is_absolute() { dir } else { std::env::current_dir().context("resolving icon dir")?.join(dir) };
        Ok(SvgOptions { icon_prefix: format!("file:{}", dir.display()) })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render { forecast, expires, now, out } => {
            let settings = Settings::load(&cli.config)?;
            render(&settings, &forecast, expires.as_deref(), now.as_deref(), &out)
        }
        Commands::Barbs { out } => barbs(&out),
    }
}

fn render(settings: &Settings, forecast: &Path, expires: Option<&str>, now: Option<&str>, out: &Path) -> Result<()> {
    let now = match now {
        Some(s) => DateTime::parse_from_rfc3339(s).with_context(|| format!("parsing --now {s}"))?.with_timezone(&Utc),
        None => Utc::now(),
    };
    debug!(
        lat = settings.lat,
        long = settings.long,
        "source https://api.met.no/weatherapi/locationforecast/2.0/complete?lat={}&lon={}",
        settings.lat,
        settings.long
    );

    let text = std::fs::read_to_string(forecast).with_context(|| format!("reading {}", forecast.display()))?;
    let points = parse_forecast(&text).with_context(|| format!("parsing {}", forecast.display()))?;
    let expiry = match expires {
        Some(h) => parse_expiry(h)?,
        None => now,
    };
    info!(points = points.len(), %expiry, "loaded forecast");

    let mut timeline = ForecastTimeline::new();
    timeline.ingest(points, expiry);
    timeline.advance(now);
    if timeline.state() == TimelineState::Exhausted {
        warn!("forecast exhausted; rendering an empty chart");
    }
    if timeline.needs_refresh(now) {
        info!("forecast has expired and should be fetched again");
    }
    let wait = timeline.poll_interval(now);
    debug!(seconds = wait.num_seconds(), "next poll");

    let renderer = ChartRenderer::new(settings.render_options());
    let canvas = renderer.render(&timeline.default_window(), now);
    canvas.write_svg(out, &settings.svg_options()?)?;
    info!(primitives = canvas.len(), "wrote {}", out.display());
    Ok(())
}

fn barbs(out: &Path) -> Result<()> {
    let color = Palette::default().wind;
    let sheet: Vec<_> = reference_sheet(110, 0.7, &color)
        .into_iter()
        .map(|(kts, label, glyph)| (kts.to_string(), label, glyph))
        .collect();
    let svg = glyph_sheet_svg(600.0, 448.0, &sheet);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    info!("wrote {}", out.display());
    Ok(())
}
