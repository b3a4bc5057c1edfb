use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use directories::ProjectDirs;
use log::{debug, info};
use serde::Serialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use strum::IntoEnumIterator;
use wavegauge::{
    config::GaugeFile,
    get_adapter,
    wave::{svg, RiseState, ScrollState},
    WaveEngine, WaveGeometry, WidgetKind, WidgetShapeAdapter,
};

/// Render animated liquid fill gauges.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The gauge description to use.
    #[arg(short, long, env = "WAVEGAUGE_CONFIG")]
    config: Option<PathBuf>,

    /// The widget to draw. Overrides the one in the gauge description.
    #[arg(short, long)]
    kind: Option<WidgetKind>,

    /// The widget's id, used to name its clip path.
    #[arg(long, default_value = "gauge")]
    id: String,

    /// The value to display. Overrides the one in the gauge description.
    #[arg(short, long, allow_negative_numbers = true)]
    value: Option<f64>,

    /// Move the gauge to this value while it's animating.
    #[arg(long, requires = "update_at", allow_negative_numbers = true)]
    update_to: Option<f64>,

    /// When to apply `--update-to`, in milliseconds.
    #[arg(long, requires = "update_to")]
    update_at: Option<u64>,

    /// The time to render a single frame at, in milliseconds. Defaults to when the wave settles.
    #[arg(long, conflicts_with = "frames")]
    at: Option<u64>,

    /// Render this many frames instead of a single one.
    #[arg(long)]
    frames: Option<u32>,

    /// The time between frames, in milliseconds.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// List the available widget kinds and exit.
    #[arg(long)]
    list_kinds: bool,

    /// Print the gauge description's JSON schema and exit.
    #[cfg(feature = "json-schema")]
    #[arg(long)]
    generate_config_schema: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

#[derive(Serialize)]
struct Frame {
    at_ms: u128,
    display_value: String,
    rise: RiseState,
    scroll: ScrollState,
    geometry: WaveGeometry,
}

fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "wavegauge")?;
    Some(dirs.config_dir().join("config.yaml"))
}

fn load_gauge_file(explicit: Option<&Path>) -> anyhow::Result<GaugeFile> {
    if let Some(path) = explicit {
        return GaugeFile::load(path).with_context(|| format!("loading gauge description from {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            debug!("using gauge description at {}", path.display());
            GaugeFile::load(&path).with_context(|| format!("loading gauge description from {}", path.display()))
        }
        _ => Ok(GaugeFile::default()),
    }
}

#[cfg(feature = "json-schema")]
fn print_schema(cli: &Cli) -> anyhow::Result<bool> {
    if !cli.generate_config_schema {
        return Ok(false);
    }
    let schema = schemars::schema_for!(GaugeFile);
    println!("{}", serde_json::to_string_pretty(&schema).context("serializing schema")?);
    Ok(true)
}

#[cfg(not(feature = "json-schema"))]
fn print_schema(_cli: &Cli) -> anyhow::Result<bool> {
    Ok(false)
}

fn sample_times(cli: &Cli, settle: Duration) -> Vec<Duration> {
    match cli.frames {
        Some(frames) => (0..frames).map(|i| Duration::from_millis(cli.interval_ms * i as u64)).collect(),
        None => vec![cli.at.map(Duration::from_millis).unwrap_or(settle)],
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_kinds {
        for kind in WidgetKind::iter() {
            println!("{kind}");
        }
        return Ok(());
    }
    if print_schema(&cli)? {
        return Ok(());
    }
    if cli.frames == Some(0) {
        bail!("at least one frame must be rendered");
    }

    let file = load_gauge_file(cli.config.as_deref())?;
    let kind = cli.kind.or(file.kind).unwrap_or(WidgetKind::Drop);
    let adapter = get_adapter(kind, &cli.id);
    let config = file.wave.clone().unwrap_or_else(|| adapter.default_config());
    let value = cli.value.or(file.value).unwrap_or(config.min_value);
    let settle = if config.wave_rise { config.rise_duration() } else { Duration::ZERO };
    info!("rendering {kind} gauge at value {value}");

    let engine = WaveEngine::for_widget(adapter.as_ref(), Some(config), value).context("creating wave engine")?;
    let mut pending_update = cli.update_to.zip(cli.update_at.map(Duration::from_millis));
    let mut frames = Vec::new();
    for now in sample_times(&cli, settle) {
        if let Some((target, at)) = pending_update.filter(|(_, at)| *at <= now) {
            engine.tick(at);
            engine.update(target);
            pending_update = None;
        }
        engine.tick(now);
        frames.push(Frame {
            at_ms: now.as_millis(),
            display_value: engine.display_value(),
            rise: engine.rise_state(),
            scroll: engine.scroll_state(),
            geometry: engine.current_geometry(),
        });
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&frames).context("serializing frames")?);
        }
        OutputFormat::Svg => {
            let target = adapter.clip_target();
            let envelope = adapter.envelope();
            for frame in &frames {
                print!("{}", svg::render_document(adapter.viewport(), &envelope, &target, &frame.geometry));
            }
        }
    }
    engine.destroy();
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
