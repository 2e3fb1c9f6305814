use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use shapepad::config::PadConfig;
use shapepad::core::app::App;
use shapepad::render::image::PixmapSurface;
use shapepad::render::{self, RecordingSurface};
use shapepad::script::EventScript;

#[derive(Parser)]
#[command(name = "shapepad")]
#[command(about = "Replay a recorded drawing session and write the final frame to an image")]
struct Cmd {
    /// JSON event script to replay
    script: Option<PathBuf>,

    /// Output image; format follows the extension
    #[arg(short, long, default_value = "drawing.png")]
    out: PathBuf,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured canvas width
    #[arg(long)]
    width: Option<u32>,

    /// Override the configured canvas height
    #[arg(long)]
    height: Option<u32>,

    /// Print the stroke calls that replay the committed shapes
    #[arg(long)]
    trace: bool,

    /// Save the effective configuration and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cmd = Cmd::parse();

    let mut config = PadConfig::load(cmd.config.as_deref());
    if let Some(width) = cmd.width {
        config.canvas_width = width;
    }
    if let Some(height) = cmd.height {
        config.canvas_height = height;
    }

    if cmd.write_config {
        let path = match cmd.config.clone() {
            Some(path) => path,
            None => PadConfig::default_path().context("No config directory available")?,
        };
        config.save_to(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let script_path = cmd
        .script
        .as_deref()
        .context("An event script is required")?;
    let script = EventScript::load(script_path)?;
    log::info!("Replaying {} events from {}", script.steps.len(), script_path.display());

    let mut app = App::new(PixmapSurface::new(&config)?, config.default_kind);
    for msg in script.messages() {
        app.update(msg);
    }
    log::info!("{} shapes committed", app.state.shapes.len());

    if cmd.trace {
        let mut recorder = RecordingSurface::new();
        render::render(&mut recorder, &app.state.shapes, None);
        for call in recorder.frame() {
            println!("{call}");
        }
    }

    app.surface().save(&cmd.out)
}
