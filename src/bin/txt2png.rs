use anyhow::{Context, Result};
use clap::Parser;
use softgl::command;
use softgl::Pipeline;
use std::path::PathBuf;

/// Render a scene command file to an image
#[derive(Parser)]
struct Args {
    /// Scene command file
    input: PathBuf,

    /// Write the image here instead of the file named by `png`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log level (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let cmds = command::parse(&text)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    // Textures are named relative to the scene file
    let base = args.input.parent().map(PathBuf::from).unwrap_or_default();
    let mut pipe = Pipeline::default();
    command::execute_all(&mut pipe, &cmds, &base)
        .with_context(|| format!("rendering {}", args.input.display()))?;

    let mut canvas = pipe.finalize()?;
    if let Some(output) = args.output {
        canvas.output = output;
    }
    canvas.save()
        .with_context(|| format!("writing {}", canvas.output.display()))?;
    Ok(())
}
