use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cityposter::{
    Analyzer, Canvas, CanvasPreset, DesignParameters, FontData, LocalAnalyzer, RenderOptions,
    StyleMode,
};

#[derive(Parser, Debug)]
#[command(name = "cityposter", version, about = "Procedural posters from a city memory")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive design parameters from a memory with the offline heuristic.
    Analyze(AnalyzeArgs),
    /// Render a poster PNG from a design parameters JSON file.
    Render(RenderArgs),
    /// Analyze a memory and render the poster in one step.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct MemoryArgs {
    /// City name.
    #[arg(long)]
    city: String,

    /// Free-text memory about the city.
    #[arg(long)]
    memory: String,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: MemoryArgs,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Design parameters JSON (raw analyzer replies with code fences are accepted).
    #[arg(long)]
    params: PathBuf,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    input: MemoryArgs,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Args, Debug)]
struct RenderFlags {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Seed of the procedural layers.
    #[arg(long, default_value_t = cityposter::DEFAULT_SEED)]
    seed: u64,

    /// Canvas size preset.
    #[arg(long, value_enum, default_value_t = PresetArg::Story)]
    preset: PresetArg,

    /// Custom width in pixels (overrides the preset, needs --height).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Custom height in pixels (overrides the preset, needs --width).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Override the style mode (e.g. ocean_motion, cyberpunk).
    #[arg(long)]
    style: Option<String>,

    /// Override the typography focus (balanced, bottom_focused, large_title).
    #[arg(long)]
    focus: Option<String>,

    /// Caption font file. Defaults to a system sans-serif.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Skip the caption band and text.
    #[arg(long, default_value_t = false)]
    no_text: bool,

    /// Draw the caption on shape-scatter styles too (they have none by default).
    #[arg(long, default_value_t = false, conflicts_with = "no_text")]
    text: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    Story,
    Print,
    Compact,
}

impl From<PresetArg> for CanvasPreset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Story => CanvasPreset::Story,
            PresetArg::Print => CanvasPreset::Print,
            PresetArg::Compact => CanvasPreset::Compact,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Analyze(args) => cmd_analyze(args),
        Command::Render(args) => cmd_render(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let params = LocalAnalyzer.analyze(&args.input.city, &args.input.memory)?;
    let json = serde_json::to_string_pretty(&params).context("serialize design parameters")?;
    match args.out {
        Some(out) => {
            ensure_parent(&out)?;
            std::fs::write(&out, json + "\n")
                .with_context(|| format!("write params '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.params)
        .with_context(|| format!("read params '{}'", args.params.display()))?;
    let params = DesignParameters::from_reply(&text)
        .with_context(|| format!("parse params '{}'", args.params.display()))?;
    render_to_file(params, &args.render)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let params = LocalAnalyzer.analyze(&args.input.city, &args.input.memory)?;
    tracing::info!(
        style = %params.style_mode,
        mood = %params.mood,
        "analyzed memory"
    );
    render_to_file(params, &args.render)
}

fn render_to_file(mut params: DesignParameters, flags: &RenderFlags) -> anyhow::Result<()> {
    if let Some(style) = &flags.style {
        params.style_mode = style.clone();
    }
    if let Some(focus) = &flags.focus {
        params.typography_focus = focus.clone();
    }

    let canvas = match (flags.width, flags.height) {
        (Some(width), Some(height)) => Canvas::new(width, height)?,
        _ => CanvasPreset::from(flags.preset).canvas(),
    };
    let scatter = matches!(StyleMode::parse(&params.style_mode), StyleMode::ShapeScatter(_));
    let typography = !flags.no_text && (flags.text || !scatter);
    let opts = RenderOptions {
        canvas,
        seed: flags.seed,
        typography,
        font: if typography {
            resolve_font(flags.font.as_deref())?
        } else {
            None
        },
    };

    let png = cityposter::render_poster_png(&params, &opts)?;
    ensure_parent(&flags.out)?;
    std::fs::write(&flags.out, png)
        .with_context(|| format!("write png '{}'", flags.out.display()))?;

    eprintln!("wrote {}", flags.out.display());
    Ok(())
}

fn resolve_font(path: Option<&Path>) -> anyhow::Result<Option<FontData>> {
    match path {
        Some(path) => Ok(Some(cityposter::load_font_file(path)?)),
        None => {
            let font = cityposter::discover_system_font();
            if font.is_none() {
                tracing::warn!("no system font found; pass --font to draw caption text");
            }
            Ok(font)
        }
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
