use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skillgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a skill-set fixture.
    Validate(ValidateArgs),
    /// Lay out a skill-set fixture and write it as an SVG document.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input skill-set fixture JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input skill-set fixture JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Viewport width in pixels. Defaults to the fixture's logical canvas width.
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in pixels. Defaults to the fixture's logical canvas height.
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_skill_set(path: &Path) -> anyhow::Result<skillgraph::SkillSet> {
    let f = File::open(path).with_context(|| format!("open skill set '{}'", path.display()))?;
    let r = BufReader::new(f);
    let set: skillgraph::SkillSet =
        serde_json::from_reader(r).with_context(|| "parse skill set JSON")?;
    Ok(set)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let set = read_skill_set(&args.in_path)?;
    set.validate()?;
    eprintln!(
        "ok: {} skills for member '{}'",
        set.skills.len(),
        set.member.id
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let set = read_skill_set(&args.in_path)?;
    set.validate()?;

    let viewport = skillgraph::Viewport::new(
        args.width.unwrap_or(set.canvas.width),
        args.height.unwrap_or(set.canvas.height),
    )?;

    let scene = skillgraph::layout(&set, viewport)?;
    let svg = skillgraph::render_scene(&scene);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
