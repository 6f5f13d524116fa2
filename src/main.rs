use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use image::RgbImage;

use theseus::solver::{make_solver, MazeSolver, SolverKind};
use theseus::{clean_maze, MazeGrid, MazePalette};

const PROGRAM_NAME: &str = "theseus";

/// Name, description and usage of every subcommand, in listing order.
const SUBCOMMANDS: [(&str, &str, &str); 3] = [
    ("help", "Shows help information.", "help [subcommand]"),
    (
        "solve",
        "Solves a maze image.",
        "solve <sourceImageFile.(bmp|png|jpg)> <outputImageFile.(bmp|png|jpg)> [shortest-path|wall-follower]",
    ),
    (
        "clean",
        "Cleans a maze image.",
        "clean <sourceImageFile.(bmp|png|jpg)> <outputImageFile.(bmp|png|jpg)>",
    ),
];

fn program_description() -> String {
    format!("{} v{}", PROGRAM_NAME, env!("CARGO_PKG_VERSION"))
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("{}", error);
        process::exit(-1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("{}", program_description());
        return Ok(());
    }
    let rest = &args[1..];
    match args[0].as_str() {
        "help" => help(rest),
        "solve" => solve(rest),
        "clean" => clean(rest),
        other => bail!("Subcommand '{}' not recognized.", other),
    }
}

fn help(args: &[String]) -> Result<()> {
    if args.is_empty() {
        println!("{}", program_description());
        println!();
        println!("Available commands:");
        for (name, description, _) in SUBCOMMANDS {
            println!("\t{}\t\t{}", name, description);
        }
        return Ok(());
    }
    match SUBCOMMANDS.iter().find(|(name, _, _)| *name == args[0]) {
        Some((name, description, usage)) => {
            println!("{}", name);
            println!("{}", description);
            println!();
            println!("Usage: {}", usage);
            Ok(())
        }
        None => bail!("Subcommand '{}' not recognized.", args[0]),
    }
}

fn solve(args: &[String]) -> Result<()> {
    if args.len() < 2 || args.len() > 3 {
        bail!("Incorrect number of arguments found.");
    }
    let source = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);
    let kind = match args.get(2) {
        Some(name) => SolverKind::from_str(name)?,
        None => SolverKind::ShortestPath,
    };
    let grid = load_grid(&source)?;
    let solution = make_solver(kind)
        .generate_solution(&grid)
        .ok_or_else(|| anyhow!("No solution found ({}).", source.display()))?;
    save_image(solution.image(), &output)
}

fn clean(args: &[String]) -> Result<()> {
    if args.len() != 2 {
        bail!("Incorrect number of arguments found.");
    }
    let source = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);
    let grid = load_grid(&source)?;
    let cleaned = clean_maze(&grid);
    save_image(&cleaned, &output)
}

fn load_grid(source: &Path) -> Result<MazeGrid> {
    let image = image::open(source)
        .with_context(|| format!("Source image not found ({}).", source.display()))?
        .to_rgb8();
    Ok(MazeGrid::new(image, MazePalette::default()))
}

fn save_image(image: &RgbImage, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create output directory ({}).", parent.display())
            })?;
        }
    }
    image
        .save(output)
        .with_context(|| format!("Cannot save output image ({}).", output.display()))
}
