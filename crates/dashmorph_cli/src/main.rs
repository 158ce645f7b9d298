//! Dashmorph CLI
//!
//! Edit two-state line icons and generate their HTML/CSS/JS.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashmorph_codegen::{generate_code, Compiler, GeneratedCode};
use dashmorph_core::{DragOptions, LineCollection, LineState, Method, Point, DEFAULT_LINE_COLORS};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::{parse_lines_json, DashmorphProject, PROJECT_FILE};

#[derive(Parser)]
#[command(name = "dashmorph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Animated menu/close icon generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a dashmorph.toml with the default three-line icon
    Init {
        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing dashmorph.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Generate the icon's code
    Generate {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Toggle method (checkbox, class); overrides [output] method
        #[arg(short, long)]
        method: Option<String>,

        /// Part to print (full, html, css, js)
        #[arg(long, default_value = "full")]
        part: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write a standalone HTML page showing the icon
    Preview {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Output path
        #[arg(short, long, default_value = "preview.html")]
        output: String,
    },

    /// List the project's lines
    Lines {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,
    },

    /// Edit the project's lines
    Edit {
        /// Project directory
        #[arg(short, long, default_value = ".", global = true)]
        project: String,

        #[command(subcommand)]
        command: EditCommands,
    },

    /// Replace the project's lines with a JSON line collection
    ImportJson {
        /// JSON file
        file: String,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,
    },
}

#[derive(Subcommand)]
enum EditCommands {
    /// Append a new line
    AddLine,

    /// Remove a line
    RemoveLine {
        /// Line index
        line: usize,
    },

    /// Move a line to another position
    MoveLine {
        from: usize,
        to: usize,
    },

    /// Reverse the point order of one state
    Reverse {
        line: usize,

        /// State (menu, close)
        #[arg(short, long)]
        state: String,
    },

    /// Exchange a line's menu and close shapes
    Swap {
        line: usize,
    },

    /// Set a line's color, or reset it to the palette when omitted
    Color {
        line: usize,
        color: Option<String>,
    },

    /// Move a point
    MovePoint {
        line: usize,

        /// State (menu, close)
        #[arg(short, long)]
        state: String,

        /// Point index
        point: usize,

        x: f64,
        y: f64,

        /// Snap to a grid of this step
        #[arg(long)]
        snap: Option<f64>,

        /// Keep the move on the dominant axis
        #[arg(long)]
        lock: bool,
    },

    /// Insert an anchor after a point
    AddPoint {
        line: usize,

        /// State (menu, close)
        #[arg(short, long)]
        state: String,

        /// Index of the point to insert after
        after: usize,

        x: f64,
        y: f64,
    },

    /// Remove a point
    RemovePoint {
        line: usize,

        /// State (menu, close)
        #[arg(short, long)]
        state: String,

        point: usize,
    },

    /// Restore the default three-line icon
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { name, force } => cmd_init(name.as_deref(), force),

        Commands::Generate {
            project,
            method,
            part,
            output,
        } => cmd_generate(&project, method.as_deref(), &part, output.as_deref()),

        Commands::Preview { project, output } => cmd_preview(&project, &output),

        Commands::Lines { project } => cmd_lines(&project),

        Commands::Edit { project, command } => cmd_edit(&project, command),

        Commands::ImportJson { file, project } => cmd_import_json(&file, &project),
    }
}

fn cmd_init(name: Option<&str>, force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let name = name
        .or_else(|| cwd.file_name().and_then(|n| n.to_str()))
        .unwrap_or("dashmorph-icon");

    if DashmorphProject::file_in(&cwd).exists() && !force {
        anyhow::bail!(
            "This directory already contains a {} (use --force to overwrite)",
            PROJECT_FILE
        );
    }

    DashmorphProject::new(name).save_to_dir(&cwd)?;

    info!("Created {} for '{}'", PROJECT_FILE, name);
    info!("Run `dashmorph generate` to print the code");

    Ok(())
}

fn generate(project: &DashmorphProject, method: Method) -> Result<GeneratedCode> {
    let class_names = project.output.class_names()?;
    let size = project.output.size()?;
    Ok(generate_code(project.lines.lines(), method, &class_names, &size))
}

fn cmd_generate(
    source: &str,
    method: Option<&str>,
    part: &str,
    output: Option<&str>,
) -> Result<()> {
    let project = DashmorphProject::load_from_dir(Path::new(source))?;
    let method = match method {
        Some(m) => m.parse::<Method>()?,
        None => project.output.method,
    };

    info!(
        "Generating {} ({} lines, {} method)",
        project.project.name,
        project.lines.len(),
        method
    );

    let code = generate(&project, method)?;
    let text = match part {
        "full" => code.full_code,
        "html" => code.html,
        "css" => code.css,
        "js" => {
            if !method.needs_script() {
                info!("The checkbox method needs no script");
            }
            code.js
        }
        other => {
            let valid_parts = ["full", "html", "css", "js"];
            anyhow::bail!("Invalid part '{}'. Valid parts: {:?}", other, valid_parts);
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write {}", path))?;
            info!("Wrote {}", path);
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn cmd_preview(source: &str, output: &str) -> Result<()> {
    let project = DashmorphProject::load_from_dir(Path::new(source))?;
    let code = generate(&project, project.output.method)?;

    let page = code.preview_document(&project.project.name);
    fs::write(output, page).with_context(|| format!("Failed to write {}", output))?;

    info!("Preview written to {}", output);
    Ok(())
}

fn cmd_lines(source: &str) -> Result<()> {
    let project = DashmorphProject::load_from_dir(Path::new(source))?;
    let compiler: Compiler = Compiler::default();

    println!("{} ({} lines)", project.project.name, project.lines.len());
    println!();
    for (i, line) in project.lines.iter().enumerate() {
        let data = compiler.compile_line(line);
        let color = project.lines.color_of(i).unwrap_or(DEFAULT_LINE_COLORS[0]);
        println!(
            "[{}] line--{}  {}  menu: {} anchors, {:.2}  close: {} anchors, {:.2}{}",
            i,
            i + 1,
            color,
            line.anchors(LineState::Menu).len(),
            data.menu_length,
            line.anchors(LineState::Close).len(),
            data.close_length,
            if data.is_empty() {
                "  (not drawable)"
            } else if data.close_collapsed() {
                "  (hidden when active)"
            } else {
                ""
            }
        );
    }

    Ok(())
}

fn cmd_edit(source: &str, command: EditCommands) -> Result<()> {
    let path = PathBuf::from(source);
    let mut project = DashmorphProject::load_from_dir(&path)?;

    project.lines = apply_edit(&project.lines, command)?;
    project.save_to_dir(&path)?;

    info!("Saved {} ({} lines)", PROJECT_FILE, project.lines.len());
    Ok(())
}

fn apply_edit(lines: &LineCollection, command: EditCommands) -> Result<LineCollection> {
    let edited = match command {
        EditCommands::AddLine => lines.add_line()?,
        EditCommands::RemoveLine { line } => lines.remove_line(line)?,
        EditCommands::MoveLine { from, to } => lines.move_line(from, to)?,
        EditCommands::Reverse { line, state } => lines.reverse_line(line, state.parse()?)?,
        EditCommands::Swap { line } => lines.swap_states(line)?,
        EditCommands::Color { line, color } => lines.set_color(line, color)?,
        EditCommands::MovePoint {
            line,
            state,
            point,
            x,
            y,
            snap,
            lock,
        } => {
            let state: LineState = state.parse()?;
            let mut options = DragOptions {
                snap,
                axis_lock_origin: None,
            };
            if lock {
                let origin = lines
                    .get(line)
                    .and_then(|l| l.points(state).get(point))
                    .map(|p| p.position());
                if let Some(origin) = origin {
                    options = options.with_axis_lock(origin);
                }
            }
            lines.move_point(line, state, point, Point::new(x, y), options)?
        }
        EditCommands::AddPoint {
            line,
            state,
            after,
            x,
            y,
        } => lines.insert_point(line, state.parse()?, after, Point::new(x, y))?,
        EditCommands::RemovePoint { line, state, point } => {
            lines.remove_point(line, state.parse()?, point)?
        }
        EditCommands::Reset => lines.reset(),
    };
    Ok(edited)
}

fn cmd_import_json(file: &str, source: &str) -> Result<()> {
    let path = PathBuf::from(source);
    let mut project = DashmorphProject::load_from_dir(&path)?;

    let content = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    project.lines =
        parse_lines_json(&content).with_context(|| format!("Failed to import {}", file))?;
    project.save_to_dir(&path)?;

    info!("Imported {} lines from {}", project.lines.len(), file);
    Ok(())
}
