//! Dashmorph project file handling
//!
//! A project is a single `dashmorph.toml` holding the icon's metadata, its
//! output settings and its lines:
//!
//! ```toml
//! [project]
//! name = "my-icon"
//!
//! [output]
//! method = "checkbox"
//! base_class = "hamburger-menu"
//!
//! [[lines]]
//! menu = [{ x = 20, y = 30 }, { x = 80, y = 30 }]
//! close = [{ x = 20, y = 20 }, { x = 80, y = 80 }]
//! ```

use anyhow::{Context, Result};
use dashmorph_core::config::{
    DEFAULT_ACTIVE_CLASS, DEFAULT_BASE_CLASS, DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH,
};
use dashmorph_core::{ClassNameConfig, LineCollection, Method, SizeConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project configuration
pub const PROJECT_FILE: &str = "dashmorph.toml";

/// Project configuration stored in dashmorph.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct DashmorphProject {
    pub project: ProjectMetadata,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub lines: LineCollection,
}

/// Project metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Output settings, validated when converted into core config records
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub method: Method,
    #[serde(default = "default_base_class")]
    pub base_class: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_base_class() -> String {
    DEFAULT_BASE_CLASS.to_string()
}

fn default_active_class() -> String {
    DEFAULT_ACTIVE_CLASS.to_string()
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            base_class: default_base_class(),
            active_class: default_active_class(),
            width: default_width(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl OutputConfig {
    pub fn class_names(&self) -> Result<ClassNameConfig> {
        ClassNameConfig::new(self.base_class.as_str(), self.active_class.as_str())
            .context("Invalid class name in [output]")
    }

    pub fn size(&self) -> Result<SizeConfig> {
        SizeConfig::new(self.width, self.stroke_width).context("Invalid size in [output]")
    }
}

impl DashmorphProject {
    /// Create a project holding the seeded hamburger icon
    pub fn new(name: &str) -> Self {
        Self {
            project: ProjectMetadata {
                name: name.to_string(),
                description: None,
            },
            output: OutputConfig::default(),
            lines: LineCollection::seeded(),
        }
    }

    /// Path of the project file inside `dir`
    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(PROJECT_FILE)
    }

    /// Load project configuration from dashmorph.toml
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = Self::file_in(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `dashmorph init` to create one.",
                PROJECT_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let project: DashmorphProject = toml::from_str(content)?;
        Ok(project)
    }

    /// Write the project back to dashmorph.toml
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_path = Self::file_in(path);
        fs::write(&config_path, self.to_toml()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize project config")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportedLines {
    Bare(LineCollection),
    Wrapped { lines: LineCollection },
}

/// Parse a line collection exported as JSON.
///
/// Accepts either a bare array of lines or an object with a `lines` field.
pub fn parse_lines_json(content: &str) -> Result<LineCollection> {
    let imported: ImportedLines = serde_json::from_str(content)
        .context("Expected a JSON array of 1-10 lines, or an object with a `lines` array")?;
    Ok(match imported {
        ImportedLines::Bare(lines) | ImportedLines::Wrapped { lines } => lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashmorph_core::{LineState, PathPoint};

    #[test]
    fn test_minimal_project_uses_defaults() {
        let project = DashmorphProject::from_toml("[project]\nname = \"icon\"\n").unwrap();
        assert_eq!(project.project.name, "icon");
        assert_eq!(project.output.method, Method::Checkbox);
        assert_eq!(project.output.base_class, "hamburger-menu");
        assert_eq!(project.output.width, 50.0);
        assert_eq!(project.lines, LineCollection::seeded());
    }

    #[test]
    fn test_lines_table_with_integer_coordinates() {
        let content = r##"
[project]
name = "cross"

[output]
method = "class"
active_class = "open"

[[lines]]
color = "#ff6b6b"
menu = [{ x = 20, y = 30 }, { x = 80, y = 30 }]
close = [{ x = 20, y = 20 }, { type = "control", x = 40, y = 40 }, { x = 80, y = 80 }]
"##;
        let project = DashmorphProject::from_toml(content).unwrap();
        assert_eq!(project.output.method, Method::Class);
        assert_eq!(project.output.class_names().unwrap().active_class(), "open");
        assert_eq!(project.lines.len(), 1);

        let line = project.lines.get(0).unwrap();
        assert_eq!(line.color.as_deref(), Some("#ff6b6b"));
        assert_eq!(line.menu[1], PathPoint::anchor(80.0, 30.0));
        assert_eq!(line.close[1], PathPoint::control(40.0, 40.0));
        assert_eq!(line.anchors(LineState::Close).len(), 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut project = DashmorphProject::new("round-trip");
        project.lines = project.lines.add_line().unwrap();
        let content = project.to_toml().unwrap();
        let loaded = DashmorphProject::from_toml(&content).unwrap();
        assert_eq!(loaded.project.name, "round-trip");
        assert_eq!(loaded.lines, project.lines);
    }

    #[test]
    fn test_invalid_output_is_reported() {
        let content = "[project]\nname = \"x\"\n\n[output]\nbase_class = \"1abc\"\nwidth = -4\n";
        let project = DashmorphProject::from_toml(content).unwrap();
        assert!(project.output.class_names().is_err());
        assert!(project.output.size().is_err());
    }

    #[test]
    fn test_too_many_lines_rejected() {
        let mut content = String::from("[project]\nname = \"x\"\n");
        for _ in 0..11 {
            content.push_str(concat!(
                "\n[[lines]]\n",
                "menu = [{ x = 0, y = 0 }, { x = 1, y = 1 }]\n",
                "close = [{ x = 0, y = 0 }, { x = 1, y = 1 }]\n"
            ));
        }
        assert!(DashmorphProject::from_toml(&content).is_err());
    }

    #[test]
    fn test_parse_lines_json_forms() {
        let bare = r#"[{
            "menu": [{"x": 20, "y": 50, "type": "anchor"}, {"x": 80, "y": 50, "type": "anchor"}],
            "close": [{"x": 50, "y": 50, "type": "anchor"}, {"x": 50, "y": 50, "type": "anchor"}]
        }]"#;
        let lines = parse_lines_json(bare).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.get(0).unwrap(), &dashmorph_core::Line::default_line());

        let wrapped = format!(r#"{{"lines": {}}}"#, bare);
        assert_eq!(parse_lines_json(&wrapped).unwrap(), lines);

        assert!(parse_lines_json("[]").is_err());
        assert!(parse_lines_json("{}").is_err());
    }

    #[test]
    fn test_save_and_load_from_dir() {
        let dir = std::env::temp_dir().join(format!("dashmorph-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let project = DashmorphProject::new("saved");
        project.save_to_dir(&dir).unwrap();
        let loaded = DashmorphProject::load_from_dir(&dir).unwrap();
        assert_eq!(loaded.project.name, "saved");
        assert_eq!(loaded.lines, LineCollection::seeded());

        fs::remove_dir_all(&dir).unwrap();
        assert!(DashmorphProject::load_from_dir(&dir).is_err());
    }
}
