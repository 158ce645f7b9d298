//! HTML, CSS and JS emission
//!
//! Pure text assembly over compiled [`PathData`]. The same inputs always
//! produce byte-identical output.

use dashmorph_core::{ClassNameConfig, Method, SizeConfig};
use dashmorph_path::format_number;
use serde::Serialize;

use crate::compile::PathData;

/// Easing shared by every animated property
pub const TRANSITION: &str = "all 0.8s cubic-bezier(.645, .045, .355, 1)";

/// Stroke color of the generated icon
pub const STROKE_COLOR: &str = "#ffffff";

/// Generated code for one icon
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    pub html: String,
    pub css: String,
    /// Empty for the checkbox method
    pub js: String,
    /// Style block, markup and (when present) script block in one snippet
    pub full_code: String,
}

impl GeneratedCode {
    /// A standalone page that shows the icon centered on a dark background
    pub fn preview_document(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{
      margin: 0;
      min-height: 100vh;
      display: flex;
      align-items: center;
      justify-content: center;
      background: #1e1e2e;
    }}
  </style>
</head>
<body>
{code}
</body>
</html>
"#,
            title = escape_html(title),
            code = self.full_code,
        )
    }
}

/// Emit markup, stylesheet and script for compiled lines
pub fn emit(
    paths: &[PathData],
    method: Method,
    class_names: &ClassNameConfig,
    size: &SizeConfig,
) -> GeneratedCode {
    let html = generate_html(paths, method, class_names.base_class());
    let css = generate_css(paths, method, class_names, size);
    let js = generate_js(method, class_names);

    let mut full_code = format!("<style>\n{}\n</style>\n\n{}", css, html);
    if !js.is_empty() {
        full_code.push_str(&format!("\n\n<script>\n{}\n</script>", js));
    }

    GeneratedCode {
        html,
        css,
        js,
        full_code,
    }
}

/// Root element with one `path` per line
pub fn generate_html(paths: &[PathData], method: Method, base_class: &str) -> String {
    let paths_html = paths
        .iter()
        .enumerate()
        .map(|(i, p)| format!(r#"    <path class="line--{}" d="{}" />"#, i + 1, p.d))
        .collect::<Vec<_>>()
        .join("\n");

    match method {
        Method::Checkbox => format!(
            r#"<label class="{base_class}">
  <input type="checkbox">
  <svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
{paths_html}
  </svg>
</label>"#
        ),
        Method::Class => format!(
            r#"<button class="{base_class}">
  <svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">
{paths_html}
  </svg>
</button>"#
        ),
    }
}

/// Selector that matches the icon's `svg` in the active state
pub fn active_selector(method: Method, class_names: &ClassNameConfig) -> String {
    match method {
        Method::Checkbox => format!(".{} input:checked + svg", class_names.base_class()),
        Method::Class => format!(
            ".{}.{} svg",
            class_names.base_class(),
            class_names.active_class()
        ),
    }
}

/// Base rules, rest-state dash rules and the active-state block
pub fn generate_css(
    paths: &[PathData],
    method: Method,
    class_names: &ClassNameConfig,
    size: &SizeConfig,
) -> String {
    let base = class_names.base_class();
    let width = format_number(size.width());
    let stroke_width = format_number(size.stroke_width());

    let rest_rules = paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                concat!(
                    "/* Line {n} */\n",
                    ".line--{n} {{\n",
                    "  stroke-dasharray: {};\n",
                    "  stroke-dashoffset: {};\n",
                    "}}"
                ),
                p.rest_dash_array(),
                p.rest_dash_offset(),
                n = i + 1,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut css = format!(
        r#".{base} {{
  cursor: pointer;
  display: block;
  width: {width}px;
  height: {width}px;
  background: transparent;
  border: none;
  padding: 0;
}}

.{base} svg {{
  width: 100%;
  height: 100%;
}}

.{base} path {{
  fill: none;
  stroke: {STROKE_COLOR};
  stroke-width: {stroke_width};
  stroke-linecap: round;
  stroke-linejoin: round;
  transition: {TRANSITION};
}}

{rest_rules}"#
    );

    if method == Method::Checkbox {
        css.push_str(&format!("\n.{base} input {{\n  display: none;\n}}\n"));
    }

    let active_rules = paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "  .line--{} {{\n    stroke-dasharray: {};\n    stroke-dashoffset: {};\n  }}",
                i + 1,
                p.active_dash_array(),
                p.active_dash_offset(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    css.push_str(&format!(
        "\n{} {{\n{}\n}}",
        active_selector(method, class_names),
        active_rules
    ));

    css
}

/// Click handler toggling the active class; empty for the checkbox method
pub fn generate_js(method: Method, class_names: &ClassNameConfig) -> String {
    match method {
        Method::Class => format!(
            r#"const menu = document.querySelector('.{}');

menu.addEventListener('click', () => {{
  menu.classList.toggle('{}');
}});"#,
            class_names.base_class(),
            class_names.active_class()
        ),
        Method::Checkbox => String::new(),
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
