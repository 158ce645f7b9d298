//! Dashmorph code generator
//!
//! Turns a set of two-state lines into a self-contained HTML/CSS(/JS) snippet
//! that animates each stroke between its `menu` and `close` shapes.
//!
//! # Pipeline
//!
//! 1. [`Compiler`] joins each line's menu and close polylines with a cubic
//!    bridge and measures the pieces ([`PathData`])
//! 2. [`emit`] renders markup, stylesheet and (for [`Method::Class`]) script
//!
//! [`generate_code`] runs both steps with the default measurer.
//!
//! # Example
//!
//! ```rust
//! use dashmorph_codegen::generate_code;
//! use dashmorph_core::{ClassNameConfig, LineCollection, Method, SizeConfig};
//!
//! let lines = LineCollection::seeded();
//! let code = generate_code(
//!     lines.lines(),
//!     Method::Checkbox,
//!     &ClassNameConfig::default(),
//!     &SizeConfig::default(),
//! );
//!
//! assert!(code.html.contains(r#"<path class="line--1""#));
//! assert!(code.js.is_empty());
//! ```

pub mod compile;
pub mod emit;

pub use compile::{
    compile_line, Bridge, Compiler, PathData, TransitionPath, BRIDGE_TENSION, COLLAPSED_LENGTH,
    HIDDEN_DASH_ARRAY,
};
pub use emit::{
    active_selector, emit, generate_css, generate_html, generate_js, GeneratedCode, STROKE_COLOR,
    TRANSITION,
};

use dashmorph_core::{ClassNameConfig, Line, Method, SizeConfig};

/// Compile and emit in one step
pub fn generate_code(
    lines: &[Line],
    method: Method,
    class_names: &ClassNameConfig,
    size: &SizeConfig,
) -> GeneratedCode {
    let paths = Compiler::<dashmorph_path::LyonMeasure>::default().compile_lines(lines);
    tracing::debug!(lines = paths.len(), %method, "Generating code");
    emit(&paths, method, class_names, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashmorph_core::{LineCollection, PathPoint};

    #[test]
    fn test_seeded_checkbox_output() {
        let lines = LineCollection::seeded();
        let code = generate_code(
            lines.lines(),
            Method::Checkbox,
            &ClassNameConfig::default(),
            &SizeConfig::default(),
        );

        assert!(code.html.contains(r#"d="M 20 30 L 80 30 C 50 30 50 20 20 20 L 80 80""#));
        assert!(code.css.contains("stroke-dasharray: 60.00 "));
        assert!(code.css.contains("stroke-dasharray: 84.85 "));
        assert!(code.css.contains(".hamburger-menu input:checked + svg {"));
        assert!(code.js.is_empty());
        assert!(!code.full_code.contains("<script>"));
    }

    #[test]
    fn test_method_switch_keeps_geometry() {
        let lines = LineCollection::seeded();
        let names = ClassNameConfig::default();
        let size = SizeConfig::default();
        let checkbox = generate_code(lines.lines(), Method::Checkbox, &names, &size);
        let class = generate_code(lines.lines(), Method::Class, &names, &size);

        // Every path and dash rule is shared between the two methods
        let rules = |css: &str| -> Vec<String> {
            css.lines()
                .filter(|l| l.contains("stroke-dash") || l.contains("/* Line"))
                .map(str::to_string)
                .collect()
        };
        assert_eq!(rules(&checkbox.css), rules(&class.css));

        let paths = |html: &str| -> Vec<String> {
            html.lines()
                .filter(|l| l.trim_start().starts_with("<path"))
                .map(str::to_string)
                .collect()
        };
        assert_eq!(paths(&checkbox.html), paths(&class.html));

        assert!(class.js.contains("menu.classList.toggle('is-active');"));
        assert!(class.full_code.ends_with("</script>"));
    }

    #[test]
    fn test_undrawable_line_emits_empty_path() {
        let mut line = Line::default_line();
        line.menu.truncate(1);
        let code = generate_code(
            &[line],
            Method::Checkbox,
            &ClassNameConfig::default(),
            &SizeConfig::default(),
        );
        assert!(code.html.contains(r#"<path class="line--1" d="" />"#));
    }

    #[test]
    fn test_generated_code_serializes() {
        let line = Line::new(
            vec![PathPoint::anchor(20.0, 50.0), PathPoint::anchor(80.0, 50.0)],
            vec![PathPoint::anchor(20.0, 20.0), PathPoint::anchor(80.0, 80.0)],
        );
        let code = generate_code(
            &[line],
            Method::Class,
            &ClassNameConfig::default(),
            &SizeConfig::default(),
        );
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["html"], code.html);
        assert_eq!(json["full_code"], code.full_code);
    }
}
