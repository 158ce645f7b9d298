//! Editor colors for lines

/// Default color per line slot, one for each of the ten allowed lines
pub const DEFAULT_LINE_COLORS: [&str; 10] = [
    "#ff6b6b", // red
    "#4ecdc4", // cyan
    "#ffe66d", // yellow
    "#7b5df0", // medium purple
    "#ff8f1f", // orange
    "#33b679", // emerald
    "#3a86ff", // blue
    "#ff5eaf", // magenta
    "#5ec2ff", // sky blue
    "#9c6d3b", // warm brown
];

/// Resolve the display color of the line at `index`
pub fn line_color(index: usize, custom: Option<&str>) -> &str {
    match custom {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_LINE_COLORS[index % DEFAULT_LINE_COLORS.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(line_color(0, None), "#ff6b6b");
        assert_eq!(line_color(10, None), "#ff6b6b");
        assert_eq!(line_color(3, None), "#7b5df0");
    }

    #[test]
    fn test_custom_color_wins() {
        assert_eq!(line_color(2, Some("#123456")), "#123456");
        assert_eq!(line_color(2, Some("")), "#ffe66d");
    }
}
