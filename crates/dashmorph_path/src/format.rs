//! Number formatting for generated path data and stylesheets

/// Format a number the way a browser prints it in a template string.
///
/// Shortest representation that round-trips, no trailing `.0` on integers,
/// negative zero printed as `0`, exponent form outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    // Rust prints `1e21` / `1e-7`; browsers print `1e+21` / `1e-7`
    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// Fixed two-decimal formatting used for dash values.
///
/// Rounds like a browser's `toFixed(2)`: exact halves go away from zero and
/// negative zero prints as `0.00`.
pub fn format_fixed2(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }

    // Only odd multiples of 1/8 sit exactly halfway between two hundredths
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    if magnitude < 1e15 && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let hundredths = (magnitude * 100.0).ceil();
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.2}", sign, hundredths / 100.0);
    }

    format!("{:.2}", value)
}
