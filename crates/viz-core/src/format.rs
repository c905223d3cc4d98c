// File: crates/viz-core/src/format.rs
// Summary: The single numeric label formatter used by every chart family.

/// Render a numeric label. Missing or non-finite values render as
/// `na_label`; everything else is rounded to `precision` decimal places and
/// wrapped in `prefix`/`suffix`.
pub fn format_value(
    value: Option<f64>,
    na_label: &str,
    precision: usize,
    prefix: &str,
    suffix: &str,
) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{prefix}{v:.precision$}{suffix}"),
        _ => na_label.to_string(),
    }
}
