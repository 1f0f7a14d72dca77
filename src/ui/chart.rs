//! Text line chart for the points growth of a player

/// Render `values` as a column chart, one column per game, highest value on top
pub fn render(values: &[i64]) -> String {
    let Some(&max) = values.iter().max() else {
        return String::new();
    };
    let min = values.iter().copied().min().unwrap_or(max).min(0);
    let label_width = max.to_string().len().max(min.to_string().len());

    let mut out = String::new();
    for level in (min..=max).rev() {
        if level == 0 && min == 0 && max > 0 {
            continue;
        }
        out.push_str(&format!("{:>width$} |", level, width = label_width));
        for &value in values {
            out.push_str(if value == level { " *" } else { "  " });
        }
        out.push('\n');
    }

    out.push_str(&format!("{:>width$} +", "", width = label_width));
    out.push_str(&"--".repeat(values.len()));
    out.push('\n');
    out
}
