//! Small text formatting helpers shared by the renderers

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        return "-".to_string();
    }
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Put `left` and `right` at the two ends of a field of `width` characters
///
/// At least one space separates them when they do not fit.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(74.78), "75%");
        assert_eq!(format_percentage(f64::NAN), "-");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3).chars().count(), 3);
    }

    #[test]
    fn test_spread() {
        assert_eq!(spread("$1", "$9", 8), "$1    $9");
        assert_eq!(spread("-€180.00", "€90.00", 4), "-€180.00 €90.00");
    }
}
