//! Value formatting for terminal output

/// Format a price in dollars, e.g. `$2.20`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a quantity without trailing zeros, followed by its unit
///
/// `2.0` litres is `2 L`, `0.5` kg is `0.5 kg`.
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    let rounded = (quantity * 100.0).round() / 100.0;
    let number = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    };
    format!("{} {}", number, unit)
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Text progress bar, e.g. `[#####.....] 50%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100);
    let filled = (usize::from(percent) * width + 50) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        percent
    )
}

/// Pad or cut `text` to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{}{}", text, " ".repeat(width - count))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2.2), "$2.20");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(3.999), "$4.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0, "L"), "2 L");
        assert_eq!(format_quantity(0.5, "kg"), "0.5 kg");
        assert_eq!(format_quantity(1.25, "kg"), "1.25 kg");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn test_format_duration_mins() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "product", "products"), "1 product");
        assert_eq!(format_count(0, "product", "products"), "0 products");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(50, 10), "[#####.....] 50%");
        assert_eq!(progress_bar(0, 4), "[....] 0%");
        assert_eq!(progress_bar(200, 4), "[####] 100%");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Milk", 6), "Milk  ");
        assert_eq!(fit("Nescafé Blend", 8), "Nescafé…");
        assert_eq!(fit("abc", 0), "");
    }
}
