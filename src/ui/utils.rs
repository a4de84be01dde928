/// Tooltip number style: "–" for gaps, thousands separators from 1,000 up
/// (at most two decimals), two decimals from 1, three below.
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return "–".to_string();
    };
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let abs = value.abs();
    if abs >= 1000.0 {
        group_thousands(value)
    } else if abs >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// "1,234.5" style: grouped integer part, up to two decimals, no trailing zeros.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Cuts long cluster labels with an ellipsis, on a char boundary.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let cut: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_bands() {
        assert_eq!(format_number(None), "–");
        assert_eq!(format_number(Some(f64::NAN)), "–");
        assert_eq!(format_number(Some(4770.0)), "4,770");
        assert_eq!(format_number(Some(1234567.891)), "1,234,567.89");
        assert_eq!(format_number(Some(-16547.5)), "-16,547.5");
        assert_eq!(format_number(Some(101.456)), "101.46");
        assert_eq!(format_number(Some(4.1)), "4.10");
        assert_eq!(format_number(Some(0.51)), "0.510");
        assert_eq!(format_number(Some(-0.1)), "-0.100");
    }

    #[test]
    fn truncate_label_adds_ellipsis() {
        assert_eq!(truncate_label("SVB collapse", 28), "SVB collapse");
        assert_eq!(truncate_label("Russia–Ukraine war +1 more", 10), "Russia–Uk…");
    }
}
