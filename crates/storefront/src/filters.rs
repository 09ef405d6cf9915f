//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Caps a badge count at "9+".
///
/// A presentation rule only: the underlying item count is unbounded.
///
/// Usage in templates: `{{ count|badge_count }}`
#[askama::filter_fn]
pub fn badge_count(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = count.to_string();
    Ok(raw.parse::<u64>().map_or(raw, |n| {
        if n > 9 {
            "9+".to_string()
        } else {
            n.to_string()
        }
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use askama::Template;

    use crate::filters;

    #[derive(Template)]
    #[template(source = "{{ count|badge_count }}", ext = "txt")]
    struct Badge {
        count: u32,
    }

    #[test]
    fn test_badge_count_passes_small_counts_through() {
        assert_eq!(Badge { count: 0 }.render().unwrap(), "0");
        assert_eq!(Badge { count: 9 }.render().unwrap(), "9");
    }

    #[test]
    fn test_badge_count_caps_at_nine_plus() {
        assert_eq!(Badge { count: 10 }.render().unwrap(), "9+");
        assert_eq!(Badge { count: 250 }.render().unwrap(), "9+");
    }
}
