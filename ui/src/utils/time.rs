use jiff::Timestamp;

/// Format a publication timestamp for display, e.g. "March 4, 2026".
pub fn format_published(timestamp: Timestamp) -> String {
    timestamp.strftime("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_zero_padding() {
        let timestamp: Timestamp = "2026-03-04T12:00:00Z".parse().unwrap();
        assert_eq!(format_published(timestamp), "March 4, 2026");
    }
}
