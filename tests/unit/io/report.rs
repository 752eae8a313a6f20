//! Tests for plain-text layout reports

#[cfg(test)]
mod tests {
    use std::path::Path;

    use squarify::analysis::quality::measure;
    use squarify::geometry::rectangle::Rectangle;
    use squarify::io::items::{Item, pair_tiles, parse_items};
    use squarify::io::report::{REPORT_HEADER, write_quality, write_report};

    // Tests the header and one CSV line per tile
    // Verified by omitting the label column
    #[test]
    fn test_write_report() {
        let items = [
            Item {
                weight: 1.0,
                intensity: 0.0,
                label: Some("first".to_string()),
            },
            Item {
                weight: 2.0,
                intensity: 0.0,
                label: None,
            },
        ];
        let rects = [
            Rectangle::new(0.0, 0.0, 1.0, 2.0),
            Rectangle::new(1.0, 0.0, 3.0, 2.0),
        ];
        let mut out = Vec::new();

        write_report(&mut out, &pair_tiles(&items, &rects)).expect("Failed to write report");
        let text = String::from_utf8(out).expect("Report is not UTF-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                REPORT_HEADER,
                "0,0.000,0.000,1.000,2.000,2.000,first",
                "1,1.000,0.000,3.000,2.000,4.000,",
            ]
        );
    }

    // Tests that labels with commas or quotes stay in the last column
    // Verified by writing the label unquoted
    #[test]
    fn test_write_report_quotes_labels() {
        let items = parse_items("5,1,alpha, beta\n3,0,say \"hi\"\n", Path::new("items.csv"))
            .expect("Failed to parse items");
        let rects = [
            Rectangle::new(0.0, 0.0, 10.0, 10.0),
            Rectangle::new(10.0, 0.0, 16.0, 10.0),
        ];
        let mut out = Vec::new();

        write_report(&mut out, &pair_tiles(&items, &rects)).expect("Failed to write report");
        let text = String::from_utf8(out).expect("Report is not UTF-8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                REPORT_HEADER,
                "0,0.000,0.000,10.000,10.000,100.000,\"alpha, beta\"",
                "1,10.000,0.000,16.000,10.000,60.000,\"say \"\"hi\"\"\"",
            ]
        );
        let columns = REPORT_HEADER.split(',').count();
        let first_line = lines.get(1).copied().unwrap_or_default();
        let unquoted = first_line.split('"').next().unwrap_or_default();
        assert_eq!(unquoted.split(',').count(), columns);
    }

    // Tests that the quality summary names every statistic
    // Verified by dropping the worst ratio line
    #[test]
    fn test_write_quality() {
        let quality = measure(&[Rectangle::new(0.0, 0.0, 4.0, 2.0)]);
        let mut out = Vec::new();

        write_quality(&mut out, &quality).expect("Failed to write quality");
        let text = String::from_utf8(out).expect("Summary is not UTF-8");

        assert!(text.contains("rectangles: 1"));
        assert!(text.contains("total area: 8.000"));
        assert!(text.contains("worst aspect ratio: 2.000"));
        assert!(text.contains("degenerate: 0"));
    }
}
