use crate::bounding_box::BoundingBox;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("failed to read label file: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a label file and parse it into boxes, preserving line order.
pub fn read_labels(path: &Path) -> Result<Vec<BoundingBox>, LabelError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_labels(&content))
}

/// Parse label text, one `class_id x y width height` row per line.
///
/// Blank lines and lines that do not split into exactly five fields are
/// skipped; a field that is not a valid integer becomes 0 so one corrupt
/// value cannot drop the rest of the file.
pub fn parse_labels(content: &str) -> Vec<BoundingBox> {
    let mut boxes = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 5 {
            continue;
        }

        boxes.push(BoundingBox {
            class_id: parse_field(fields[0]),
            x: parse_field(fields[1]),
            y: parse_field(fields[2]),
            width: parse_field(fields[3]),
            height: parse_field(fields[4]),
        });
    }

    boxes
}

fn parse_field(raw: &str) -> i64 {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!("label field {:?} is not an integer, using 0", raw);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_a_valid_line() {
        let boxes = parse_labels("0 150 100 200 350\n");

        assert_eq!(
            boxes,
            vec![BoundingBox {
                class_id: 0,
                x: 150,
                y: 100,
                width: 200,
                height: 350,
            }]
        );
    }

    #[test]
    fn skips_lines_with_wrong_field_count() {
        let content = "0 150 100 200\n1 10 20 30 40\n2 1 2 3 4 5\n";
        let boxes = parse_labels(content);

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].class_id, 1);
    }

    #[test]
    fn skips_blank_lines() {
        let content = "\n  \n0 1 2 3 4\n\n";
        let boxes = parse_labels(content);

        assert_eq!(boxes.len(), 1);
    }

    #[test]
    fn defaults_unparsable_fields_to_zero() {
        let boxes = parse_labels("0 150 abc 200 350");

        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].y, 0);
        assert_eq!(boxes[0].x, 150);
    }

    #[test]
    fn parsing_is_idempotent() {
        let content = "0 150 100 200 350\n1 400 300 100 120\nbad line\n";

        assert_eq!(parse_labels(content), parse_labels(content));
    }

    #[test]
    fn read_labels_propagates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_labels(&dir.path().join("missing.txt"));

        assert!(result.is_err());
    }

    #[test]
    fn read_labels_preserves_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img001.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "0 150 100 200 350").unwrap();
        writeln!(file, "1 400 300 100 120").unwrap();

        let boxes = read_labels(&path).unwrap();

        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].class_id, 0);
        assert_eq!(boxes[1].class_id, 1);
    }
}
