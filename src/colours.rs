//! Blackbody temperature to RGB table conversion
//!
//! The input is a blackbody colour table with two lines per temperature
//! (2° and 10° colour matching functions), e.g.
//!
//! ```text
//!   1000 K   2deg  0.6528 0.3444  1.000 0.1511 0.0000  255   51    0  #ff3300
//!   1000 K  10deg  0.6482 0.3466  1.000 0.1575 0.0000  255   56    0  #ff3800
//! ```
//!
//! Only the first line of each pair is used. Its first token is the
//! temperature and the three tokens before the hex code are the 8-bit RGB
//! components.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::{Result, StarprepError};

/// One temperature and its RGB components, kept as the table's tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourEntry {
    pub temperature: String,
    pub r: String,
    pub g: String,
    pub b: String,
}

impl fmt::Display for ColourEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, Color32::from_rgb({}, {}, {}))",
            self.temperature, self.r, self.g, self.b
        )
    }
}

/// Parse one table line; `line_number` is 1-based and only used in errors
pub fn parse_line(line: &str, line_number: usize) -> Result<ColourEntry> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 5 {
        return Err(StarprepError::ColourTableError {
            line: line_number,
            message: format!("expected at least 5 tokens, found {}", parts.len()),
        });
    }

    let n = parts.len();
    Ok(ColourEntry {
        temperature: parts[0].to_string(),
        r: parts[n - 4].to_string(),
        g: parts[n - 3].to_string(),
        b: parts[n - 2].to_string(),
    })
}

/// Convert a whole table into `Color32` literal lines, one per line pair
pub fn convert(text: &str) -> Result<Vec<String>> {
    text.lines()
        .enumerate()
        .step_by(2)
        .map(|(i, line)| parse_line(line, i + 1).map(|entry| entry.to_string()))
        .collect()
}

/// Convert the table at `input` and write the literal lines to `output`
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Vec<String>> {
    let text = fs::read_to_string(&input)?;
    let lines = convert(&text)?;

    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(&output, out)?;

    log::info!(
        "Converted {} colour entries from {} into {}",
        lines.len(),
        input.as_ref().display(),
        output.as_ref().display()
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TABLE: &str = "\
  1000 K   2deg  0.6528 0.3444  1.000 0.1511 0.0000  255   51    0  #ff3300
  1000 K  10deg  0.6482 0.3466  1.000 0.1575 0.0000  255   56    0  #ff3800
  1100 K   2deg  0.6482 0.3475  1.000 0.1875 0.0000  255   69    0  #ff4500
  1100 K  10deg  0.6436 0.3496  1.000 0.1935 0.0000  255   71    0  #ff4700
 40000 K   2deg  0.2529 0.2484  0.6263 0.6807 1.000  160  191  255  #a0bfff
";

    #[test]
    fn test_parse_line_tokens() {
        let entry = parse_line(TABLE.lines().next().unwrap(), 1).unwrap();
        assert_eq!(
            entry,
            ColourEntry {
                temperature: "1000".to_string(),
                r: "255".to_string(),
                g: "51".to_string(),
                b: "0".to_string(),
            }
        );
        assert_eq!(entry.to_string(), "(1000, Color32::from_rgb(255, 51, 0))");
    }

    #[test]
    fn test_convert_takes_every_other_line() {
        let lines = convert(TABLE).unwrap();
        assert_eq!(
            lines,
            vec![
                "(1000, Color32::from_rgb(255, 51, 0))",
                "(1100, Color32::from_rgb(255, 69, 0))",
                "(40000, Color32::from_rgb(160, 191, 255))",
            ]
        );
    }

    #[test]
    fn test_output_count_is_half_input_rounded_up() {
        for n in 0..7 {
            let text: String = (0..n)
                .map(|i| format!("{} K 2deg 1 2 3 #000000\n", 1000 + i * 100))
                .collect();
            assert_eq!(convert(&text).unwrap().len(), (n + 1) / 2);
        }
    }

    #[test]
    fn test_short_line_reports_line_number() {
        let text = "1000 K 2deg 1 2 3 #000\nignored\n1100 K\n";
        match convert(text) {
            Err(StarprepError::ColourTableError { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected colour table error, got {:?}", other),
        }
    }

    #[test]
    fn test_second_line_of_pair_not_validated() {
        let text = "1000 K 2deg 1 2 3 #000\n\n";
        assert_eq!(convert(text).unwrap().len(), 1);
    }

    #[test]
    fn test_convert_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("raw.txt");
        let output = dir.path().join("processed.txt");
        std::fs::write(&input, TABLE).unwrap();

        let lines = convert_file(&input, &output).unwrap();
        assert_eq!(lines.len(), 3);
        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 3);
        assert!(written.ends_with("(40000, Color32::from_rgb(160, 191, 255))\n"));
    }
}
