//! Detect the baud rate a sketch configures with `Serial.begin(...)`

use log::{debug, info};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

static SERIAL_BEGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Serial\.begin\((\d+)\);").expect("Serial.begin pattern is valid")
});

/// Scan a sketch source file for its baud rate.
///
/// Returns 0 when the file cannot be read or has no usable
/// `Serial.begin(<n>);` call, meaning the caller keeps its default.
pub fn detect_baud_rate(sketch_file: &Path) -> u32 {
    match File::open(sketch_file) {
        Ok(file) => detect_in_reader(BufReader::new(file)),
        Err(e) => {
            info!(
                "Failed to read sketch: {} (sketch={})",
                e,
                sketch_file.display()
            );
            0
        }
    }
}

/// Scan line by line; only the first matching line is considered
pub fn detect_in_reader<R: BufRead>(reader: R) -> u32 {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                info!("Failed to read sketch: {}", e);
                return 0;
            }
        };

        if let Some(captures) = SERIAL_BEGIN.captures(&line) {
            let digits = &captures[1];
            return match digits.parse::<u32>() {
                Ok(baud) => {
                    debug!("Found Serial.begin({}) in sketch", baud);
                    baud
                }
                Err(e) => {
                    info!("Failed to parse baud rate from sketch: {} ({})", e, digits);
                    0
                }
            };
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_detects_serial_begin() {
        let sketch = "void setup() {\n  Serial.begin(115200);\n}\n";
        assert_eq!(detect_in_reader(Cursor::new(sketch)), 115200);
    }

    #[test]
    fn test_no_serial_begin() {
        let sketch = "void setup() {\n  pinMode(13, OUTPUT);\n}\n";
        assert_eq!(detect_in_reader(Cursor::new(sketch)), 0);
    }

    #[test]
    fn test_first_match_wins() {
        let sketch = "Serial.begin(57600);\nSerial.begin(9600);\n";
        assert_eq!(detect_in_reader(Cursor::new(sketch)), 57600);
    }

    #[test]
    fn test_requires_exact_call_form() {
        assert_eq!(detect_in_reader(Cursor::new("Serial.begin(BAUD);\n")), 0);
        assert_eq!(detect_in_reader(Cursor::new("Serial.begin( 9600 );\n")), 0);
        assert_eq!(detect_in_reader(Cursor::new("Serial1.begin(9600);\n")), 0);
    }

    #[test]
    fn test_overflow_yields_zero() {
        let sketch = "Serial.begin(99999999999999);\nSerial.begin(9600);\n";
        assert_eq!(detect_in_reader(Cursor::new(sketch)), 0);
    }

    #[test]
    fn test_missing_file_yields_zero() {
        assert_eq!(detect_baud_rate(Path::new("/nonexistent/blink/blink.ino")), 0);
    }
}
