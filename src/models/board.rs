//! Board-related data models

use log::debug;
use std::fmt;

/// Marker arduino-cli prints in the column header row of `board list`
const HEADER_MARKER: &str = "Board Name";

/// Lines containing any of these never describe an uploadable board
const NOISE_MARKERS: &[&str] = &["Unknown", HEADER_MARKER, "No boards found"];

/// The board a sketch is compiled for and uploaded to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBoard {
    /// Serial device path, e.g. `/dev/ttyACM0` or `COM3`
    pub device: String,
    /// Fully qualified board name, e.g. `arduino:avr:uno`
    pub fqbn: String,
}

impl TargetBoard {
    /// Build a target from one row of `board list` output.
    ///
    /// The port is the first column and the FQBN the last one; everything in
    /// between (protocol, type, board name) is ignored.
    pub fn from_listing_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let device = tokens.next()?;
        let fqbn = tokens.next_back().unwrap_or(device);
        Some(Self {
            device: device.to_string(),
            fqbn: fqbn.to_string(),
        })
    }
}

impl fmt::Display for TargetBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.device, self.fqbn)
    }
}

/// Filtered output of `arduino-cli board list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardListing {
    /// Column header row, kept for display above the selection menu
    pub header: Option<String>,
    /// Lines describing connected, recognised boards, in listing order
    pub boards: Vec<String>,
}

impl BoardListing {
    /// Filter raw `board list` text down to genuine device lines
    pub fn parse(raw: &str) -> Self {
        let mut listing = BoardListing::default();

        for line in raw.lines() {
            debug!("Inspecting board: {:?}", line);

            if listing.header.is_none() && line.contains(HEADER_MARKER) {
                listing.header = Some(line.trim_end().to_string());
            }

            if line.trim().is_empty() || NOISE_MARKERS.iter().any(|m| line.contains(m)) {
                continue;
            }

            listing.boards.push(line.trim_end().to_string());
        }

        listing
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_LISTING: &str = "\
Port         Protocol Type              Board Name  FQBN
/dev/ttyS0   serial   Serial Port       Unknown
/dev/ttyACM0 serial   Serial Port (USB) Arduino Uno arduino:avr:uno
/dev/ttyS1   serial   Serial Port       Unknown

/dev/ttyACM1 serial   Serial Port (USB) Arduino Mega arduino:avr:mega
";

    #[test]
    fn test_parse_filters_noise_and_keeps_order() {
        let listing = BoardListing::parse(RAW_LISTING);
        assert_eq!(listing.len(), 2);
        assert!(listing.boards[0].starts_with("/dev/ttyACM0"));
        assert!(listing.boards[1].starts_with("/dev/ttyACM1"));
        assert!(listing.header.as_deref().unwrap().contains("Board Name"));

        let targets: Vec<TargetBoard> = listing
            .boards
            .iter()
            .map(|line| TargetBoard::from_listing_line(line).unwrap())
            .collect();
        assert_eq!(targets[0].device, "/dev/ttyACM0");
        assert_eq!(targets[0].fqbn, "arduino:avr:uno");
        assert_eq!(targets[1].device, "/dev/ttyACM1");
        assert_eq!(targets[1].fqbn, "arduino:avr:mega");
    }

    #[test]
    fn test_parse_no_boards_found() {
        let listing = BoardListing::parse("No boards found.\n");
        assert!(listing.is_empty());
        assert_eq!(listing.header, None);
    }

    #[test]
    fn test_parse_crlf_and_whitespace_lines() {
        let listing = BoardListing::parse(
            "   \r\nCOM3 serial Serial Port (USB) Arduino Uno arduino:avr:uno\r\n",
        );
        assert_eq!(
            listing.boards,
            vec!["COM3 serial Serial Port (USB) Arduino Uno arduino:avr:uno".to_string()]
        );
    }

    #[test]
    fn test_target_from_listing_line_uses_first_and_last_tokens() {
        let target = TargetBoard::from_listing_line(
            "/dev/ttyACM0 serial   Serial Port (USB) Arduino Uno arduino:avr:uno",
        )
        .unwrap();
        assert_eq!(target.device, "/dev/ttyACM0");
        assert_eq!(target.fqbn, "arduino:avr:uno");
        assert_eq!(target.to_string(), "/dev/ttyACM0 (arduino:avr:uno)");
    }

    #[test]
    fn test_target_from_blank_line() {
        assert_eq!(TargetBoard::from_listing_line("   "), None);
    }
}
