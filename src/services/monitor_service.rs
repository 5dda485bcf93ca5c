//! Stream a board's serial output to the terminal

use log::info;
use std::convert::Infallible;
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use crate::errors::{ArdiError, Result};

/// Per-read timeout handed to the serial driver. Expiry only means no data
/// arrived yet, so the watch loop itself never times out.
const READ_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Open `device` at `baud` and copy everything it sends to stdout.
///
/// Only returns when the port cannot be opened or a read fails.
pub fn watch_logs(device: &str, baud: u32, chunk_size: usize) -> Result<Infallible> {
    let mut port = serialport::new(device, baud)
        .timeout(READ_POLL_INTERVAL)
        .open()
        .map_err(|e| ArdiError::Serial(format!("Failed to open {}: {}", device, e)))?;

    info!("Watching {} at {} baud", device, baud);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stream_logs(&mut port, &mut out, chunk_size)
}

/// Copy raw chunks from `reader` to `writer` until reading fails.
///
/// Timeouts and interrupted reads are retried; end-of-stream counts as a
/// failure because a serial device never legitimately reaches it.
pub fn stream_logs<R, W>(reader: &mut R, writer: &mut W, chunk_size: usize) -> Result<Infallible>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; chunk_size.max(1)];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => {
                return Err(ArdiError::Serial(
                    "Device closed the serial stream".to_string(),
                ));
            }
            Ok(n) => n,
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {
                continue;
            }
            Err(e) => {
                return Err(ArdiError::Serial(format!(
                    "Failed to read from serial port: {}",
                    e
                )));
            }
        };

        writer.write_all(&buf[..n])?;
        writer.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    /// Replays a script of read results
    struct ScriptedReader {
        script: VecDeque<io::Result<Vec<u8>>>,
    }

    impl ScriptedReader {
        fn new(script: Vec<io::Result<Vec<u8>>>) -> Self {
            Self {
                script: script.into(),
            }
        }
    }

    impl Read for ScriptedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.script.pop_front() {
                Some(Ok(bytes)) => {
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    Ok(n)
                }
                Some(Err(e)) => Err(e),
                None => Ok(0),
            }
        }
    }

    #[test]
    fn test_streams_raw_bytes_until_read_error() {
        let mut reader = ScriptedReader::new(vec![
            Ok(b"hello ".to_vec()),
            Err(io::Error::new(ErrorKind::TimedOut, "no data")),
            Ok(vec![0xff, b'\n']),
            Err(io::Error::new(ErrorKind::BrokenPipe, "unplugged")),
            Ok(b"never seen".to_vec()),
        ]);
        let mut out: Vec<u8> = Vec::new();

        let err = stream_logs(&mut reader, &mut out, 128).unwrap_err();

        assert_eq!(out, b"hello \xff\n");
        assert!(err.to_string().contains("unplugged"));
    }

    #[test]
    fn test_end_of_stream_is_fatal() {
        let mut reader = io::Cursor::new(b"boot\n".to_vec());
        let mut out: Vec<u8> = Vec::new();

        let err = stream_logs(&mut reader, &mut out, 2).unwrap_err();

        assert_eq!(out, b"boot\n");
        assert!(matches!(err, ArdiError::Serial(_)));
    }

    #[test]
    fn test_open_missing_device_fails() {
        let err = watch_logs("/dev/ardi-nonexistent-port", 9600, 128).unwrap_err();
        assert!(err.to_string().contains("/dev/ardi-nonexistent-port"));
    }
}
