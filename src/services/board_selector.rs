//! Resolve a board listing to a single upload target

use log::{debug, info};
use std::io::{BufRead, Write};

use crate::errors::{ArdiError, Result};
use crate::models::{BoardListing, TargetBoard};

/// Pick the target board.
///
/// A single board is chosen without prompting. With several, a numbered menu
/// is written to `output` and one index is read from `input`; there is no
/// second chance on bad input.
pub fn select_board<R, W>(
    listing: &BoardListing,
    input: &mut R,
    output: &mut W,
) -> Result<TargetBoard>
where
    R: BufRead,
    W: Write,
{
    let index = match listing.len() {
        0 => return Err(ArdiError::NoBoards),
        1 => {
            debug!("Single board detected, selecting it");
            0
        }
        _ => prompt_for_index(listing, input, output)?,
    };

    let line = &listing.boards[index];
    let target = TargetBoard::from_listing_line(line)
        .ok_or_else(|| ArdiError::InvalidSelection(line.clone()))?;
    info!("Selected board {}", target);
    Ok(target)
}

/// Write the numbered menu for a listing
pub fn render_menu<W: Write>(listing: &BoardListing, output: &mut W) -> Result<()> {
    writeln!(output)?;
    if let Some(header) = &listing.header {
        writeln!(output, "   {}", header)?;
    }
    for (i, line) in listing.boards.iter().enumerate() {
        writeln!(output, "{}: {}", i, line)?;
    }
    Ok(())
}

fn prompt_for_index<R, W>(listing: &BoardListing, input: &mut R, output: &mut W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    render_menu(listing, output)?;
    write!(output, "\nEnter number of board to upload to: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    answer
        .parse::<usize>()
        .ok()
        .filter(|&i| i < listing.len())
        .ok_or_else(|| ArdiError::InvalidSelection(answer.to_string()))
}
