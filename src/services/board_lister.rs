//! List connected boards through the toolchain

use log::info;

use crate::errors::Result;
use crate::models::BoardListing;
use crate::toolchain::Toolchain;

/// Run `board list` and filter its output down to uploadable boards
pub fn list_boards(toolchain: &dyn Toolchain) -> Result<BoardListing> {
    let raw = toolchain.board_list()?;
    let listing = BoardListing::parse(&raw);
    info!("Detected {} board(s)", listing.len());
    Ok(listing)
}
