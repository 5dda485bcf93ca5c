//! Services behind the upload workflow
//!
//! Each service covers one step of an invocation: detecting the sketch's baud
//! rate, listing and selecting a board, compiling/uploading, and watching the
//! serial log afterwards.

pub mod baud_detector;
pub mod board_lister;
pub mod board_selector;
pub mod build_service;
pub mod monitor_service;

pub use baud_detector::detect_baud_rate;
pub use board_lister::list_boards;
pub use board_selector::select_board;
pub use build_service::{compile_and_upload, prepare_core};
pub use monitor_service::{stream_logs, watch_logs};
