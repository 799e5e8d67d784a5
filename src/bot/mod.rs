//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `callback_data`: encoding/decoding of callback button payloads
//! - `callback_handler`: handles inline keyboard callback queries
//! - `command_handlers`: handles the /start and /latest commands
//! - `inline_handler`: handles inline queries
//! - `message_handler`: routes incoming text messages to command handlers
//! - `ui_builder`: creates keyboards and list/detail messages

pub mod callback_data;
pub mod callback_handler;
pub mod command_handlers;
pub mod inline_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use inline_handler::inline_query_handler;
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use ui_builder::{build_job_list_view, create_job_detail_keyboard, create_job_list_keyboard};
