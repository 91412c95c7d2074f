//! Core domain types.
//!
//! These are the records handed to the front-end. Every field is optional:
//! `None` is the absent state a record has when its source mapping lacked
//! the key.
//!
//! # Structure
//!
//! - `file_info` - A selected PDF and its page count (`FileInfo`)
//! - `process_result` - Outcome of processing a file or page (`ProcessResult`)

mod file_info;
mod process_result;

pub use file_info::FileInfo;
pub use process_result::ProcessResult;
