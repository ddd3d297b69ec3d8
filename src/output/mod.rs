//! Console and JSON output
//!
//! - `config` - Output configuration types
//! - `tree` - Rendered tree lines, plain or colored
//! - `list` - The numbered folder checklist
//! - `json` - JSON output of scan results

mod config;
mod json;
mod list;
mod tree;

pub use config::OutputConfig;
pub use json::print_json;
pub use list::{NO_SUBFOLDERS, format_folder_list};
pub use tree::TreeFormatter;
