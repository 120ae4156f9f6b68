pub mod base_commands;
pub mod completions_cmd;
pub mod pool_cmd;
pub mod report_format;
