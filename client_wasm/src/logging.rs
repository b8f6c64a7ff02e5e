//! Console log level selection

use log::{Level, ParseLevelError};
use std::str::FromStr;

/// Level requested by the host page, info when none was given
pub fn parse_log_level(level: Option<&str>) -> Result<Level, ParseLevelError> {
    match level {
        Some(name) => Level::from_str(name.trim()),
        None => Ok(Level::Info),
    }
}
