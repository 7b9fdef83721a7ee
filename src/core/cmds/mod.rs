use std::io::Read;

use chrono::{Local, NaiveDate};

use crate::types::AppResult;

pub mod cleanup;
pub mod dashboard;
pub mod days;
pub mod init;
pub mod print;
pub mod record;
pub mod summary;

pub use cleanup::execute_cleanup;
pub use dashboard::execute_dashboard;
pub use days::execute_days;
pub use init::execute_init;
pub use print::execute_print;
pub use record::execute_record;
pub use summary::execute_summary;

/// Read a document from a path, or from stdin when the path is '-'.
pub fn read_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
