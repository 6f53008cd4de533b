// usage.rs - Version line and help text

use crate::{APP_NAME, VERSION};

/// `"<app> <version>\n"`
pub fn version_line() -> String {
    format!("{} {}\n", APP_NAME, VERSION)
}

/// Version line followed by the usage block
pub fn help_text() -> String {
    format!(
        "{}Usage: {} <file_names>...

  -v, --version  print the version number
  -h, --help     show this message
",
        version_line(),
        APP_NAME
    )
}
