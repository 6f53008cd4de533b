// lib.rs - drop2vim library root

//! # drop2vim - Open files in the hosting Vim from a `:terminal` window
//!
//! Vim's terminal window listens for the operating system command
//! `ESC ] 51 ; <json> BEL` and runs the JSON-encoded call it carries. This
//! crate turns a list of file arguments into a `["drop", <path>, ...]`
//! message so that the files open in the surrounding Vim.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use drop2vim::prelude::*;
//!
//! let args = Args::parse_from(["notes.txt", "src/main.rs"])?;
//! let stdout = std::io::stdout();
//! drop2vim::run(args, &mut stdout.lock())?;
//! # Ok::<(), DropError>(())
//! ```

use std::io::Write;

use log::debug;

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_files, Args, Flags, Invocation};
    pub use crate::core::CommandList;
    pub use crate::error::{DropError, Result};
    pub use crate::output::write_message;
}

pub use cli::{Args, Invocation};
pub use error::{DropError, Result};

/// Program name shown in the version line and usage block
pub const APP_NAME: &str = "drop2vim";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Carry out one invocation, writing its stdout bytes to `out`.
///
/// For a drop run nothing reaches `out` unless every file validated and the
/// message encoded.
pub fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    match args.invocation {
        Invocation::Help => {
            out.write_all(cli::help_text().as_bytes()).map_err(DropError::Output)?;
        }
        Invocation::Version => {
            out.write_all(cli::version_line().as_bytes()).map_err(DropError::Output)?;
        }
        Invocation::Drop(files) => {
            let commands = cli::validate_files(&files)?;
            let json = commands.to_json()?;
            debug!("dropping {} file(s)", commands.len() / 2);
            output::write_message(out, &json)?;
        }
    }
    Ok(())
}
