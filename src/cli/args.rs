// args.rs - Command line arguments classification

use std::ffi::OsString;

use crate::cli::flags::{scan_flags, Flags};
use crate::error::{DropError, Result};

/// What a single run has been asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the version line and usage block
    Help,
    /// Print the version line only
    Version,
    /// Send a drop message for every listed file, in order
    Drop(Vec<OsString>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub invocation: Invocation,
}

impl Args {
    /// Classify the arguments following the program name.
    ///
    /// Help wins over version; with neither flag every argument, dashes
    /// included, is taken as a file name.
    pub fn parse_from<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.is_empty() {
            return Err(DropError::NoFileNames);
        }

        let flags = scan_flags(&args);
        let invocation = if flags.contains(Flags::HELP) {
            Invocation::Help
        } else if flags.contains(Flags::VERSION) {
            Invocation::Version
        } else {
            Invocation::Drop(args)
        };

        Ok(Self { invocation })
    }

    /// Parse the current process arguments
    pub fn from_env() -> Result<Self> {
        Self::parse_from(std::env::args_os().skip(1))
    }
}
