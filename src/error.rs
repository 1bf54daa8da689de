// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use thiserror::Error;

/// All possible ways the feed generation can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The prerelease flag was not given
    #[error("Missing the argument saying whether to leave out prereleases")]
    MissingFlag,
    /// The prerelease flag is not one of the recognized tokens
    #[error(
        "Invalid truth value {0:?}: expected one of y, yes, t, true, on, 1, n, no, f, false, off, 0"
    )]
    InvalidFlag(Box<str>),
    /// The input is not valid JSON
    #[error("Error parsing the input: {0}")]
    Parse(#[source] serde_json::Error),
    /// The input is valid JSON, but not a list
    #[error("Expected a JSON array of releases, found {0}")]
    NotAnArray(&'static str),
    /// A release is missing some field or has it of a wrong type
    #[error("Invalid release at index {index}: {source}")]
    Schema {
        /// Position of the release in the input list.
        index: usize,
        /// Source of the error.
        source: serde_json::Error,
    },
    /// The publish date of a release is not in the `YYYY-MM-DDTHH:MM:SSZ` format
    #[error("Release {tag} has an invalid publish date {value:?}: {source}")]
    Date {
        /// Tag name of the release.
        tag: Box<str>,
        /// The date as found in the input.
        value: Box<str>,
        /// Source of the error.
        source: crate::types::DateError,
    },
    /// Input/output error
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the command line arguments.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::MissingFlag | Error::InvalidFlag(_))
    }
}

/// A convenience wrapper around std Result
pub type Result<T = (), E = Error> = std::result::Result<T, E>;
