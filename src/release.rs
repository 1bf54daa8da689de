// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use crate::error::{Error, Result};

use beef::lean::Cow;
use serde::Deserialize;
use serde_json::Value;

/// One entry of the list of releases of a repository, as returned by the hosting API.
/// Only the fields needed for the feed are read, the rest is ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Release<'r> {
    /// API URL of the release
    #[serde(borrow)]
    pub url: Cow<'r, str>,
    /// Name of the tag the release was made from
    #[serde(borrow)]
    pub tag_name: Cow<'r, str>,
    /// Whether the release is marked as not ready for production
    pub prerelease: bool,
    /// Time of publishing, in the form `YYYY-MM-DDTHH:MM:SSZ`
    #[serde(borrow)]
    pub published_at: Cow<'r, str>,
}

/// Parse the raw input into a JSON document.
pub fn parse_document(input: &[u8]) -> Result<Value> {
    serde_json::from_slice(input).map_err(Error::Parse)
}

impl<'r> Release<'r> {
    /// Read the list of releases from a parsed document, borrowing the strings from it.
    pub fn list(document: &'r Value) -> Result<Vec<Release<'r>>> {
        let entries = match document {
            Value::Array(entries) => entries,
            other => return Err(Error::NotAnArray(kind(other))),
        };
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Release::deserialize(entry).map_err(|source| Error::Schema { index, source })
            })
            .collect()
    }
}

/// Name of the kind of a JSON value, for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
