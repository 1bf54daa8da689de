// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use crate::error::{Error, Result};

/// Every accepted spelling of a truth value, in lowercase.
static TOKENS: [(&str, bool); 12] = [
    ("y", true),
    ("yes", true),
    ("t", true),
    ("true", true),
    ("on", true),
    ("1", true),
    ("n", false),
    ("no", false),
    ("f", false),
    ("false", false),
    ("off", false),
    ("0", false),
];

/// Interpret a command line token as a boolean, ignoring ASCII case.
pub fn parse_flag(token: &str) -> Result<bool> {
    TOKENS
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(token))
        .map(|&(_, value)| value)
        .ok_or_else(|| Error::InvalidFlag(token.into()))
}
