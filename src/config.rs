// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use beef::lean::Cow;

/// Settings of the generated feed.
#[derive(Clone, Debug)]
pub struct Config<'c> {
    /// Title of the feed
    pub title: Cow<'c, str>,
    /// Skip the releases marked as prereleases?
    pub leave_out_prereleases: bool,
}

impl<'c> Config<'c> {
    /// A config with the default title, filtering prereleases as requested.
    pub fn new(leave_out_prereleases: bool) -> Self {
        Config {
            leave_out_prereleases,
            ..Default::default()
        }
    }
}

impl Default for Config<'_> {
    #[inline]
    fn default() -> Self {
        Config {
            title: default_title(),
            leave_out_prereleases: false,
        }
    }
}

#[inline]
const fn default_title() -> Cow<'static, str> {
    Cow::const_str("Releases")
}
