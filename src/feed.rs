// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use crate::config::Config;
use crate::error::{Error, Result};
use crate::release::Release;
use crate::types::DateTime;

use beef::lean::Cow;
use serde::Serialize;

use std::io::Write;

/// The feed of releases, ready to be serialized.
#[derive(Debug, Serialize)]
pub struct Feed<'r> {
    /// Title of the feed
    pub title: Cow<'r, str>,
    /// The releases, in the order they were given
    pub items: Vec<Item<'r>>,
}

/// One release in the feed.
#[derive(Debug, PartialEq, Serialize)]
pub struct Item<'r> {
    /// Tag name of the release
    pub title: Cow<'r, str>,
    /// Also the tag name of the release; release notes are not included
    pub content_html: Cow<'r, str>,
    /// API URL of the release
    pub url: Cow<'r, str>,
    /// When the release was published
    pub date_published: DateTime,
}

impl<'r> Item<'r> {
    /// Project a release into a feed item.
    pub fn new(release: &Release<'r>) -> Result<Self> {
        let date_published =
            DateTime::parse_published(&release.published_at).map_err(|source| Error::Date {
                tag: release.tag_name.as_ref().into(),
                value: release.published_at.as_ref().into(),
                source,
            })?;
        Ok(Item {
            title: release.tag_name.clone(),
            content_html: release.tag_name.clone(),
            url: release.url.clone(),
            date_published,
        })
    }
}

impl<'r> Feed<'r> {
    /// Build the feed from the releases, keeping their order.
    /// Fails on the first release that can't be converted, so no partial feed is ever produced.
    pub fn from_releases(releases: &[Release<'r>], config: &Config<'r>) -> Result<Self> {
        let items = releases
            .iter()
            .filter(|release| {
                let skip = config.leave_out_prereleases && release.prerelease;
                if skip {
                    log::debug!("Leaving out prerelease {}", release.tag_name.as_ref());
                }
                !skip
            })
            .map(Item::new)
            .collect::<Result<Vec<_>>>()?;
        log::info!("{} of {} releases in the feed", items.len(), releases.len());
        Ok(Feed {
            title: config.title.clone(),
            items,
        })
    }

    /// Write the feed as compact JSON, followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result {
        serde_json::to_writer(&mut writer, self).map_err(std::io::Error::from)?;
        writeln!(writer)?;
        writer.flush().map_err(Into::into)
    }
}
