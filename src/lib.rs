// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>

//! Turn the list of releases of a repository,
//! as returned by the hosting API,
//! into a JSON feed.
#![warn(missing_docs)]
mod config;
mod error;
mod feed;
mod flag;
mod release;
mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use feed::{Feed, Item};
pub use flag::parse_flag;
pub use release::{parse_document, Release};
pub use types::{DateError, DateTime};

use std::io::Write;

/// Read the releases from `input` and write their feed to `output`.
/// Nothing is written unless the whole input is valid.
pub fn generate<W: Write>(input: &[u8], config: &Config, output: W) -> Result {
    let document = parse_document(input)?;
    let releases = Release::list(&document)?;
    let feed = Feed::from_releases(&releases, config)?;
    feed.write_to(output)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str, leave_out_prereleases: bool) -> Result<String> {
        let mut output = Vec::new();
        generate(
            input.as_bytes(),
            &Config::new(leave_out_prereleases),
            &mut output,
        )?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn github_response() {
        let input = r#"[
          {
            "url": "https://api.github.com/repos/octocat/Hello-World/releases/3",
            "html_url": "https://github.com/octocat/Hello-World/releases/v2.0.0-rc.1",
            "tag_name": "v2.0.0-rc.1",
            "name": "v2.0.0-rc.1",
            "body": "Release candidate",
            "draft": false,
            "prerelease": true,
            "created_at": "2013-02-27T19:35:32Z",
            "published_at": "2013-02-27T19:35:32Z",
            "author": {"login": "octocat", "id": 1},
            "assets": []
          },
          {
            "url": "https://api.github.com/repos/octocat/Hello-World/releases/1",
            "html_url": "https://github.com/octocat/Hello-World/releases/v1.0.0",
            "tag_name": "v1.0.0",
            "name": "v1.0.0",
            "body": "Description of the release",
            "draft": false,
            "prerelease": false,
            "created_at": "2013-02-27T19:35:32Z",
            "published_at": "2013-02-28T08:00:01Z",
            "author": {"login": "octocat", "id": 1},
            "assets": []
          }
        ]"#;

        assert_eq!(
            run(input, true).unwrap(),
            concat!(
                r#"{"title":"Releases","items":["#,
                r#"{"title":"v1.0.0","content_html":"v1.0.0","#,
                r#""url":"https://api.github.com/repos/octocat/Hello-World/releases/1","#,
                r#""date_published":"2013-02-28T08:00:01+00:00"}"#,
                "]}\n"
            )
        );

        let all: serde_json::Value = serde_json::from_str(&run(input, false).unwrap()).unwrap();
        let object = all.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "Releases");
        let items = object["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "v2.0.0-rc.1");
        assert_eq!(items[0]["date_published"], "2013-02-27T19:35:32+00:00");
        assert_eq!(items[1]["title"], "v1.0.0");
    }

    #[test]
    fn no_output_on_error() {
        let input = r#"[
            {"url": "u1", "tag_name": "v1.1", "prerelease": false, "published_at": "2021-02-01T00:00:00Z"},
            {"url": "u2", "tag_name": "v1.0", "prerelease": false, "published_at": "2021-01-01T00:00"}
        ]"#;
        let mut output = Vec::new();
        let result = generate(input.as_bytes(), &Config::default(), &mut output);
        assert!(matches!(result, Err(Error::Date { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn error_kinds() {
        assert!(matches!(run("not json", false), Err(Error::Parse(_))));
        assert!(matches!(run("\"releases\"", false), Err(Error::NotAnArray(_))));
        assert!(matches!(
            run(r#"[{"url": "u1"}]"#, false),
            Err(Error::Schema { index: 0, .. })
        ));
    }
}
