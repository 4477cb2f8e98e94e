use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::Defaults;
use crate::content::{PostRecord, Slug};
use crate::text_utils::parse_post_date;

const FENCE: &str = "---";

/// Example of header
/// ---
/// title: Writing your first document
/// date: 2024-01-15
/// category: Tutorial
/// tags: [beginner, latex]
/// readTime: 8 min read
/// ---
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "readTime")]
    pub read_time: Option<String>,
}

/// Returns the YAML between the opening and closing `---` lines, or `None`
/// when the document has no header at all.
fn header_block(content: &str) -> Result<Option<&str>, String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == FENCE => {}
        _ => return Ok(None),
    }

    let start = content.find('\n').map(|i| i + 1).unwrap_or(content.len());
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Ok(Some(&content[start..offset]));
        }
        offset += line.len();
    }

    Err("Missing closing `---` of the front matter".to_string())
}

impl FrontMatter {
    pub fn parse(content: &str) -> Result<FrontMatter, String> {
        let yaml = match header_block(content)? {
            None => return Ok(FrontMatter::default()),
            Some(yaml) => yaml,
        };

        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        serde_yaml::from_str::<FrontMatter>(yaml).map_err(|e| e.to_string())
    }

    /// Fills every missing field. `today` stands in for a missing date.
    pub fn into_record(self, slug: Slug, defaults: &Defaults, today: NaiveDate) -> Result<PostRecord, String> {
        let date = match non_empty(self.date) {
            Some(date) => parse_post_date(&date)?,
            None => today,
        };

        Ok(PostRecord {
            slug,
            title: non_empty(self.title).unwrap_or_else(|| defaults.title.clone()),
            description: self.description.unwrap_or_default(),
            date,
            author: non_empty(self.author).unwrap_or_else(|| defaults.author.clone()),
            tags: self.tags.unwrap_or_default(),
            category: non_empty(self.category).unwrap_or_else(|| defaults.category.clone()),
            image: non_empty(self.image),
            read_time: non_empty(self.read_time).unwrap_or_else(|| defaults.read_time.clone()),
        })
    }
}

// An empty value counts as missing
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
