use chrono::{Datelike, NaiveDate};

pub mod category;
pub mod front_matter;
pub mod post_list;

#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Slug(pub String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One content file, normalized. Every field is populated.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub author: String,
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub read_time: String,
}

impl PostRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
