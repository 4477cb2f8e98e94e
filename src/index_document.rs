use std::fmt;
use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

pub const FEATURED_OPEN: &str = "<CardGroup cols={2}>";
pub const FEATURED_CLOSE: &str = "</CardGroup>";

/// Everything between `<CardGroup cols={2}>` and the first `</CardGroup>`
/// after it, wherever the markers sit on their lines.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedRegion {
    pub cards: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    FrontMatter(String),
    Featured(FeaturedRegion),
    /// `## 2024` up to the next heading
    YearSection { year: i32, text: String },
    /// `### Tutorial {#category-tutorial}` up to the next heading
    CategorySection { anchor: String, text: String },
    Text(String),
}

impl Region {
    fn text(&self) -> &str {
        match self {
            Region::FrontMatter(text) => text,
            Region::YearSection { text, .. } => text,
            Region::CategorySection { text, .. } => text,
            Region::Text(text) => text,
            Region::Featured(_) => "",
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Region::FrontMatter(text)
            | Region::YearSection { text, .. }
            | Region::CategorySection { text, .. }
            | Region::Text(text) => Some(text),
            Region::Featured(_) => None,
        }
    }

    fn push_line(&mut self, line: &str) {
        if let Some(text) = self.text_mut() {
            text.push_str(line);
        }
    }
}

/// The rendered blog index split into typed regions. Serializing gives back
/// the exact source text.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDocument {
    regions: Vec<Region>,
}

fn heading_region(line: &str) -> Option<Region> {
    lazy_static! {
        static ref YEAR_HEADING: Regex = Regex::new(r"^## (\d{4})\s*$").unwrap();
        static ref CATEGORY_HEADING: Regex = Regex::new(r"^### .* \{#(category-[^}]*)\}\s*$").unwrap();
        static ref HEADING: Regex = Regex::new(r"^#{1,6} ").unwrap();
    }

    if let Some(caps) = YEAR_HEADING.captures(line) {
        if let Ok(year) = caps[1].parse::<i32>() {
            return Some(Region::YearSection { year, text: String::new() });
        }
    }
    if let Some(caps) = CATEGORY_HEADING.captures(line) {
        return Some(Region::CategorySection { anchor: caps[1].to_string(), text: String::new() });
    }
    if HEADING.is_match(line) {
        return Some(Region::Text(String::new()));
    }
    None
}

/// Length of the leading `---` fenced block, 0 when there is none.
fn front_matter_len(source: &str) -> usize {
    let mut lines = source.split_inclusive('\n');
    let mut len = match lines.next() {
        Some(first) if first.trim_end() == "---" => first.len(),
        _ => return 0,
    };
    for line in lines {
        len += line.len();
        if line.trim_end() == "---" {
            return len;
        }
    }
    0
}

/// Byte offsets of the first open marker and of the first close marker after it.
fn featured_bounds(body: &str) -> Option<(usize, usize)> {
    let open = body.find(FEATURED_OPEN)?;
    let cards_start = open + FEATURED_OPEN.len();
    let close = body[cards_start..].find(FEATURED_CLOSE)? + cards_start;
    Some((open, close))
}

/// Splits `text` into heading regions. When `line_start` is false the first
/// line is the tail of a line already started and is never a heading.
fn scan_lines(text: &str, line_start: bool, current: &mut Region, regions: &mut Vec<Region>) {
    for (n, line) in text.split_inclusive('\n').enumerate() {
        let heading = if n == 0 && !line_start { None } else { heading_region(line.trim_end()) };
        match heading {
            Some(mut region) => {
                region.push_line(line);
                regions.push(std::mem::replace(current, region));
            }
            None => current.push_line(line),
        }
    }
}

impl IndexDocument {
    pub fn parse(source: &str) -> IndexDocument {
        let mut regions = vec![];

        let body_start = front_matter_len(source);
        if body_start > 0 {
            regions.push(Region::FrontMatter(source[..body_start].to_string()));
        }
        let body = &source[body_start..];

        let mut current = Region::Text(String::new());
        match featured_bounds(body) {
            Some((open, close)) => {
                scan_lines(&body[..open], true, &mut current, &mut regions);
                regions.push(std::mem::replace(&mut current, Region::Text(String::new())));
                regions.push(Region::Featured(FeaturedRegion {
                    cards: body[open + FEATURED_OPEN.len()..close].to_string(),
                }));
                let rest = &body[close + FEATURED_CLOSE.len()..];
                scan_lines(rest, false, &mut current, &mut regions);
            }
            None => scan_lines(body, true, &mut current, &mut regions),
        }
        regions.push(current);

        regions.retain(|r| matches!(r, Region::Featured(_)) || !r.text().is_empty());
        IndexDocument { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn featured(&self) -> Option<&FeaturedRegion> {
        self.regions.iter().find_map(|r| match r {
            Region::Featured(featured) => Some(featured),
            _ => None,
        })
    }

    /// Replaces the featured cards. Returns false, leaving the document
    /// untouched, when it has no featured region.
    pub fn replace_featured(&mut self, cards: &str) -> bool {
        for region in self.regions.iter_mut() {
            if let Region::Featured(featured) = region {
                featured.cards = format!("\n{}\n", cards);
                return true;
            }
        }
        false
    }
}

impl Display for IndexDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for region in &self.regions {
            match region {
                Region::Featured(featured) => {
                    write!(f, "{}{}{}", FEATURED_OPEN, featured.cards, FEATURED_CLOSE)?;
                }
                other => f.write_str(other.text())?,
            }
        }
        Ok(())
    }
}
