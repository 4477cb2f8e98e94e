use ramhorns::Template;

use crate::config::Site;
use crate::content::category::{category_anchor, category_icon};
use crate::content::PostRecord;
use crate::error::{BlogError, BlogResult};
use crate::post_index::{CategoryIndex, YearIndex};
use crate::text_utils::{format_month_day, format_short_date};
use crate::view::attr;

// Section tags sit inline so the output does not depend on standalone-line handling.
const INDEX_TEMPLATE: &str = r##"---
title: {{{title}}}
description: {{{description}}}
---

# {{{heading}}}

{{{intro}}}

## Featured Posts

<CardGroup cols={2}>
{{{featured}}}
</CardGroup>

## Categories

Browse posts by category:

<CardGroup cols={3}>
{{#categories}}<Card title="{{{title}}}" icon="{{{icon}}}" href="#{{{anchor}}}">
  {{{count_label}}}
</Card>
{{/categories}}</CardGroup>

## All Posts

{{#years}}## {{{year}}}

{{#posts}}<Card title="{{{title}}}" icon="{{{icon}}}" href="{{{href}}}">
  **{{{category}}}** • {{{date}}} • {{{author}}} • {{{read_time}}}

  {{{description}}}{{{tags_line}}}
</Card>

{{/posts}}{{/years}}
## Posts by Category

{{#category_sections}}### {{{name}}} {{{heading_id}}}

{{#posts}}<Card title="{{{title}}}" icon="{{{icon}}}" href="{{{href}}}">
  {{{date}}} • {{{read_time}}}

  {{{description}}}
</Card>

{{/posts}}{{/category_sections}}
---

<Info>
  Subscribe to our RSS feed to stay updated with the latest posts.

  [RSS Feed]({{{feed_href}}})
</Info>
"##;

#[derive(ramhorns::Content)]
struct IndexPage<'a> {
    title: &'a str,
    description: &'a str,
    heading: &'a str,
    intro: &'a str,
    featured: &'a str,
    categories: Vec<CategoryCard<'a>>,
    years: Vec<YearSection<'a>>,
    category_sections: Vec<CategorySection<'a>>,
    feed_href: String,
}

#[derive(ramhorns::Content)]
struct CategoryCard<'a> {
    title: String,
    icon: &'a str,
    anchor: String,
    count_label: String,
}

#[derive(ramhorns::Content)]
struct YearSection<'a> {
    year: String,
    posts: Vec<PostCard<'a>>,
}

#[derive(ramhorns::Content)]
struct CategorySection<'a> {
    name: &'a str,
    heading_id: String,
    posts: Vec<PostCard<'a>>,
}

#[derive(ramhorns::Content)]
struct PostCard<'a> {
    title: String,
    icon: &'a str,
    href: String,
    category: &'a str,
    date: String,
    author: &'a str,
    read_time: &'a str,
    description: &'a str,
    tags_line: String,
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 post".to_string()
    } else {
        format!("{} posts", count)
    }
}

fn post_card<'a>(site: &Site, post: &'a PostRecord, date: String, with_tags: bool) -> PostCard<'a> {
    let tags_line = if with_tags && !post.tags.is_empty() {
        format!("\n\n  Tags: {}", post.tags.join(", "))
    } else {
        String::new()
    };

    PostCard {
        title: attr(&post.title),
        icon: category_icon(&post.category),
        href: site.post_href(post.slug.as_str()),
        category: post.category.as_str(),
        date,
        author: post.author.as_str(),
        read_time: post.read_time.as_str(),
        description: post.description.as_str(),
        tags_line,
    }
}

pub struct IndexRenderer<'a> {
    pub template: Template<'a>,
    pub site: &'a Site,
    pub feed_file: &'a str,
}

impl<'a> IndexRenderer<'a> {
    pub fn new(site: &'a Site, feed_file: &'a str) -> BlogResult<IndexRenderer<'a>> {
        let template = Template::new(INDEX_TEMPLATE)
            .map_err(|e| BlogError::Render(format!("index template: {}", e)))?;

        Ok(IndexRenderer {
            template,
            site,
            feed_file,
        })
    }

    /// `posts` must be sorted newest first; `featured` is the already rendered
    /// interior of the featured region.
    pub fn render(&self, posts: &[PostRecord], featured: &str) -> String {
        let by_year = YearIndex::build(posts);
        let by_category = CategoryIndex::build(posts);

        let categories = by_category.in_discovery_order()
            .map(|(name, posts)| CategoryCard {
                title: attr(name),
                icon: category_icon(name),
                anchor: category_anchor(name),
                count_label: count_label(posts.len()),
            })
            .collect();

        let years = by_year.newest_first()
            .map(|(year, posts)| YearSection {
                year: year.to_string(),
                posts: posts.iter()
                    .map(|post| post_card(self.site, post, format_month_day(&post.date), true))
                    .collect(),
            })
            .collect();

        let category_sections = by_category.by_name()
            .into_iter()
            .map(|(name, posts)| CategorySection {
                name,
                heading_id: format!("{{#{}}}", category_anchor(name)),
                posts: posts.iter()
                    .map(|post| post_card(self.site, post, format_short_date(&post.date), false))
                    .collect(),
            })
            .collect();

        self.template.render(&IndexPage {
            title: self.site.title.as_str(),
            description: self.site.description.as_str(),
            heading: self.site.heading.as_str(),
            intro: self.site.intro.as_str(),
            featured,
            categories,
            years,
            category_sections,
            feed_href: site_feed_href(self.site, self.feed_file),
        })
    }
}

fn site_feed_href(site: &Site, feed_file: &str) -> String {
    format!("{}/{}", site.blog_path.trim_end_matches('/'), feed_file)
}
