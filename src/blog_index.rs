use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use spdlog::{info, warn};

use crate::config::Config;
use crate::content::post_list::PostList;
use crate::content::PostRecord;
use crate::error::{BlogError, BlogResult};
use crate::index_document::IndexDocument;
use crate::view::featured_renderer::render_featured_cards;
use crate::view::index_renderer::IndexRenderer;
use crate::view::rss_renderer::RssChannel;

fn write_file(path: &Path, content: &[u8]) -> BlogResult<()> {
    fs::write(path, content).map_err(|e| BlogError::Write(path.to_path_buf(), e))
}

/// Posts considered by the index generator: everything but the index itself.
pub fn index_posts(config: &Config, today: NaiveDate) -> BlogResult<Vec<PostRecord>> {
    let paths = &config.paths;
    PostList::new(&paths.blog_dir, &[paths.index_file.as_str(), paths.feed_file.as_str()])
        .load_posts(&config.defaults, today)
}

/// Posts considered for the featured region, also skipping the reserved files.
pub fn featured_posts(config: &Config, today: NaiveDate) -> BlogResult<Vec<PostRecord>> {
    let paths = &config.paths;
    let mut excluded = vec![paths.index_file.as_str(), paths.feed_file.as_str()];
    excluded.extend(paths.reserved_files.iter().map(|s| s.as_str()));
    PostList::new(&paths.blog_dir, &excluded).load_posts(&config.defaults, today)
}

pub fn render_index(config: &Config, posts: &[PostRecord]) -> BlogResult<String> {
    let featured = render_featured_cards(&config.site, posts, config.featured.count);
    let renderer = IndexRenderer::new(&config.site, &config.paths.feed_file)?;
    Ok(renderer.render(posts, &featured))
}

pub fn render_feed(config: &Config, posts: &[PostRecord], build_time: &NaiveDateTime) -> BlogResult<Vec<u8>> {
    let channel = RssChannel {
        site: &config.site,
        feed_file: &config.paths.feed_file,
        language: &config.feed.language,
        max_items: config.feed.max_items,
    };
    channel.render(posts, build_time).map_err(|e| BlogError::Render(format!("RSS feed: {}", e)))
}

/// Regenerates the index page and the RSS feed, overwriting both.
/// Returns the number of posts indexed.
pub fn generate_index(config: &Config, today: NaiveDate, build_time: &NaiveDateTime) -> BlogResult<usize> {
    let blog_dir = &config.paths.blog_dir;
    if !blog_dir.exists() {
        warn!("Blog directory {} is missing, creating it", blog_dir.display());
        fs::create_dir_all(blog_dir).map_err(|e| BlogError::Write(blog_dir.clone(), e))?;
    }

    let posts = index_posts(config, today)?;

    let index = render_index(config, &posts)?;
    write_file(&config.paths.index_path(), index.as_bytes())?;
    info!("Generated blog index with {} posts", posts.len());

    let feed = render_feed(config, &posts, build_time)?;
    write_file(&config.paths.feed_path(), &feed)?;
    info!("Generated RSS feed");

    Ok(posts.len())
}

/// Rewrites the featured region of the existing index page.
/// Returns the number of featured posts.
pub fn update_featured(config: &Config, today: NaiveDate) -> BlogResult<usize> {
    let blog_dir = &config.paths.blog_dir;
    if !blog_dir.is_dir() {
        return Err(BlogError::MissingDirectory(blog_dir.clone()));
    }

    let posts = featured_posts(config, today)?;
    let count = posts.len().min(config.featured.count);

    let index_path = config.paths.index_path();
    let source = fs::read_to_string(&index_path).map_err(|e| BlogError::UnreadableFile(index_path.clone(), e))?;

    let mut document = IndexDocument::parse(&source);
    let cards = render_featured_cards(&config.site, &posts, config.featured.count);
    if !document.replace_featured(&cards) {
        return Err(BlogError::MissingMarkerRegion(index_path));
    }

    write_file(&index_path, document.to_string().as_bytes())?;
    info!("Updated featured posts with {} posts", count);

    Ok(count)
}
