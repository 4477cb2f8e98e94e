use std::collections::HashSet;
use std::{fs, io};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use spdlog::debug;

use crate::config::Defaults;
use crate::content::front_matter::FrontMatter;
use crate::content::{PostRecord, Slug};
use crate::error::{BlogError, BlogResult};

pub const CONTENT_EXTENSIONS: [&str; 2] = ["mdx", "md"];

pub struct PostList {
    pub root_dir: PathBuf,
    /// File names never treated as posts, e.g. the generated index
    pub excluded: Vec<String>,
}

impl PostList {
    pub fn new(root_dir: &Path, excluded: &[&str]) -> PostList {
        PostList {
            root_dir: root_dir.to_path_buf(),
            excluded: excluded.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn is_content_file(&self, file_name: &str) -> bool {
        if self.excluded.iter().any(|x| x == file_name) {
            return false;
        }
        match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => CONTENT_EXTENSIONS.contains(&ext),
            None => false,
        }
    }

    /// Content files of the directory, ordered by file name.
    pub fn retrieve_files(&self) -> BlogResult<Vec<PathBuf>> {
        if !self.root_dir.is_dir() {
            return Err(BlogError::MissingDirectory(self.root_dir.clone()));
        }

        let unreadable = |e: io::Error| BlogError::UnreadableFile(self.root_dir.clone(), e);
        let mut posts = vec![];
        for entry in fs::read_dir(&self.root_dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            if !entry.file_type().map_err(unreadable)?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(file_name) = file_name.to_str() {
                if self.is_content_file(file_name) {
                    posts.push(entry.path());
                }
            }
        }

        posts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(posts)
    }

    /// Reads every content file and returns the posts, newest first.
    /// The first unreadable file or bad header aborts the whole load.
    pub fn load_posts(&self, defaults: &Defaults, today: NaiveDate) -> BlogResult<Vec<PostRecord>> {
        let mut seen: HashSet<Slug> = HashSet::new();
        let mut posts = vec![];

        for path in self.retrieve_files()? {
            let post = load_post(&path, defaults, today)?;
            if !seen.insert(post.slug.clone()) {
                return Err(BlogError::DuplicateSlug(post.slug.0));
            }
            debug!("Loaded post {} ({}) from {}", post.slug.as_str(), post.date, path.display());
            posts.push(post);
        }

        sort_by_date(&mut posts);
        Ok(posts)
    }
}

pub fn load_post(path: &Path, defaults: &Defaults, today: NaiveDate) -> BlogResult<PostRecord> {
    let content = fs::read_to_string(path).map_err(|e| BlogError::UnreadableFile(path.to_path_buf(), e))?;
    let slug = slug_from_path(path)?;

    FrontMatter::parse(&content)
        .and_then(|fm| fm.into_record(slug, defaults, today))
        .map_err(|e| BlogError::UnparsableHeader(path.to_path_buf(), e))
}

fn slug_from_path(path: &Path) -> BlogResult<Slug> {
    match path.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) => Ok(Slug(stem.to_string())),
        None => Err(BlogError::UnparsableHeader(path.to_path_buf(), "File name is not valid UTF-8".to_string())),
    }
}

/// Newest first. Stable, so posts of the same day keep their discovery order.
pub fn sort_by_date(posts: &mut [PostRecord]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::test_data::{post_source, POST_DATA, POST_WITHOUT_HEADER};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn blog_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn slugs(posts: &[PostRecord]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_filters_files() {
        let dir = blog_dir(&[
            ("index.mdx", "---\ntitle: Blog\n---\n"),
            ("auto-index.mdx", "---\ntitle: Auto\n---\n"),
            ("first.mdx", POST_DATA),
            ("second.md", POST_WITHOUT_HEADER),
            ("rss.xml", "<rss/>"),
            ("notes.txt", "hello"),
        ]);
        fs::create_dir(dir.path().join("drafts.mdx")).unwrap();

        let list = PostList::new(dir.path(), &["index.mdx"]);
        let files: Vec<_> = list.retrieve_files().unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(files, ["auto-index.mdx", "first.mdx", "second.md"]);

        let list = PostList::new(dir.path(), &["index.mdx", "auto-index.mdx"]);
        assert_eq!(list.retrieve_files().unwrap().len(), 2);
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        let dir = blog_dir(&[
            ("a-old.mdx", post_source("Old", "2023-05-01", "Technical").as_str()),
            ("b-same-1.mdx", post_source("Same 1", "2024-02-10", "Tutorial").as_str()),
            ("c-new.mdx", post_source("New", "2025-01-01", "General").as_str()),
            ("d-same-2.mdx", post_source("Same 2", "2024-02-10", "Tutorial").as_str()),
            ("e-same-3.mdx", post_source("Same 3", "2024-02-10", "LaTeX").as_str()),
        ]);

        let posts = PostList::new(dir.path(), &["index.mdx"]).load_posts(&Defaults::default(), today()).unwrap();
        assert_eq!(slugs(&posts), ["c-new", "b-same-1", "d-same-2", "e-same-3", "a-old"]);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_missing_header_uses_defaults() {
        let dir = blog_dir(&[("my-notes.mdx", POST_WITHOUT_HEADER)]);
        let posts = PostList::new(dir.path(), &["index.mdx"]).load_posts(&Defaults::default(), today()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug.as_str(), "my-notes");
        assert_eq!(posts[0].title, "Untitled");
        assert_eq!(posts[0].date, today());
        assert_eq!(posts[0].category, "General");
        assert!(posts[0].tags.is_empty());
    }

    #[test]
    fn test_empty_dir() {
        let dir = blog_dir(&[]);
        let posts = PostList::new(dir.path(), &["index.mdx"]).load_posts(&Defaults::default(), today()).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_bad_header_aborts() {
        let dir = blog_dir(&[
            ("good.mdx", POST_DATA),
            ("zz-bad.mdx", "---\ntitle: [oops\n---\n"),
        ]);
        let err = PostList::new(dir.path(), &[]).load_posts(&Defaults::default(), today()).unwrap_err();
        match err {
            BlogError::UnparsableHeader(path, _) => assert!(path.ends_with("zz-bad.mdx")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let dir = blog_dir(&[("post.md", POST_DATA), ("post.mdx", POST_DATA)]);
        let err = PostList::new(dir.path(), &[]).load_posts(&Defaults::default(), today()).unwrap_err();
        assert!(matches!(err, BlogError::DuplicateSlug(slug) if slug == "post"));
    }

    #[test]
    fn test_missing_dir() {
        let dir = blog_dir(&[]);
        let missing = dir.path().join("nope");
        let err = PostList::new(&missing, &[]).retrieve_files().unwrap_err();
        assert!(matches!(err, BlogError::MissingDirectory(_)));
    }
}
