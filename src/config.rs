use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const CFG_FILE_NAME: &str = "blogdex.toml";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Paths {
    pub blog_dir: PathBuf,
    pub index_file: String,
    pub feed_file: String,
    /// Extra files skipped by the featured posts update
    pub reserved_files: Vec<String>,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            blog_dir: PathBuf::from("blog"),
            index_file: "index.mdx".to_string(),
            feed_file: "rss.xml".to_string(),
            reserved_files: vec!["auto-index.mdx".to_string()],
        }
    }
}

impl Paths {
    pub fn index_path(&self) -> PathBuf {
        self.blog_dir.join(&self.index_file)
    }

    pub fn feed_path(&self) -> PathBuf {
        self.blog_dir.join(&self.feed_file)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub heading: String,
    pub intro: String,
    pub base_url: String,
    pub blog_path: String,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            title: "Blog".to_string(),
            description: "Insights, tutorials, and updates from the LaTeX Cloud Studio team".to_string(),
            heading: "LaTeX Cloud Studio Blog".to_string(),
            intro: "Stay updated with the latest LaTeX tips, tutorials, and platform updates.".to_string(),
            base_url: "https://docs.latex-cloud-studio.com".to_string(),
            blog_path: "/blog".to_string(),
        }
    }
}

impl Site {
    /// Site relative link of a post, e.g. `/blog/my-post`
    pub fn post_href(&self, slug: &str) -> String {
        format!("{}/{}", self.blog_path.trim_end_matches('/'), slug)
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.post_href(slug))
    }

    pub fn blog_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.blog_path.trim_end_matches('/'))
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Defaults {
    pub title: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            title: "Untitled".to_string(),
            author: "LaTeX Cloud Studio Team".to_string(),
            category: "General".to_string(),
            read_time: "5 min read".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Feed {
    pub max_items: usize,
    pub language: String,
}

impl Default for Feed {
    fn default() -> Self {
        Feed {
            max_items: 20,
            language: "en-us".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Featured {
    pub count: usize,
}

impl Default for Featured {
    fn default() -> Self {
        Featured { count: 4 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
    /// Base path of the daily log file, console only when unset
    pub location: Option<PathBuf>,
    /// Rotated files kept next to `location`, 0 keeps all of them
    pub max_files: usize,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: LogLevel::default(),
            location: None,
            max_files: 30,
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone, Default, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub site: Site,
    pub defaults: Defaults,
    pub feed: Feed,
    pub featured: Featured,
    pub log: Log,
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file {}: {}", cfg_path.display(), e))),
    }
}

fn find_config_path() -> Option<PathBuf> {
    if let Ok(cur_dir) = env::current_dir() {
        if cur_dir.join(CFG_FILE_NAME).exists() {
            return Some(cur_dir.join(CFG_FILE_NAME));
        }
    }

    let cfg_dir = dirs::config_dir()?.join("blogdex");
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

/// Reads `blogdex.toml` from the current directory or the user config
/// directory. Without a config file every setting keeps its default.
pub fn open_config() -> io::Result<(Config, Option<PathBuf>)> {
    match find_config_path() {
        Some(path) => Ok((read_config(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}
