use std::io::Cursor;

use chrono::{NaiveDateTime, NaiveTime};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::Site;
use crate::content::PostRecord;
use crate::text_utils::format_http_date;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>LaTeX Cloud Studio Blog</title>
    <description>Insights, tutorials, and updates from the LaTeX Cloud Studio team</description>
    <link>https://docs.latex-cloud-studio.com/blog</link>
    <atom:link href="https://docs.latex-cloud-studio.com/blog/rss.xml" rel="self" type="application/rss+xml"/>
    <language>en-us</language>
    <lastBuildDate>Wed, 14 Oct 2026 08:00:00 GMT</lastBuildDate>
    <item>
      <title>Writing your first LaTeX document</title>
      <description>Step by step guide to your first document</description>
      <link>https://docs.latex-cloud-studio.com/blog/first-document</link>
      <guid>https://docs.latex-cloud-studio.com/blog/first-document</guid>
      <pubDate>Mon, 15 Jan 2024 00:00:00 GMT</pubDate>
      <author>Jane Doe</author>
      <category>beginner</category>
    </item>
  </channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub site: &'a Site,
    pub feed_file: &'a str,
    pub language: &'a str,
    pub max_items: usize,
}

impl<'a> RssChannel<'a> {
    /// `posts` must be sorted newest first, only the first `max_items` are published.
    pub fn render(&self, posts: &[PostRecord], build_time: &NaiveDateTime) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:atom", "http://www.w3.org/2005/Atom"));
        writer.write_event(Event::Start(rss))?;

        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        let blog_url = self.site.blog_url();
        push_text(&mut writer, "title", &self.site.heading)?;
        push_text(&mut writer, "description", &self.site.description)?;
        push_text(&mut writer, "link", &blog_url)?;

        let feed_url = format!("{}/{}", blog_url, self.feed_file);
        let mut self_link = BytesStart::new("atom:link");
        self_link.push_attribute(("href", feed_url.as_str()));
        self_link.push_attribute(("rel", "self"));
        self_link.push_attribute(("type", "application/rss+xml"));
        writer.write_event(Event::Empty(self_link))?;

        push_text(&mut writer, "language", self.language)?;
        push_text(&mut writer, "lastBuildDate", &format_http_date(build_time))?;

        for post in posts.iter().take(self.max_items) {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            let link = self.site.post_url(post.slug.as_str());
            push_text(&mut writer, "title", &post.title)?;
            push_text(&mut writer, "description", &post.description)?;
            push_text(&mut writer, "link", &link)?;
            push_text(&mut writer, "guid", &link)?;

            // Posts only carry a calendar date, published at midnight GMT
            let published = post.date.and_time(NaiveTime::default());
            push_text(&mut writer, "pubDate", &format_http_date(&published))?;
            push_text(&mut writer, "author", &post.author)?;

            for tag in &post.tags {
                push_text(&mut writer, "category", tag)?;
            }

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
