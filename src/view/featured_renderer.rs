use std::fmt::Write;

use crate::config::Site;
use crate::content::category::category_icon;
use crate::content::PostRecord;
use crate::view::attr;

fn render_card(buf: &mut String, site: &Site, post: &PostRecord) {
    let _ = writeln!(buf, "<Card");
    let _ = writeln!(buf, "  title=\"{}\"", attr(&post.title));
    let _ = writeln!(buf, "  icon=\"{}\"", category_icon(&post.category));
    let _ = writeln!(buf, "  href=\"{}\"", site.post_href(post.slug.as_str()));
    let _ = writeln!(buf, ">");
    let _ = writeln!(buf, "  {}", post.description);
    let _ = write!(buf, "</Card>");
}

/// Cards of the `count` most recent posts, separated by a blank line.
/// `posts` must already be sorted newest first.
pub fn render_featured_cards(site: &Site, posts: &[PostRecord], count: usize) -> String {
    let mut buf = String::new();
    for (i, post) in posts.iter().take(count).enumerate() {
        if i > 0 {
            buf.push_str("\n\n");
        }
        render_card(&mut buf, site, post);
    }
    buf
}

#[cfg(test)]
mod tests {
    use crate::test_data::post_record;

    use super::*;

    #[test]
    fn test_single_card() {
        let mut post = post_record("first-steps", "2024-01-15", "Tutorial");
        post.title = "First \"steps\"".to_string();
        let cards = render_featured_cards(&Site::default(), &[post], 4);
        assert_eq!(cards, r#"<Card
  title="First &quot;steps&quot;"
  icon="book-open"
  href="/blog/first-steps"
>
  About first-steps
</Card>"#);
    }

    #[test]
    fn test_takes_most_recent() {
        let posts: Vec<_> = (1..=6)
            .map(|i| post_record(&format!("post-{}", i), &format!("2024-0{}-01", 7 - i), "Technical"))
            .collect();
        let cards = render_featured_cards(&Site::default(), &posts, 4);
        assert_eq!(cards.matches("<Card").count(), 4);
        assert_eq!(cards.matches("</Card>\n\n<Card").count(), 3);
        assert!(cards.contains("href=\"/blog/post-1\""));
        assert!(cards.contains("href=\"/blog/post-4\""));
        assert!(!cards.contains("post-5"));
        assert!(cards.contains("icon=\"code\""));
    }

    #[test]
    fn test_no_posts() {
        assert_eq!(render_featured_cards(&Site::default(), &[], 4), "");
    }
}
