//! Blog posts as rendered by blog cards.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    /// Plain-text summary.
    pub excerpt: String,
    /// Plain-text body, one entry per paragraph.
    #[serde(default)]
    pub paragraphs: Vec<String>,
    pub image_url: Option<String>,
    pub published: NaiveDate,
    pub author: Option<String>,
}

impl BlogPost {
    /// Detail page path.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// e.g. "January 5, 2024".
    pub fn published_display(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }
}

/// Post shape returned by `/wp-json/wp/v2/posts?_embed`.
#[derive(Debug, Deserialize)]
pub(crate) struct WpPost {
    slug: String,
    date: NaiveDateTime,
    title: Rendered,
    #[serde(default)]
    excerpt: Option<Rendered>,
    #[serde(default)]
    content: Option<Rendered>,
    #[serde(rename = "_embedded", default)]
    embedded: Option<WpEmbedded>,
}

#[derive(Debug, Deserialize)]
struct Rendered {
    rendered: String,
}

#[derive(Debug, Default, Deserialize)]
struct WpEmbedded {
    #[serde(default)]
    author: Vec<WpAuthor>,
    #[serde(rename = "wp:featuredmedia", default)]
    featured_media: Vec<WpMedia>,
}

#[derive(Debug, Deserialize)]
struct WpAuthor {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WpMedia {
    source_url: Option<String>,
}

impl From<WpPost> for BlogPost {
    fn from(post: WpPost) -> Self {
        let embedded = post.embedded.unwrap_or_default();
        Self {
            slug: post.slug,
            title: html_to_text(&post.title.rendered),
            excerpt: post
                .excerpt
                .map(|e| html_to_text(&e.rendered))
                .unwrap_or_default(),
            paragraphs: post
                .content
                .map(|c| html_paragraphs(&c.rendered))
                .unwrap_or_default(),
            image_url: embedded
                .featured_media
                .into_iter()
                .find_map(|m| m.source_url),
            published: post.date.date(),
            author: embedded.author.into_iter().find_map(|a| a.name),
        }
    }
}

/// Strip tags and decode the entities WordPress emits in rendered fields.
pub fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tags that start or end a paragraph.
const BLOCK_TAGS: [&str; 14] = [
    "p", "br", "div", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "pre",
];

/// Split rendered HTML into plain-text paragraphs at block boundaries.
pub fn html_paragraphs(html: &str) -> Vec<String> {
    let mut marked = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        marked.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail.find('>').map_or(tail.len(), |i| i + 1);
        let tag = tail[..end].trim_start_matches(['<', '/']).to_ascii_lowercase();
        if BLOCK_TAGS
            .iter()
            .any(|name| tag.starts_with(name) && is_tag_boundary(&tag[name.len()..]))
        {
            marked.push('\n');
        }
        marked.push_str(&tail[..end]);
        rest = &tail[end..];
    }
    marked.push_str(rest);

    marked
        .split('\n')
        .map(html_to_text)
        .filter(|p| !p.is_empty())
        .collect()
}

fn is_tag_boundary(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(['>', ' ', '/'])
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find(';').filter(|end| *end <= 10) {
            Some(end) => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "hellip" => Some('\u{2026}'),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            // Control characters other than whitespace stay encoded.
            char::from_u32(value).filter(|ch| !ch.is_control() || ch.is_ascii_whitespace())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text() {
        assert_eq!(
            html_to_text("<p>Our new tee&#8217;s here &amp; it&#039;s soft.</p>\n"),
            "Our new tee\u{2019}s here & it's soft."
        );
        assert_eq!(html_to_text("Fish &chips"), "Fish &chips");
        assert_eq!(html_to_text("a &unknown; b"), "a &unknown; b");
        assert_eq!(html_to_text("<b>Read</b> more&hellip;"), "Read more\u{2026}");
    }

    #[test]
    fn test_control_entities_left_encoded() {
        assert_eq!(html_to_text("a&#0;b"), "a&#0;b");
        assert_eq!(html_to_text("a&#x7f;b"), "a&#x7f;b");
        assert_eq!(html_to_text("a&#9;b"), "a b");
        assert!(!html_to_text("x&#x0;y").contains('\0'));
    }

    #[test]
    fn test_html_paragraphs_split_on_containers() {
        assert_eq!(html_paragraphs("<div>a</div><div>b</div>"), vec!["a", "b"]);
        assert_eq!(
            html_paragraphs("<h5>Care</h5><ul><li>Cold wash</li></ul><h6>Note</h6><ol>x</ol>"),
            vec!["Care", "Cold wash", "Note", "x"]
        );
        assert_eq!(html_paragraphs("<divider>a</divider>b"), vec!["ab"]);
    }

    #[test]
    fn test_wp_post_conversion() {
        let json = r#"{
            "id": 12,
            "slug": "spring-drop",
            "date": "2024-03-05T09:30:00",
            "title": {"rendered": "Spring &amp; Summer Drop"},
            "excerpt": {"rendered": "<p>New hoodies.</p>"},
            "content": {"rendered": "<p>New hoodies.</p>\n<p>Restocks Friday.</p>"},
            "_embedded": {
                "author": [{"name": "Sam"}],
                "wp:featuredmedia": [{"source_url": "https://cdn.example.com/spring.jpg"}]
            }
        }"#;
        let post: BlogPost = serde_json::from_str::<WpPost>(json).unwrap().into();

        assert_eq!(post.slug, "spring-drop");
        assert_eq!(post.title, "Spring & Summer Drop");
        assert_eq!(post.excerpt, "New hoodies.");
        assert_eq!(post.paragraphs, vec!["New hoodies.", "Restocks Friday."]);
        assert_eq!(post.author.as_deref(), Some("Sam"));
        assert_eq!(post.image_url.as_deref(), Some("https://cdn.example.com/spring.jpg"));
        assert_eq!(post.path(), "/blog/spring-drop");
        assert_eq!(post.published_display(), "March 5, 2024");
    }

    #[test]
    fn test_html_paragraphs() {
        let html = "<p>First &amp; best.</p>\n<h2>Sizing</h2><p>Runs <em>small</em>.<br/>Size up.</p><pre>x</pre>";
        assert_eq!(
            html_paragraphs(html),
            vec!["First & best.", "Sizing", "Runs small.", "Size up.", "x"]
        );
        assert!(html_paragraphs("").is_empty());
    }

    #[test]
    fn test_wp_post_without_embeds() {
        let json = r#"{"slug":"hello","date":"2023-12-25T00:00:00","title":{"rendered":"Hello"}}"#;
        let post: BlogPost = serde_json::from_str::<WpPost>(json).unwrap().into();
        assert!(post.image_url.is_none());
        assert!(post.author.is_none());
        assert_eq!(post.excerpt, "");
        assert!(post.paragraphs.is_empty());
    }
}
