use std::cmp::Ordering;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

use crate::fetch::{apply_limit, fetch_or, require};
use crate::rich_text::body_markdown;
use crate::source::CmsSource;

// graphql documents sent to the cms

pub const POSTS_QUERY: &str = r#"query posts {
  postConnection {
    edges {
      node {
        _sys { filename }
        title
        published_at
        read_time
        excerpt
      }
    }
  }
}"#;

pub const POST_QUERY: &str = r#"query post($relativePath: String!) {
  post(relativePath: $relativePath) {
    _sys { filename }
    title
    published_at
    read_time
    excerpt
    body
    prev_post
    next_post
  }
}"#;

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: u32,
    pub excerpt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDetail {
    pub post: BlogPost,
    // markdown
    pub body: String,
    pub prev_post: Option<String>,
    pub next_post: Option<String>,
}

// wire shapes, everything optional the way the cms hands it out

#[derive(Debug, Deserialize)]
struct PostsData {
    #[serde(rename = "postConnection")]
    post_connection: Option<PostConnection>,
}

#[derive(Debug, Deserialize)]
struct PostConnection {
    edges: Option<Vec<Option<PostEdge>>>,
}

#[derive(Debug, Deserialize)]
struct PostEdge {
    node: Option<PostNode>,
}

#[derive(Debug, Deserialize)]
struct PostData {
    post: Option<PostNode>,
}

#[derive(Debug, Deserialize)]
struct SysInfo {
    filename: String,
}

#[derive(Debug, Deserialize)]
struct PostNode {
    #[serde(rename = "_sys")]
    sys: SysInfo,
    title: Option<String>,
    published_at: Option<String>,
    read_time: Option<f64>,
    excerpt: Option<String>,
    // markdown, or the cms rich-text tree
    body: Option<Value>,
    prev_post: Option<String>,
    next_post: Option<String>,
}

// accepts full rfc 3339 timestamps as well as bare dates
pub fn parse_published_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(err) => {
            warn!("unparseable publish date {value:?}: {err}");
            None
        }
    }
}

impl PostNode {
    fn into_post(self) -> anyhow::Result<(BlogPost, Option<Value>, Option<String>, Option<String>)> {
        require("filename", &self.sys.filename)?;

        let title = self.title.unwrap_or_default();
        require("title", &title).with_context(|| format!("post {}", self.sys.filename))?;

        let post = BlogPost {
            slug: self.sys.filename,
            title,
            published_at: self.published_at.as_deref().and_then(parse_published_at),
            read_time: self.read_time.map(|t| t.max(0.0).round() as u32).unwrap_or(0),
            excerpt: self.excerpt.unwrap_or_default(),
        };

        let non_empty = |slug: Option<String>| slug.filter(|s| !s.trim().is_empty());

        Ok((post, self.body, non_empty(self.prev_post), non_empty(self.next_post)))
    }
}

fn title_order(a: &BlogPost, b: &BlogPost) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

// newest first; equal dates go alphabetically, and undated posts trail the
// dated ones, alphabetically among themselves
pub fn compare_posts(a: &BlogPost, b: &BlogPost) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| title_order(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => title_order(a, b),
    }
}

pub fn sort_posts(posts: &mut [BlogPost]) {
    posts.sort_by(compare_posts);
}

fn decode_posts(data: Value) -> anyhow::Result<Vec<BlogPost>> {
    let data: PostsData = serde_json::from_value(data).context("malformed post listing")?;

    let edges = data
        .post_connection
        .and_then(|conn| conn.edges)
        .ok_or_else(|| anyhow::Error::msg("post listing has no edges"))?;

    edges
        .into_iter()
        .flatten()
        .filter_map(|edge| edge.node)
        .map(|node| node.into_post().map(|(post, ..)| post))
        .collect()
}

pub async fn fetch_posts(source: &impl CmsSource, limit: Option<usize>) -> Vec<BlogPost> {
    fetch_or("blog posts", Vec::new(), async {
        let mut posts = decode_posts(source.query(POSTS_QUERY, json!({})).await?)?;
        sort_posts(&mut posts);

        Ok(apply_limit(posts, limit))
    })
    .await
}

pub async fn fetch_post(source: &impl CmsSource, slug: &str) -> Option<BlogPostDetail> {
    fetch_or(&format!("blog post {slug}"), None, async {
        let variables = json!({"relativePath": format!("{slug}.md")});

        let data: PostData = serde_json::from_value(source.query(POST_QUERY, variables).await?)
            .context("malformed post")?;

        let node = data
            .post
            .ok_or_else(|| anyhow::Error::msg(format!("no post named {slug}")))?;

        let (post, body, prev_post, next_post) = node.into_post()?;

        Ok(Some(BlogPostDetail {
            post,
            body: body_markdown(body).with_context(|| format!("post {slug}"))?,
            prev_post,
            next_post,
        }))
    })
    .await
}

// neighbours of a post in listing order, (newer, older)
pub fn adjacent_posts<'a>(
    posts: &'a [BlogPost],
    slug: &str,
) -> (Option<&'a BlogPost>, Option<&'a BlogPost>) {
    match posts.iter().position(|post| post.slug == slug) {
        Some(idx) => (
            idx.checked_sub(1).and_then(|prev| posts.get(prev)),
            posts.get(idx + 1),
        ),
        None => (None, None),
    }
}

// a neighbouring post as linked from the bottom of a post
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostLink {
    pub slug: String,
    pub title: String,
}

impl From<&BlogPost> for PostLink {
    fn from(post: &BlogPost) -> Self {
        PostLink {
            slug: post.slug.clone(),
            title: post.title.clone(),
        }
    }
}

// (newer, older) for a loaded post; the cms may name the neighbours itself,
// otherwise they come from the listing order, which is also where titles are
// looked up
pub fn post_neighbours(
    detail: &BlogPostDetail,
    posts: &[BlogPost],
) -> (Option<PostLink>, Option<PostLink>) {
    let (newer, older) = adjacent_posts(posts, &detail.post.slug);

    let named = |slug: &Option<String>, fallback: Option<&BlogPost>| match slug {
        Some(slug) => Some(
            posts
                .iter()
                .find(|post| &post.slug == slug)
                .map(PostLink::from)
                .unwrap_or_else(|| PostLink {
                    slug: slug.clone(),
                    title: slug.clone(),
                }),
        ),
        None => fallback.map(PostLink::from),
    };

    (
        named(&detail.prev_post, newer),
        named(&detail.next_post, older),
    )
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::testing::FakeCms;

    fn node(slug: &str, title: &str, published_at: Option<&str>) -> Value {
        json!({
            "node": {
                "_sys": {"filename": slug},
                "title": title,
                "published_at": published_at,
                "read_time": 4,
                "excerpt": "",
            }
        })
    }

    fn listing(edges: Vec<Value>) -> FakeCms {
        FakeCms::answering(json!({"postConnection": {"edges": edges}}))
    }

    fn slugs(posts: &[BlogPost]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn newest_first() {
        let cms = listing(vec![
            node("old", "Old", Some("2022-01-01T00:00:00.000Z")),
            node("new", "New", Some("2024-06-01T10:00:00.000Z")),
            node("mid", "Mid", Some("2023-03-15")),
        ]);

        assert_eq!(slugs(&block_on(fetch_posts(&cms, None))), vec!["new", "mid", "old"]);
    }

    #[test]
    fn missing_dates_fall_back_to_title() {
        let cms = listing(vec![
            node("c", "Cherry", None),
            node("a", "apple", Some("")),
            node("b", "Banana", None),
        ]);

        assert_eq!(slugs(&block_on(fetch_posts(&cms, None))), vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_dates_fall_back_to_title() {
        let cms = listing(vec![
            node("z", "Zebra", Some("2024-01-01")),
            node("m", "Mango", Some("2024-01-01")),
            node("later", "Later", Some("2024-02-01")),
        ]);

        assert_eq!(slugs(&block_on(fetch_posts(&cms, None))), vec!["later", "m", "z"]);
    }

    #[test]
    fn undated_posts_trail() {
        let cms = listing(vec![
            node("undated", "Aardvark", None),
            node("dated", "Zebra", Some("2020-01-01")),
        ]);

        assert_eq!(slugs(&block_on(fetch_posts(&cms, None))), vec!["dated", "undated"]);
    }

    #[test]
    fn limit_after_sorting() {
        let cms = listing(vec![
            node("a", "A", Some("2021-01-01")),
            node("b", "B", Some("2023-01-01")),
            node("c", "C", Some("2022-01-01")),
        ]);

        assert_eq!(slugs(&block_on(fetch_posts(&cms, Some(2)))), vec!["b", "c"]);
    }

    #[test]
    fn unreachable_cms_is_empty() {
        assert!(block_on(fetch_posts(&FakeCms::unreachable(), None)).is_empty());
    }

    #[test]
    fn missing_edges_is_empty() {
        let cms = FakeCms::answering(json!({"postConnection": null}));
        assert!(block_on(fetch_posts(&cms, None)).is_empty());
    }

    #[test]
    fn untitled_post_is_malformed() {
        let cms = listing(vec![node("a", "A", None), node("b", "", None)]);
        assert!(block_on(fetch_posts(&cms, None)).is_empty());
    }

    #[test]
    fn single_post() {
        let cms = FakeCms::answering(json!({
            "post": {
                "_sys": {"filename": "hello-world"},
                "title": "Hello, World",
                "published_at": "2024-05-01T08:30:00Z",
                "read_time": 3.4,
                "excerpt": "First post",
                "body": "# Hello\n\nIt works.",
                "prev_post": "",
                "next_post": "second-post",
            }
        }));

        let detail = block_on(fetch_post(&cms, "hello-world")).unwrap();

        assert_eq!(detail.post.title, "Hello, World");
        assert_eq!(detail.post.read_time, 3);
        assert_eq!(detail.body, "# Hello\n\nIt works.");
        assert_eq!(detail.prev_post, None);
        assert_eq!(detail.next_post.as_deref(), Some("second-post"));
        assert_eq!(
            cms.variables.borrow()[0],
            json!({"relativePath": "hello-world.md"})
        );
    }

    #[test]
    fn rich_text_post() {
        let cms = FakeCms::answering(json!({
            "post": {
                "_sys": {"filename": "hello-world"},
                "title": "Hello, World",
                "published_at": "2024-05-01",
                "read_time": 2,
                "excerpt": "",
                "body": {
                    "type": "root",
                    "children": [
                        {"type": "h1", "children": [{"type": "text", "text": "Hello there"}]},
                        {"type": "p", "children": [{"type": "text", "text": "It works."}]},
                    ]
                },
                "prev_post": null,
                "next_post": null,
            }
        }));

        let detail = block_on(fetch_post(&cms, "hello-world")).unwrap();

        assert_eq!(detail.body, "# Hello there\n\nIt works.\n");
    }

    #[test]
    fn numeric_body_is_malformed() {
        let cms = FakeCms::answering(json!({
            "post": {"_sys": {"filename": "odd"}, "title": "Odd", "body": 7}
        }));

        assert_eq!(block_on(fetch_post(&cms, "odd")), None);
    }

    #[test]
    fn missing_post_is_none() {
        let cms = FakeCms::answering(json!({"post": null}));
        assert_eq!(block_on(fetch_post(&cms, "nope")), None);
    }

    #[test]
    fn dates() {
        assert_eq!(parse_published_at(""), None);
        assert_eq!(parse_published_at("not a date"), None);
        assert_eq!(
            parse_published_at("2024-01-02").map(|dt| dt.to_rfc3339()),
            Some(String::from("2024-01-02T00:00:00+00:00"))
        );
    }

    #[test]
    fn neighbours() {
        let posts: Vec<BlogPost> = ["a", "b", "c"]
            .iter()
            .map(|slug| BlogPost {
                slug: slug.to_string(),
                title: slug.to_uppercase(),
                published_at: None,
                read_time: 0,
                excerpt: String::new(),
            })
            .collect();

        let (prev, next) = adjacent_posts(&posts, "a");
        assert_eq!((prev, next.map(|p| p.slug.as_str())), (None, Some("b")));

        let (prev, next) = adjacent_posts(&posts, "c");
        assert_eq!((prev.map(|p| p.slug.as_str()), next), (Some("b"), None));

        assert_eq!(adjacent_posts(&posts, "zzz"), (None, None));
    }

    fn listed(slug: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_owned(),
            title: slug.to_uppercase(),
            published_at: None,
            read_time: 1,
            excerpt: String::new(),
        }
    }

    fn detail(slug: &str, prev: Option<&str>, next: Option<&str>) -> BlogPostDetail {
        BlogPostDetail {
            post: listed(slug),
            body: String::new(),
            prev_post: prev.map(str::to_owned),
            next_post: next.map(str::to_owned),
        }
    }

    #[test]
    fn neighbours_from_listing() {
        let posts = vec![listed("a"), listed("b"), listed("c")];

        let (newer, older) = post_neighbours(&detail("b", None, None), &posts);

        assert_eq!(newer.map(|l| l.slug).as_deref(), Some("a"));
        assert_eq!(older.map(|l| l.title).as_deref(), Some("C"));
    }

    #[test]
    fn cms_neighbours_win() {
        let posts = vec![listed("a"), listed("b"), listed("c")];

        let (newer, older) = post_neighbours(&detail("b", Some("c"), Some("gone")), &posts);

        assert_eq!(newer.map(|l| l.title).as_deref(), Some("C"));
        // unknown slugs keep the slug as the title
        assert_eq!(older.map(|l| l.title).as_deref(), Some("gone"));
    }

    #[test]
    fn neighbours_of_unlisted_post() {
        let (newer, older) = post_neighbours(&detail("solo", None, None), &[]);
        assert_eq!((newer, older), (None, None));
    }
}
