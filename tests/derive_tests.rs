//! `#[derive(Proxy)]` usage tests
//!
//! Each document below expands a proxy module next to it; the tests drive the generated API the way a
//! lazy-loading mapper would.

use docproxy::{Proxy, ProxyInterface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Proxy)]
pub struct Article {
    pub title: String,
    pub published_at: Option<u64>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Proxy)]
pub struct Comment {
    #[proxy(getter = false)]
    pub body: String,
    #[proxy(skip)]
    pub rendered: Option<String>,
}

impl Comment {
    /// Hand-written accessor; the proxy must not redefine it.
    pub fn get_body(&self) -> &str {
        self.body.trim()
    }
}

#[derive(Debug, Clone, Proxy)]
#[proxy(module = "lazy_asset")]
pub struct Asset {
    pub r#type: String,
    #[proxy(setter = false)]
    pub checksum: u32,
}

#[derive(Debug, Default, Proxy)]
struct Draft {
    text: String,
}

#[derive(Debug, Proxy)]
pub struct Job {
    pub r#gen: u32,
}

pub mod catalog {
    use docproxy::Proxy;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Sku(pub u32);

    #[derive(Debug, Proxy)]
    pub struct Listing {
        pub tag: super::Tag,
        pub sku: self::Sku,
        pub related: Vec<super::Tag>,
    }
}

fn article() -> Article {
    Article {
        title: "Hello".to_string(),
        published_at: None,
        tags: vec![Tag {
            label: "rust".to_string(),
        }],
    }
}

fn ensure_loaded<P: ProxyInterface>(proxy: &mut P) -> bool {
    let was_loaded = proxy.is_initialized();
    if !was_loaded {
        proxy.set_initialized(true);
    }
    was_loaded
}

#[test]
fn test_proxy_starts_uninitialized() {
    let mut proxy = article_proxy::Article::new(article());
    assert!(!proxy.is_initialized());
    assert!(!ensure_loaded(&mut proxy));
    assert!(ensure_loaded(&mut proxy));
    proxy.set_initialized(false);
    assert!(!proxy.is_initialized());
}

#[test]
fn test_generated_accessors() {
    let mut proxy = article_proxy::Article::from(article());
    assert_eq!(proxy.get_title(), "Hello");
    proxy.set_title("World".to_string());
    proxy.set_published_at(Some(1_700_000_000));
    assert_eq!(proxy.get_published_at(), &Some(1_700_000_000));
    assert_eq!(proxy.get_tags()[0].label, "rust");

    let inner = proxy.into_inner();
    assert_eq!(inner.title, "World");
    assert_eq!(inner.published_at, Some(1_700_000_000));
}

#[test]
fn test_proxy_derefs_to_document() {
    let mut proxy = article_proxy::Article::new(article());
    proxy.title.push('!');
    assert_eq!(proxy.title, "Hello!");
    assert_eq!(*proxy, Article {
        title: "Hello!".to_string(),
        ..article()
    });
}

#[test]
fn test_existing_getter_wins() {
    let mut proxy = comment_proxy::Comment::new(Comment {
        body: "  padded  ".to_string(),
        rendered: None,
    });
    // Resolves to `Comment::get_body` through `Deref`.
    assert_eq!(proxy.get_body(), "padded");
    proxy.set_body("plain".to_string());
    assert_eq!(proxy.body, "plain");
}

#[test]
fn test_module_override_and_keyword_field() {
    let mut proxy = lazy_asset::Asset::new(Asset {
        r#type: "image/png".to_string(),
        checksum: 7,
    });
    assert_eq!(proxy.get_type(), "image/png");
    proxy.set_type("image/webp".to_string());
    assert_eq!(proxy.r#type, "image/webp");
    assert_eq!(*proxy.get_checksum(), 7);
}

#[test]
fn test_private_document() {
    let mut proxy = draft_proxy::Draft::new(Draft::default());
    proxy.set_text("draft".to_string());
    assert_eq!(proxy.get_text(), "draft");
    assert!(!proxy.is_initialized());
}

#[test]
fn test_reserved_keyword_field() {
    let mut proxy = job_proxy::Job::new(Job { r#gen: 1 });
    assert_eq!(*proxy.get_gen(), 1);
    proxy.set_gen(2);
    assert_eq!(proxy.r#gen, 2);
}

#[test]
fn test_module_relative_field_types() {
    let mut proxy = catalog::listing_proxy::Listing::new(catalog::Listing {
        tag: Tag {
            label: "sale".to_string(),
        },
        sku: catalog::Sku(42),
        related: Vec::new(),
    });
    assert_eq!(proxy.get_tag().label, "sale");
    assert_eq!(*proxy.get_sku(), catalog::Sku(42));
    proxy.set_related(vec![Tag {
        label: "new".to_string(),
    }]);
    assert_eq!(proxy.get_related().len(), 1);
}
