//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::content::{Slug, Tag};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Detail view URL for a document slug
///
/// Each slug segment is percent-encoded; the `/` between segments is kept.
pub fn document_url(config: &SiteConfig, slug: &Slug) -> String {
    let encoded = slug
        .segments()
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/");
    url_for(
        config,
        &format!("{}/{}", config.blog_dir.trim_matches('/'), encoded),
    )
}

/// Tag view URL for a tag as authored
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    Tag::new(tag, &config.root, &config.tag_dir).path
}

/// Slug addressed by a detail view URL or a bare slug
///
/// Accepts `/blog/a.mdx`, `https://host/blog/a.mdx` or `a.mdx`, percent-encoded or not.
pub fn slug_from_url(config: &SiteConfig, input: &str) -> String {
    let (path, is_url) = match input.split_once("://") {
        Some((_, rest)) => (rest.find('/').map(|i| &rest[i..]).unwrap_or("/"), true),
        None => (input, input.starts_with('/')),
    };
    // `?` and `#` only start a query or fragment in a URL; a bare slug keeps them
    let path = if is_url {
        path.split(['?', '#']).next().unwrap_or(path)
    } else {
        path
    };
    let decoded = percent_decode_str(path).decode_utf8_lossy();

    let prefix = url_for(config, &format!("{}/", config.blog_dir.trim_matches('/')));
    let slug = decoded
        .strip_prefix(prefix.as_str())
        .unwrap_or(&decoded[..]);
    slug.trim_matches('/').to_string()
}

/// Encode one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
