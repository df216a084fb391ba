//! URL sanitization
//!
//! Every href placed in the tree goes through a [`UrlSanitizer`]. A rejected
//! URL is reported as `None`; callers drop the link instead of failing.

use regex::Regex;
use std::sync::LazyLock;

/// Neutralizes unsafe URLs
pub trait UrlSanitizer: Send + Sync {
    /// Returns the URL to emit, or `None` when it must not be linked
    fn sanitize(&self, url: &str) -> Option<String>;
}

static INVALID_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([^\w]*)(javascript|data|vbscript)").expect("invalid protocol pattern")
});

static HTML_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(\w+)(;?)").expect("entity pattern"));

static HTML_CTRL_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&(newline|tab);").expect("control entity pattern"));

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[^:]+):").expect("scheme pattern"));

/// Rejects `javascript:`, `data:` and `vbscript:` URLs
///
/// Control characters, invisible characters and numeric HTML entities are
/// removed or decoded before the scheme is inspected, so obfuscated variants
/// such as `jav&#x09;ascript:` are caught too.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemeSanitizer;

impl SchemeSanitizer {
    fn decode_entities(url: &str) -> String {
        let decoded = HTML_ENTITY.replace_all(url, |caps: &regex::Captures<'_>| {
            let code = &caps[1];
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => code.parse::<u32>().ok(),
            };
            value
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        });
        HTML_CTRL_ENTITY.replace_all(&decoded, "").into_owned()
    }

    fn strip_invisible(url: &str) -> String {
        url.chars()
            .filter(|c| {
                !c.is_control()
                    && !matches!(*c, '\u{200B}'..='\u{200D}' | '\u{FEFF}' | '\u{7F}'..='\u{9F}')
            })
            .collect()
    }
}

impl UrlSanitizer for SchemeSanitizer {
    fn sanitize(&self, url: &str) -> Option<String> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return None;
        }

        let cleaned = Self::strip_invisible(&Self::decode_entities(trimmed));
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }

        if cleaned.starts_with(['.', '/', '#', '?']) {
            return Some(cleaned.to_string());
        }

        if !URL_SCHEME.is_match(cleaned) {
            return Some(cleaned.to_string());
        }

        let scheme_end = cleaned.find(':').unwrap_or(cleaned.len());
        if INVALID_PROTOCOL.is_match(&cleaned[..scheme_end]) {
            return None;
        }

        Some(cleaned.to_string())
    }
}
