//! Path normalization and route-pattern compilation.
//!
//! Every path entering the router goes through [`normalize`] so that
//! `a`, `/a` and `/a/` all name the same route. Parameterized templates
//! like `/chat/:user` compile to anchored regexes where each `:name`
//! matches exactly one path segment.

use regex::Regex;
use snafu::prelude::*;

use crate::error::{MalformedFragmentSnafu, PatternSnafu, Result};

/// Normalize a path to `/` or `/segment[/segment...]`.
///
/// Strips leading and trailing slashes and re-adds a single leading
/// slash; `""` and `"/"` both normalize to `/`. Idempotent.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Parse a raw location fragment into a normalized path.
///
/// `""` and `"#"` mean the root. Anything else must carry the leading
/// `#`; a fragment without one was not produced by navigation and is
/// rejected as malformed.
pub fn parse_fragment(fragment: &str) -> Result<String> {
    if fragment.is_empty() || fragment == "#" {
        return Ok("/".to_string());
    }
    let rest = fragment
        .strip_prefix('#')
        .context(MalformedFragmentSnafu { fragment })?;
    Ok(normalize(rest))
}

/// The path as the user requested it, before normalization. Used in
/// not-found output.
pub fn requested_path(fragment: &str) -> String {
    let rest = fragment.strip_prefix('#').unwrap_or(fragment);
    if rest.is_empty() {
        "/".to_string()
    } else {
        rest.to_string()
    }
}

/// Fragment a navigation to `path` writes into the location.
///
/// The root maps to the empty fragment rather than `#/`.
pub fn fragment_for(path: &str) -> String {
    let normalized = normalize(path);
    if normalized == "/" {
        String::new()
    } else {
        format!("#{normalized}")
    }
}

/// A compiled parameterized route template.
///
/// Each `:name` segment becomes a capture group matching one segment
/// (no `/`); literal segments are matched verbatim. The whole pattern is
/// anchored, so `/chat/:user` does not match `/chat/42/extra`.
#[derive(Debug)]
pub struct ParamPattern {
    template: String,
    params: Vec<String>,
    regex: Regex,
}

impl ParamPattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        let template = normalize(pattern);
        let mut source = String::from("^");
        let mut params = Vec::new();
        for segment in template[1..].split('/') {
            source.push('/');
            match segment.strip_prefix(':') {
                Some(name) => {
                    params.push(name.to_string());
                    source.push_str("([^/]+)");
                }
                None => source.push_str(&regex::escape(segment)),
            }
        }
        source.push('$');
        let regex = Regex::new(&source).context(PatternSnafu { pattern })?;
        Ok(Self {
            template,
            params,
            regex,
        })
    }

    /// The normalized template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in order of appearance.
    pub fn param_names(&self) -> &[String] {
        &self.params
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Captured segments for `path`, in template order, or `None` if the
    /// path does not match.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        self.regex.captures(path).map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect()
        })
    }
}
