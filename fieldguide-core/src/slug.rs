//! Slug derivation: file path addressing and heading anchor ids.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Category assigned to documents living directly under the content root
pub const DEFAULT_CATEGORY: &str = "general";

/// Derive a document's public address from its on-disk path.
///
/// The slug is the path relative to `root` with the markdown extension
/// stripped and separators normalized to forward slashes, so the same
/// file yields the same slug on every platform.
///
/// # Examples
///
/// ```
/// use fieldguide_core::slug::slug_from_path;
/// use std::path::Path;
///
/// let root = Path::new("/content");
/// assert_eq!(
///     slug_from_path(root, Path::new("/content/design-principle/solid.md")),
///     "design-principle/solid"
/// );
/// ```
pub fn slug_from_path(root: &Path, file_path: &Path) -> String {
    let relative = file_path.strip_prefix(root).unwrap_or(file_path);

    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(last) = segments.last_mut() {
        for ext in [".md", ".markdown"] {
            if let Some(stem) = strip_suffix_ignore_case(last, ext) {
                *last = stem;
                break;
            }
        }
    }

    segments.join("/")
}

fn strip_suffix_ignore_case(name: &str, suffix: &str) -> Option<String> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (stem, tail) = name.split_at(split);
    if tail.eq_ignore_ascii_case(suffix) {
        Some(stem.to_string())
    } else {
        None
    }
}

/// Coarse grouping key: the substring before the first separator,
/// or [`DEFAULT_CATEGORY`] for slugs with no separator.
pub fn category_from_slug(slug: &str) -> &str {
    match slug.split_once('/') {
        Some((category, _)) => category,
        None => DEFAULT_CATEGORY,
    }
}

static HYPHEN_RUN: OnceLock<Regex> = OnceLock::new();

/// Convert heading text to a URL-safe anchor id.
///
/// Rules: lowercase, whitespace and underscores become hyphens, ASCII
/// punctuation is dropped, unicode alphabetics are kept, hyphen runs
/// collapse, leading/trailing hyphens are trimmed.
pub fn slugify(input: &str) -> String {
    let lowercased = input.to_lowercase();

    let cleaned = lowercased
        .graphemes(true)
        .filter_map(|g| match g {
            " " | "_" | "\t" | "\n" => Some("-"),
            _ => {
                let c = g.chars().next()?;
                if c.is_ascii_alphanumeric() || c == '-' || c.is_alphabetic() {
                    Some(g)
                } else {
                    None
                }
            }
        })
        .collect::<String>();

    let re = HYPHEN_RUN.get_or_init(|| Regex::new(r"-+").unwrap());
    re.replace_all(&cleaned, "-").trim_matches('-').to_string()
}
