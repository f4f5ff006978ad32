//! Markdown rendering: HTML conversion, TOC extraction, reading time.

use crate::frontmatter::{parse_frontmatter, FrontmatterError};
use crate::models::{Frontmatter, TocNode};
use crate::slug::slugify;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Words per minute used for the reading time estimate
const READING_WPM: usize = 200;

/// Everything extracted from one raw markdown file in a single pass
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Rendered HTML body
    pub html: String,

    /// Parsed frontmatter (default when the file has none)
    pub frontmatter: Frontmatter,

    /// Heading tree; headings nest under the nearest preceding heading
    /// of lower level, equal levels stay siblings
    pub toc: Vec<TocNode>,

    /// Estimated reading time in minutes, always >= 1
    pub reading_time: u32,

    /// Markdown body with the frontmatter fence removed
    pub body: String,
}

#[derive(Debug, Clone)]
struct HeadingRef {
    level: u32,
    title: String,
    id: String,
}

/// Markdown renderer, a pure function of the raw text
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self { options }
    }

    /// Render one document: split frontmatter, convert the body to HTML
    /// with anchor ids on headings, and derive the TOC and reading time.
    pub fn render(&self, raw: &str) -> Result<RenderedDocument, RenderError> {
        let (frontmatter, body) = parse_frontmatter(raw)?;

        let parser = Parser::new_ext(&body, self.options);
        let events: Vec<Event> = parser.collect();

        let headings = collect_headings(&events);
        let reading_time = estimate_reading_time(&events);

        // Inject heading ids so TOC anchors match the HTML
        let events = attach_heading_ids(events, &headings);

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        let toc = build_toc_tree(&headings);

        Ok(RenderedDocument {
            html: html_output,
            frontmatter,
            toc,
            reading_time,
            body,
        })
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_headings(events: &[Event]) -> Vec<HeadingRef> {
    let mut headings = Vec::new();
    let mut current: Option<(u32, String, Option<String>)> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let explicit = id.as_ref().map(|s| s.to_string());
                current = Some((*level as u32, String::new(), explicit));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_level, ref mut title, _)) = current {
                    title.push_str(text.as_ref());
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title, explicit)) = current.take() {
                    // An author-supplied id wins over the slugified title
                    let id = explicit.unwrap_or_else(|| slugify(&title));
                    headings.push(HeadingRef { level, title, id });
                }
            }
            _ => {}
        }
    }

    headings
}

fn attach_heading_ids<'a>(mut events: Vec<Event<'a>>, headings: &[HeadingRef]) -> Vec<Event<'a>> {
    let mut heading_iter = headings.iter();
    let mut result = Vec::with_capacity(events.len());

    for event in events.drain(..) {
        match event {
            Event::Start(Tag::Heading {
                level,
                mut id,
                classes,
                attrs,
            }) => {
                let next = heading_iter.next();
                if id.is_none() {
                    if let Some(heading) = next {
                        id = Some(CowStr::Boxed(heading.id.clone().into_boxed_str()));
                    }
                }
                result.push(Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }));
            }
            _ => result.push(event),
        }
    }

    result
}

/// Fold the flat heading list into the nesting tree.
///
/// A heading becomes a child of the nearest preceding heading with a
/// strictly lower level; equal levels close the current branch.
fn build_toc_tree(headings: &[HeadingRef]) -> Vec<TocNode> {
    let mut roots: Vec<TocNode> = Vec::new();
    let mut stack: Vec<TocNode> = Vec::new();

    for heading in headings {
        let node = TocNode {
            id: heading.id.clone(),
            title: heading.title.clone(),
            level: heading.level,
            children: Vec::new(),
        };

        while stack
            .last()
            .map_or(false, |open| open.level >= node.level)
        {
            let closed = stack.pop().unwrap();
            match stack.last_mut() {
                Some(parent) => parent.children.push(closed),
                None => roots.push(closed),
            }
        }

        stack.push(node);
    }

    while let Some(closed) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(closed),
            None => roots.push(closed),
        }
    }

    roots
}

fn estimate_reading_time(events: &[Event]) -> u32 {
    let words: usize = events
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) | Event::Code(text) => {
                Some(text.split_whitespace().count())
            }
            _ => None,
        })
        .sum();

    words.div_ceil(READING_WPM).max(1) as u32
}
