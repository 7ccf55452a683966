//! HTML document parsing and element lookup
//!
//! Extractors navigate pages with a single primitive: tag name plus
//! attribute-equality filters. Lookups that must succeed return
//! `TagNotFound` so the caller decides whether to skip or abort.

use crate::{Result, ScraperError};
use scraper::{ElementRef, Html};

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML document; malformed markup is recovered, never rejected
    ///
    /// # Example
    ///
    /// ```
    /// use pydocs_scraper::session::{Document, TagQuery};
    ///
    /// let doc = Document::parse(r#"<html><body><h1>What's New</h1></body></html>"#);
    /// let h1 = doc.find(&TagQuery::new("h1")).unwrap();
    /// assert_eq!(pydocs_scraper::session::text(h1), "What's New");
    /// ```
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// The `<html>` element
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First element anywhere in the document matching `query`
    pub fn find(&self, query: &TagQuery<'_>) -> Result<ElementRef<'_>> {
        find(self.root(), query)
    }

    /// All elements in the document matching `query`, in document order
    pub fn find_all(&self, query: &TagQuery<'_>) -> Vec<ElementRef<'_>> {
        find_all(self.root(), query)
    }
}

/// Tag name plus attribute filters
///
/// A `class` filter with a single token matches any element carrying that
/// class; a multi-token filter must equal the whole class list.
#[derive(Debug, Clone)]
pub struct TagQuery<'a> {
    tag: &'a str,
    attrs: Vec<(&'a str, &'a str)>,
}

impl<'a> TagQuery<'a> {
    pub fn new(tag: &'a str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    /// Requires attribute `name` to equal `value`
    pub fn attr(mut self, name: &'a str, value: &'a str) -> Self {
        self.attrs.push((name, value));
        self
    }

    pub fn class(self, value: &'a str) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: &'a str) -> Self {
        self.attr("id", value)
    }

    /// Checks a single element against the query
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        if !value.name().eq_ignore_ascii_case(self.tag) {
            return false;
        }

        self.attrs.iter().all(|(name, expected)| match value.attr(name) {
            Some(actual) if *name == "class" => class_matches(actual, expected),
            Some(actual) => actual == *expected,
            None => false,
        })
    }

    fn not_found(&self) -> ScraperError {
        ScraperError::TagNotFound {
            tag: self.tag.to_string(),
            attrs: self.describe_attrs(),
        }
    }

    fn describe_attrs(&self) -> String {
        let pairs = self
            .attrs
            .iter()
            .map(|(name, value)| format!("{}={:?}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{}}}", pairs)
    }
}

fn class_matches(actual: &str, expected: &str) -> bool {
    let actual: Vec<&str> = actual.split_whitespace().collect();
    let expected: Vec<&str> = expected.split_whitespace().collect();

    match expected.as_slice() {
        [single] => actual.contains(single),
        _ => actual == expected,
    }
}

/// First descendant of `scope` matching `query`, in document order
pub fn find<'a>(scope: ElementRef<'a>, query: &TagQuery<'_>) -> Result<ElementRef<'a>> {
    descendants(scope)
        .find(|element| query.matches(element))
        .ok_or_else(|| query.not_found())
}

/// All descendants of `scope` matching `query`, in document order
pub fn find_all<'a>(scope: ElementRef<'a>, query: &TagQuery<'_>) -> Vec<ElementRef<'a>> {
    descendants(scope)
        .filter(|element| query.matches(element))
        .collect()
}

/// First direct child of `scope` matching `query`
pub fn find_child<'a>(scope: ElementRef<'a>, query: &TagQuery<'_>) -> Option<ElementRef<'a>> {
    scope
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| query.matches(element))
}

/// Concatenated text of the element and everything below it
pub fn text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Value of attribute `name`
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Result<&'a str> {
    element
        .value()
        .attr(name)
        .ok_or_else(|| ScraperError::MissingAttribute {
            tag: element.value().name().to_string(),
            attr: name.to_string(),
        })
}

fn descendants(scope: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    // `descendants` yields the scope itself first
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}
