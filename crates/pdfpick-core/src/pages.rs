//! Page range parsing.
//!
//! A range string is a comma-separated list of segments. Each segment is
//! either a single page (`7`) or an inclusive span (`3-5`). Pages are
//! 1-based and kept in the order written; duplicates are not removed.

use thiserror::Error;

/// Upper bound on the number of pages one range string may select.
pub const MAX_SELECTED_PAGES: usize = 10_000;

/// Errors produced by [`parse_page_range`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    /// A span segment did not have exactly one `-`.
    #[error("Invalid page range: {0}")]
    InvalidRange(String),

    /// The start of a span was not a page number.
    #[error("Invalid start page: {0}")]
    InvalidStart(String),

    /// The end of a span was not a page number.
    #[error("Invalid end page: {0}")]
    InvalidEnd(String),

    /// A single-page segment was not a page number.
    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    /// The range selected no pages at all.
    #[error("Page range selects no pages: {0}")]
    Empty(String),

    /// The range selects more than [`MAX_SELECTED_PAGES`] pages.
    #[error("Page range selects too many pages (limit {MAX_SELECTED_PAGES}): {0}")]
    TooLarge(String),
}

/// Pages chosen by a range string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    pages: Vec<u32>,
    contiguous: bool,
}

impl PageSelection {
    /// Selected pages in the order they were written.
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// True when every segment was a span, so the pages go to one output file.
    pub const fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    pub fn first(&self) -> u32 {
        self.pages[0]
    }

    pub fn last(&self) -> u32 {
        self.pages[self.pages.len() - 1]
    }
}

/// Parse a page range such as `1-3,7,9-10`.
///
/// # Examples
///
/// ```rust
/// use pdfpick_core::parse_page_range;
///
/// let selection = parse_page_range("2-4").unwrap();
/// assert_eq!(selection.pages(), &[2, 3, 4]);
/// assert!(selection.is_contiguous());
///
/// let selection = parse_page_range("1,5").unwrap();
/// assert!(!selection.is_contiguous());
/// ```
pub fn parse_page_range(text: &str) -> Result<PageSelection, PageRangeError> {
    let mut pages = Vec::new();
    let mut contiguous = true;

    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.contains('-') {
            let bounds: Vec<&str> = segment.split('-').collect();
            let [start, end] = bounds.as_slice() else {
                return Err(PageRangeError::InvalidRange(segment.to_string()));
            };
            let start = parse_page(start)
                .ok_or_else(|| PageRangeError::InvalidStart((*start).to_string()))?;
            let end =
                parse_page(end).ok_or_else(|| PageRangeError::InvalidEnd((*end).to_string()))?;
            let span = end.checked_sub(start).map_or(0, |diff| {
                usize::try_from(diff)
                    .unwrap_or(usize::MAX)
                    .saturating_add(1)
            });
            if span > MAX_SELECTED_PAGES - pages.len() {
                return Err(PageRangeError::TooLarge(text.to_string()));
            }
            pages.extend(start..=end);
        } else {
            let page = parse_page(segment)
                .ok_or_else(|| PageRangeError::InvalidPage(segment.to_string()))?;
            if pages.len() >= MAX_SELECTED_PAGES {
                return Err(PageRangeError::TooLarge(text.to_string()));
            }
            pages.push(page);
            contiguous = false;
        }
    }

    if pages.is_empty() {
        return Err(PageRangeError::Empty(text.to_string()));
    }

    Ok(PageSelection { pages, contiguous })
}

fn parse_page(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|page| *page > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_span_is_contiguous() {
        let selection = parse_page_range("1-3").unwrap();
        assert_eq!(selection.pages(), &[1, 2, 3]);
        assert!(selection.is_contiguous());
        assert_eq!(selection.first(), 1);
        assert_eq!(selection.last(), 3);
    }

    #[test]
    fn test_mixed_segments_are_not_contiguous() {
        let selection = parse_page_range("1,3-4").unwrap();
        assert_eq!(selection.pages(), &[1, 3, 4]);
        assert!(!selection.is_contiguous());
    }

    #[test]
    fn test_multiple_spans_stay_contiguous() {
        let selection = parse_page_range("1-2, 5-6").unwrap();
        assert_eq!(selection.pages(), &[1, 2, 5, 6]);
        assert!(selection.is_contiguous());
        assert_eq!(selection.last(), 6);
    }

    #[test]
    fn test_single_page() {
        let selection = parse_page_range(" 4 ").unwrap();
        assert_eq!(selection.pages(), &[4]);
        assert!(!selection.is_contiguous());
    }

    #[test]
    fn test_too_many_dashes() {
        assert_eq!(
            parse_page_range("1-2-3"),
            Err(PageRangeError::InvalidRange("1-2-3".to_string()))
        );
    }

    #[test]
    fn test_bad_numbers() {
        assert_eq!(
            parse_page_range("a-3"),
            Err(PageRangeError::InvalidStart("a".to_string()))
        );
        assert_eq!(
            parse_page_range("1-b"),
            Err(PageRangeError::InvalidEnd("b".to_string()))
        );
        assert_eq!(
            parse_page_range("x"),
            Err(PageRangeError::InvalidPage("x".to_string()))
        );
        assert_eq!(
            parse_page_range(""),
            Err(PageRangeError::InvalidPage(String::new()))
        );
    }

    #[test]
    fn test_page_zero_rejected() {
        assert_eq!(
            parse_page_range("0"),
            Err(PageRangeError::InvalidPage("0".to_string()))
        );
        assert!(matches!(
            parse_page_range("0-2"),
            Err(PageRangeError::InvalidStart(_))
        ));
    }

    #[test]
    fn test_negative_page_is_a_bad_range() {
        assert!(matches!(
            parse_page_range("-1"),
            Err(PageRangeError::InvalidStart(_))
        ));
    }

    #[test]
    fn test_reversed_span_is_empty() {
        assert_eq!(
            parse_page_range("5-3"),
            Err(PageRangeError::Empty("5-3".to_string()))
        );
    }

    #[test]
    fn test_huge_span_rejected_without_allocating() {
        assert_eq!(
            parse_page_range("1-4294967295"),
            Err(PageRangeError::TooLarge("1-4294967295".to_string()))
        );
    }

    #[test]
    fn test_span_at_limit_is_allowed() {
        let selection = parse_page_range("1-10000").unwrap();
        assert_eq!(selection.pages().len(), MAX_SELECTED_PAGES);
    }

    #[test]
    fn test_span_just_over_limit_rejected() {
        assert!(matches!(
            parse_page_range("1-10001"),
            Err(PageRangeError::TooLarge(_))
        ));
    }

    #[test]
    fn test_limit_counts_across_segments() {
        assert!(matches!(
            parse_page_range("1-10000,1"),
            Err(PageRangeError::TooLarge(_))
        ));
        assert!(matches!(
            parse_page_range("1-6000,1-6000"),
            Err(PageRangeError::TooLarge(_))
        ));
    }

    #[test]
    fn test_reversed_span_with_other_pages_is_allowed() {
        let selection = parse_page_range("5-3,2").unwrap();
        assert_eq!(selection.pages(), &[2]);
    }
}
