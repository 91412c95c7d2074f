//! Page tree helpers over a loaded `lopdf` document.

use std::collections::BTreeSet;
use std::path::Path;

use lopdf::Document;

use crate::error::{PdfInternalError, PdfResult};

/// Load the document at `path`, distinguishing a missing file from a bad one.
pub fn load(path: &Path) -> PdfResult<Document> {
    if !path.exists() {
        return Err(PdfInternalError::FileNotFound(path.display().to_string()));
    }
    Ok(Document::load(path)?)
}

pub fn page_count(doc: &Document) -> u32 {
    u32::try_from(doc.get_pages().len()).unwrap_or(u32::MAX)
}

/// Drop every page not listed in `keep`, then tidy the object table.
///
/// Fails before touching the document if any requested page does not exist.
/// `delete_pages` keeps `/Count` on every page tree node in step.
pub fn retain_pages(doc: &mut Document, keep: &[u32]) -> PdfResult<()> {
    if keep.is_empty() {
        return Err(PdfInternalError::EmptySelection);
    }

    let count = page_count(doc);
    if let Some(&page) = keep.iter().find(|&&page| page == 0 || page > count) {
        return Err(PdfInternalError::PageOutOfRange { page, count });
    }

    let keep: BTreeSet<u32> = keep.iter().copied().collect();
    let doomed: Vec<u32> = (1..=count).filter(|page| !keep.contains(page)).collect();
    if !doomed.is_empty() {
        doc.delete_pages(&doomed);
    }

    doc.prune_objects();
    doc.renumber_objects();
    doc.compress();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_document;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(&build_document(4)), 4);
        assert_eq!(page_count(&build_document(0)), 0);
    }

    #[test]
    fn test_retain_pages_keeps_selection() {
        let mut doc = build_document(5);
        retain_pages(&mut doc, &[2, 4]).unwrap();
        assert_eq!(page_count(&doc), 2);
    }

    #[test]
    fn test_retained_document_reports_remaining_count() {
        let mut doc = build_document(3);
        retain_pages(&mut doc, &[1]).unwrap();
        let pages_id = doc
            .catalog()
            .unwrap()
            .get(b"Pages")
            .unwrap()
            .as_reference()
            .unwrap();
        let count = doc
            .get_object(pages_id)
            .unwrap()
            .as_dict()
            .unwrap()
            .get(b"Count")
            .unwrap()
            .as_i64()
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_retain_all_pages_is_a_no_op() {
        let mut doc = build_document(2);
        retain_pages(&mut doc, &[1, 2, 2]).unwrap();
        assert_eq!(page_count(&doc), 2);
    }

    #[test]
    fn test_retain_pages_rejects_out_of_range() {
        let mut doc = build_document(2);
        let err = retain_pages(&mut doc, &[1, 3]).unwrap_err();
        assert!(matches!(
            err,
            PdfInternalError::PageOutOfRange { page: 3, count: 2 }
        ));
        assert_eq!(page_count(&doc), 2);
    }

    #[test]
    fn test_retain_pages_rejects_empty_selection() {
        let mut doc = build_document(2);
        assert!(matches!(
            retain_pages(&mut doc, &[]),
            Err(PdfInternalError::EmptySelection)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/dir/missing.pdf")).unwrap_err();
        assert!(matches!(err, PdfInternalError::FileNotFound(_)));
    }
}
