//! Output file naming.
//!
//! Extracted files are named after the source stem, made filesystem-safe.

/// Replace every char outside `[A-Za-z0-9_-]` and the CJK unified
/// ideograph block (U+4E00..=U+9FA5) with `_`.
///
/// ```rust
/// use pdfpick_core::naming::sanitize_stem;
///
/// assert_eq!(sanitize_stem("my report (v2)"), "my_report__v2_");
/// assert_eq!(sanitize_stem("年度报告.final"), "年度报告_final");
/// ```
pub fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '\u{4e00}'..='\u{9fa5}' => c,
            _ => '_',
        })
        .collect()
}

/// Name of the single file holding a contiguous selection.
///
/// `ext` includes its leading dot, or is empty.
pub fn range_output_name(stem: &str, first: u32, last: u32, ext: &str) -> String {
    format!("{}_p{first}-{last}{ext}", sanitize_stem(stem))
}

/// Name of the file holding one extracted page.
pub fn page_output_name(stem: &str, page: u32, ext: &str) -> String {
    format!("{}_page_{page}{ext}", sanitize_stem(stem))
}
