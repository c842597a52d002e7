//! Output filename resolution

use crate::constants::{DEFAULT_FILENAME_PREFIX, PDF_EXTENSION};
use chrono::NaiveDate;

/// Resolve the output filename for a conversion made on `today`.
///
/// A missing or blank name becomes `converted_images_<YYYY-MM-DD>.pdf`.
/// Otherwise `.pdf` is appended unless the name already ends with it, in any
/// letter case.
pub fn resolve_filename(name: Option<&str>, today: NaiveDate) -> String {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        None => default_filename(today),
        Some(name) if name.to_ascii_lowercase().ends_with(PDF_EXTENSION) => name.to_string(),
        Some(name) => format!("{}{}", name, PDF_EXTENSION),
    }
}

/// Same as [`resolve_filename`] using the local date
pub fn resolve_filename_now(name: Option<&str>) -> String {
    resolve_filename(name, chrono::Local::now().date_naive())
}

pub fn default_filename(today: NaiveDate) -> String {
    format!(
        "{}{}{}",
        DEFAULT_FILENAME_PREFIX,
        today.format("%Y-%m-%d"),
        PDF_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_blank_name_uses_date() {
        assert_eq!(resolve_filename(None, day()), "converted_images_2024-03-09.pdf");
        assert_eq!(resolve_filename(Some(""), day()), "converted_images_2024-03-09.pdf");
        assert_eq!(resolve_filename(Some("  "), day()), "converted_images_2024-03-09.pdf");
    }

    #[test]
    fn test_extension_appended_once() {
        assert_eq!(resolve_filename(Some("photo"), day()), "photo.pdf");
        assert_eq!(resolve_filename(Some("photo.pdf"), day()), "photo.pdf");
        assert_eq!(resolve_filename(Some("Photo.PDF"), day()), "Photo.PDF");
        assert_eq!(resolve_filename(Some("scan.pdf.bak"), day()), "scan.pdf.bak.pdf");
    }
}
