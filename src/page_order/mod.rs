mod selector;
mod sorter;

pub use selector::{parse_selector, SelectorToken};
pub use sorter::SortPreset;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("invalid page selector token: {0:?}")]
    InvalidSelector(String),
    #[error("unknown sort preset: {0:?}")]
    UnknownPreset(String),
    #[error("the document only has {total_pages} page(s) but page {page} was requested")]
    PageOutOfRange { page: u32, total_pages: u32 },
}

/// Verify that every index fits the document before handing the list to a
/// copy step. Reports the largest offender as a one-based page number.
pub fn check_page_bounds(indices: &[u32], total_pages: u32) -> Result<(), SelectError> {
    match indices.iter().max() {
        Some(&max) if max >= total_pages => Err(SelectError::PageOutOfRange {
            page: max + 1,
            total_pages,
        }),
        _ => Ok(()),
    }
}

/// Ascending complement of a removal set: every index in `0..total_pages`
/// not named in `pages_to_remove`. Duplicates and out-of-range entries in
/// the removal list have no effect.
pub fn invert_selection(pages_to_remove: &[u32], total_pages: u32) -> Vec<u32> {
    (0..total_pages)
        .filter(|index| !pages_to_remove.contains(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_selection() {
        assert_eq!(invert_selection(&[1, 3], 5), vec![0, 2, 4]);
    }

    #[test]
    fn test_invert_ignores_duplicates_and_order() {
        assert_eq!(invert_selection(&[3, 1, 1, 3], 5), vec![0, 2, 4]);
    }

    #[test]
    fn test_invert_ignores_out_of_range() {
        assert_eq!(invert_selection(&[7], 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_invert_of_nothing_keeps_everything() {
        assert_eq!(invert_selection(&[], 3), vec![0, 1, 2]);
        assert_eq!(invert_selection(&[], 0), Vec::<u32>::new());
    }

    #[test]
    fn test_bounds_ok() {
        assert_eq!(check_page_bounds(&[0, 9], 10), Ok(()));
        assert_eq!(check_page_bounds(&[], 0), Ok(()));
    }

    #[test]
    fn test_bounds_reports_one_based_page() {
        assert_eq!(
            check_page_bounds(&[14], 10),
            Err(SelectError::PageOutOfRange {
                page: 15,
                total_pages: 10
            })
        );
    }
}
