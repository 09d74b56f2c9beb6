use std::fmt;
use std::str::FromStr;

use super::SelectError;

/// A named page-reordering policy.
///
/// Every preset is a pure function from a page count to the new page order,
/// total over `total_pages >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPreset {
    ReverseOrder,
    DuplexSort,
    BookletSort,
    SideStitchBookletSort,
    OddEvenSplit,
    RemoveFirst,
    RemoveLast,
    RemoveFirstAndLast,
}

impl SortPreset {
    pub const ALL: [SortPreset; 8] = [
        SortPreset::ReverseOrder,
        SortPreset::DuplexSort,
        SortPreset::BookletSort,
        SortPreset::SideStitchBookletSort,
        SortPreset::OddEvenSplit,
        SortPreset::RemoveFirst,
        SortPreset::RemoveLast,
        SortPreset::RemoveFirstAndLast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortPreset::ReverseOrder => "REVERSE_ORDER",
            SortPreset::DuplexSort => "DUPLEX_SORT",
            SortPreset::BookletSort => "BOOKLET_SORT",
            SortPreset::SideStitchBookletSort => "SIDE_STITCH_BOOKLET_SORT",
            SortPreset::OddEvenSplit => "ODD_EVEN_SPLIT",
            SortPreset::RemoveFirst => "REMOVE_FIRST",
            SortPreset::RemoveLast => "REMOVE_LAST",
            SortPreset::RemoveFirstAndLast => "REMOVE_FIRST_AND_LAST",
        }
    }

    /// Compute the new page order (zero-based) for a document with
    /// `total_pages` pages.
    pub fn page_order(&self, total_pages: u32) -> Vec<u32> {
        match self {
            SortPreset::ReverseOrder => (0..total_pages).rev().collect(),
            SortPreset::DuplexSort => duplex(total_pages),
            SortPreset::BookletSort => booklet(total_pages),
            SortPreset::SideStitchBookletSort => side_stitch_booklet(total_pages),
            SortPreset::OddEvenSplit => odd_even_split(total_pages),
            SortPreset::RemoveFirst => (1..total_pages).collect(),
            SortPreset::RemoveLast => (0..total_pages.saturating_sub(1)).collect(),
            SortPreset::RemoveFirstAndLast => (1..total_pages.saturating_sub(1)).collect(),
        }
    }
}

impl fmt::Display for SortPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortPreset {
    type Err = SelectError;

    /// Look up a preset by name. Case and `-`/`_` are normalized, so
    /// `reverse-order` finds `REVERSE_ORDER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase().replace('-', "_");
        SortPreset::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| SelectError::UnknownPreset(s.to_string()))
    }
}

/// Interleave the front half ascending with the back half descending,
/// front-biased on odd counts.
fn duplex(total_pages: u32) -> Vec<u32> {
    let mut order = Vec::with_capacity(total_pages as usize);
    let half = total_pages.div_ceil(2);
    for i in 1..=half {
        order.push(i - 1);
        if i <= total_pages - half {
            order.push(total_pages - i);
        }
    }
    order
}

/// Outer-to-inner signature imposition. On odd counts the middle page is
/// emitted once, after the pairs.
fn booklet(total_pages: u32) -> Vec<u32> {
    let mut order = Vec::with_capacity(total_pages as usize);
    for i in 0..total_pages / 2 {
        order.push(i);
        order.push(total_pages - i - 1);
    }
    if total_pages % 2 == 1 {
        order.push(total_pages / 2);
    }
    order
}

/// Groups of four sheet positions, reordered 4-1-2-3 within each group.
/// Positions past the end clamp to the last page, so a partial final group
/// repeats it.
fn side_stitch_booklet(total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let last = total_pages - 1;
    let mut order = Vec::with_capacity(total_pages.div_ceil(4) as usize * 4);
    for i in 0..total_pages.div_ceil(4) {
        let begin = i * 4;
        order.push((begin + 3).min(last));
        order.push(begin.min(last));
        order.push((begin + 1).min(last));
        order.push((begin + 2).min(last));
    }
    order
}

/// All odd one-based pages ascending, then all even ones.
fn odd_even_split(total_pages: u32) -> Vec<u32> {
    let odd = (1..=total_pages).step_by(2);
    let even = (2..=total_pages).step_by(2);
    odd.chain(even).map(|page| page - 1).collect()
}
