use crate::page_order::{invert_selection, parse_selector};
use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &str, output: Q) -> Result<()> {
    let doc = PdfDocument::open(&input)?;
    let total_pages = doc.page_count();

    // Pages the selector names but the document lacks are no-ops: removal
    // is a set difference, not an extraction.
    let pages_to_remove = parse_selector(pages, total_pages)?;
    let page_list = invert_selection(&pages_to_remove, total_pages);
    debug!(
        "removing {} of {} page(s)",
        total_pages as usize - page_list.len(),
        total_pages
    );

    let mut new_doc = doc.copy_pages(&page_list)?;
    PdfDocument::save(&mut new_doc, &output)?;

    println!(
        "Removed {} page(s), kept {} in {}",
        total_pages as usize - page_list.len(),
        page_list.len(),
        output.as_ref().display()
    );

    Ok(())
}
