use crate::page_order::{check_page_bounds, parse_selector};
use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &str, output: Q) -> Result<()> {
    let doc = PdfDocument::open(&input)?;
    let total_pages = doc.page_count();

    let page_list = parse_selector(pages, total_pages)?;
    debug!(
        "selector {:?} expanded to {} page(s) of {}",
        pages,
        page_list.len(),
        total_pages
    );

    if page_list.is_empty() {
        anyhow::bail!("Selector {:?} matches no pages", pages);
    }
    check_page_bounds(&page_list, total_pages)?;

    let mut new_doc = doc.copy_pages(&page_list)?;
    PdfDocument::save(&mut new_doc, &output)?;

    println!(
        "Selected {} page(s) to {}",
        page_list.len(),
        output.as_ref().display()
    );

    Ok(())
}
