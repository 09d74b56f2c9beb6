use crate::page_order::{check_page_bounds, parse_selector, SortPreset};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Pseudo-preset that routes a page selector through the grammar parser
/// instead of a named policy.
const CUSTOM_PAGE_ORDER: &str = "CUSTOM_PAGE_ORDER";

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    preset: &str,
    pages: Option<&str>,
    output: Q,
) -> Result<()> {
    let doc = PdfDocument::open(&input)?;
    let total_pages = doc.page_count();

    let normalized = preset.trim().to_ascii_uppercase().replace('-', "_");
    let page_list = if normalized == CUSTOM_PAGE_ORDER {
        let selector = pages.context("CUSTOM_PAGE_ORDER needs a page selector (--pages)")?;
        parse_selector(selector, total_pages)?
    } else {
        let preset: SortPreset = preset.parse()?;
        preset.page_order(total_pages)
    };
    debug!(
        "preset {} ordered {} page(s) of {}",
        preset,
        page_list.len(),
        total_pages
    );

    check_page_bounds(&page_list, total_pages)?;

    let mut new_doc = doc.copy_pages(&page_list)?;
    PdfDocument::save(&mut new_doc, &output)?;

    println!(
        "Wrote {} page(s) in {} order to {}",
        page_list.len(),
        normalized,
        output.as_ref().display()
    );

    Ok(())
}
