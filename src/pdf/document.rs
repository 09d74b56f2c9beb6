use anyhow::{Context, Result};
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
    #[allow(dead_code)]
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc =
            Document::load(&path).with_context(|| format!("Failed to open PDF: {}", path_str))?;
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Page object IDs in document order.
    fn page_ids(&self) -> Vec<ObjectId> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages.into_iter().map(|(_, id)| id).collect()
    }

    /// Build a new document whose pages are `indices` (zero-based), in that
    /// order. Indices may repeat; every occurrence becomes its own page
    /// object, so the same source page can appear several times.
    ///
    /// The page tree is rebuilt flat under the root Pages node; inherited
    /// attributes on intermediate nodes are not merged down.
    pub fn copy_pages(&self, indices: &[u32]) -> Result<Document> {
        let mut new_doc = self.doc.clone();
        let page_ids = self.page_ids();

        let pages_root = {
            let catalog = new_doc.catalog()?;
            match catalog.get(b"Pages") {
                Ok(Object::Reference(id)) => *id,
                _ => anyhow::bail!("PDF has no page tree root"),
            }
        };

        let mut kids = Vec::with_capacity(indices.len());
        for &index in indices {
            let page_id = page_ids
                .get(index as usize)
                .copied()
                .with_context(|| format!("Page index {} out of range", index))?;

            let page_obj = new_doc
                .get_object(page_id)
                .with_context(|| format!("Failed to read page object {:?}", page_id))?
                .clone();
            let Object::Dictionary(mut page_dict) = page_obj else {
                anyhow::bail!("Page object {:?} is not a dictionary", page_id);
            };
            page_dict.set("Parent", Object::Reference(pages_root));

            // A fresh ID per occurrence keeps repeated indices distinct.
            let new_id = (new_doc.max_id + 1, 0);
            new_doc.max_id += 1;
            new_doc.objects.insert(new_id, Object::Dictionary(page_dict));
            kids.push(Object::Reference(new_id));
        }

        let count = kids.len() as i64;
        let pages_dict = new_doc
            .get_dictionary_mut(pages_root)
            .context("Failed to access page tree root")?;
        pages_dict.set("Kids", Object::Array(kids));
        pages_dict.set("Count", Object::Integer(count));

        // Drop the original page objects, now unreferenced.
        new_doc.prune_objects();

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}
