//! Page tree splicing.
//!
//! Appending a document grafts its whole page tree under the base document's
//! root `Pages` node instead of re-parenting individual pages, so attributes
//! the appended pages inherit (MediaBox, Resources, Rotate) stay in effect.

use lopdf::{Document, Object, ObjectId};

use crate::error::{MergerError, Result};

/// Splices page trees of loaded documents together.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSplicer;

impl PageSplicer {
    /// Create a new page splicer.
    pub fn new() -> Self {
        Self
    }

    /// Check that `doc` has a catalog with a usable root `Pages` node.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::MergeFailed`] describing the broken part.
    pub fn check_page_tree(&self, doc: &Document) -> Result<ObjectId> {
        let root_id = root_pages_id(doc)?;
        let root = doc
            .get_dictionary(root_id)
            .map_err(|e| MergerError::merge_failed(format!("Pages object is not a dictionary: {e}")))?;

        root.get(b"Kids")
            .and_then(Object::as_array)
            .map_err(|_| MergerError::merge_failed("Pages dictionary missing Kids array"))?;

        Ok(root_id)
    }

    /// Append every page of `appended` after the pages of `base`.
    ///
    /// `appended` is renumbered above `base.max_id` and all its objects move
    /// into `base`. Its catalog and trailer become unreachable and are left
    /// for [`Document::prune_objects`] to collect. On error `base` is left
    /// untouched.
    ///
    /// Returns the number of pages added.
    ///
    /// # Errors
    ///
    /// Returns [`MergerError::MergeFailed`] if either page tree is malformed.
    pub fn append(&self, base: &mut Document, mut appended: Document) -> Result<usize> {
        let base_root = self.check_page_tree(base)?;
        let base_pages = base.get_pages().len();

        let added_pages = appended.get_pages().len();
        if added_pages == 0 {
            return Ok(0);
        }

        appended.renumber_objects_with(base.max_id + 1);
        let appended_root = root_pages_id(&appended)?;
        appended
            .get_dictionary(appended_root)
            .map_err(|e| MergerError::merge_failed(format!("Pages object is not a dictionary: {e}")))?;

        base.max_id = base.max_id.max(appended.max_id);
        base.objects.extend(appended.objects);

        base.get_object_mut(appended_root)
            .and_then(Object::as_dict_mut)?
            .set("Parent", base_root);

        let root = base.get_object_mut(base_root).and_then(Object::as_dict_mut)?;
        root.get_mut(b"Kids")
            .and_then(Object::as_array_mut)?
            .push(Object::Reference(appended_root));
        root.set("Count", (base_pages + added_pages) as i64);

        Ok(added_pages)
    }

    /// Get the number of pages in a document.
    pub fn page_count(&self, doc: &Document) -> usize {
        doc.get_pages().len()
    }
}

fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let catalog = doc
        .catalog()
        .map_err(|e| MergerError::merge_failed(format!("Failed to get catalog: {e}")))?;

    catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| MergerError::merge_failed(format!("Failed to get pages reference: {e}")))
}
