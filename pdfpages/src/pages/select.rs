//! Building new documents from a subset of another document's pages.
//!
//! Every write path (split, extract, merge) goes through [`PageSelector`].
//! Pages are picked by 1-based ordinal, in the order given. Inheritable
//! attributes are pushed down onto each kept page, and only the objects the
//! kept pages reference are copied into a fresh document under a flat page
//! tree. The source document is never cloned as a whole, so splitting stays
//! linear in the size of the document.

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::collections::BTreeSet;

use crate::error::{PdfPagesError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Page selector for carving documents out of other documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSelector;

impl PageSelector {
    /// Create a new page selector.
    pub fn new() -> Self {
        Self
    }

    /// Build a document holding only `ordinals` of `doc`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::PageTree`] if an ordinal is outside the
    /// document or the page tree is malformed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfpages::pages::PageSelector;
    /// # use lopdf::Document;
    /// # fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
    /// let first_two = PageSelector::new().select(&doc, &[1, 2])?;
    /// assert_eq!(first_two.get_pages().len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn select(&self, doc: &Document, ordinals: &[u32]) -> Result<Document> {
        let all_pages = doc.get_pages();
        let total = all_pages.len();

        let page_ids = ordinals
            .iter()
            .map(|ordinal| {
                all_pages.get(ordinal).copied().ok_or_else(|| {
                    PdfPagesError::page_tree(format!(
                        "page {ordinal} is out of range (document has {total} pages)"
                    ))
                })
            })
            .collect::<Result<Vec<ObjectId>>>()?;

        self.select_pages(doc, &page_ids)
    }

    /// Build a document holding the page objects `page_ids` of `doc`.
    ///
    /// Callers that select many times from one document look the page ids up
    /// once with [`Document::get_pages`] and call this directly.
    ///
    /// # Errors
    ///
    /// Returns [`PdfPagesError::PageTree`] if an id is not a page dictionary.
    pub fn select_pages(&self, doc: &Document, page_ids: &[ObjectId]) -> Result<Document> {
        let mut new_doc = Document::with_version(doc.version.clone());
        // Copied objects keep their ids; fresh ids start past the source's
        new_doc.max_id = doc.max_id;
        let pages_id = new_doc.new_object_id();

        let selected: BTreeSet<ObjectId> = page_ids.iter().copied().collect();
        let mut kids = Vec::with_capacity(page_ids.len());

        for &page_id in page_ids {
            let mut page = doc.get_dictionary(page_id).cloned().map_err(|e| {
                PdfPagesError::page_tree(format!("object {page_id:?} is not a page: {e}"))
            })?;
            for (key, value) in inherited_attributes(doc, &page) {
                page.set(key, value);
            }
            page.set("Parent", Object::Reference(pages_id));

            let links: Vec<Object> = page
                .iter()
                .filter(|(key, _)| key.as_slice() != b"Parent")
                .map(|(_, value)| value.clone())
                .collect();
            new_doc.objects.insert(page_id, Object::Dictionary(page));
            for value in &links {
                copy_references(&mut new_doc, doc, value, &selected);
            }

            kids.push(Object::Reference(page_id));
        }

        new_doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => page_ids.len() as i64,
                "Kids" => kids,
            }),
        );
        let catalog_id = new_doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        new_doc.trailer.set("Root", catalog_id);
        // Renumbering must not alias links to objects left behind
        null_dangling_references(&mut new_doc);
        new_doc.renumber_objects();

        Ok(new_doc)
    }
}

/// The object id of the catalog's `Pages` entry.
pub(crate) fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    doc.catalog()?
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| PdfPagesError::page_tree(format!("catalog has no page tree: {e}")))
}

/// Copy every object reachable from `obj` out of `source` into `target`.
///
/// Page tree nodes and pages outside `selected` are not followed, so a back
/// link (an annotation's `/P`, a structure element's `/Pg`) cannot drag the
/// rest of the document along.
fn copy_references(
    target: &mut Document,
    source: &Document,
    obj: &Object,
    selected: &BTreeSet<ObjectId>,
) {
    match obj {
        Object::Reference(id) => {
            if target.objects.contains_key(id) || selected.contains(id) {
                return;
            }
            let Ok(referenced) = source.get_object(*id) else {
                return;
            };
            if is_page_tree_node(referenced) {
                return;
            }
            target.objects.insert(*id, referenced.clone());
            copy_references(target, source, referenced, selected);
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                copy_references(target, source, value, selected);
            }
        }
        Object::Array(items) => {
            for item in items {
                copy_references(target, source, item, selected);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                copy_references(target, source, value, selected);
            }
        }
        _ => {}
    }
}

fn null_dangling_references(doc: &mut Document) {
    let present: BTreeSet<ObjectId> = doc.objects.keys().copied().collect();
    for obj in doc.objects.values_mut() {
        null_missing(obj, &present);
    }
}

fn null_missing(obj: &mut Object, present: &BTreeSet<ObjectId>) {
    match obj {
        Object::Reference(id) => {
            let id = *id;
            if !present.contains(&id) {
                *obj = Object::Null;
            }
        }
        Object::Array(items) => {
            for item in items.iter_mut() {
                null_missing(item, present);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter_mut() {
                null_missing(value, present);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter_mut() {
                null_missing(value, present);
            }
        }
        _ => {}
    }
}

fn is_page_tree_node(obj: &Object) -> bool {
    let Ok(dict) = obj.as_dict() else {
        return false;
    };
    matches!(dict.get(b"Type").and_then(Object::as_name), Ok(b"Page" | b"Pages"))
}

/// Attributes `page` inherits but does not define itself, nearest ancestor
/// first.
fn inherited_attributes(doc: &Document, page: &Dictionary) -> Vec<(Vec<u8>, Object)> {
    let mut missing: Vec<&[u8]> = INHERITABLE
        .into_iter()
        .filter(|key| !page.has(key))
        .collect();
    let mut found = Vec::new();
    let mut parent = parent_of(page);
    let mut depth = 0;

    while let Some(parent_id) = parent {
        // Guard against cyclic Parent links.
        depth += 1;
        if missing.is_empty() || depth > 64 {
            break;
        }
        let Ok(node) = doc.get_dictionary(parent_id) else {
            break;
        };
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = parent_of(node);
    }

    found
}

fn parent_of(dict: &Dictionary) -> Option<ObjectId> {
    dict.get(b"Parent").and_then(Object::as_reference).ok()
}
