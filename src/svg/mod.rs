//! SVG document access.
//!
//! The renderer only needs a handful of DOM operations: find an element by
//! id, read and write attributes, deep-clone a node, and append or remove
//! children. [`MapDocument`] names that capability set; [`SvgDocument`] is the
//! in-memory implementation parsed from and serialized back to SVG text.

pub mod document;

use std::path::PathBuf;

pub use document::{NodeId, SvgDocument};

/// Errors that can occur while reading or writing an SVG document.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("failed to write XML: {0}")]
    Write(#[from] quick_xml::Error),

    #[error("closing tag '{0}' does not match any open element")]
    UnbalancedTag(String),

    #[error("element '{0}' is never closed")]
    UnclosedTag(String),

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("root element is '{0}', expected 'svg'")]
    NotSvg(String),

    #[error("serialized document is not valid UTF-8")]
    Encoding,
}

/// The DOM-like operations the renderer performs on a map document.
pub trait MapDocument {
    /// Handle to a node in the document.
    type Node: Copy + Eq + std::fmt::Debug;

    /// Finds the first attached element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Sets an attribute, replacing any previous value.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Copies a node and its whole subtree. The copy is detached.
    fn deep_clone(&mut self, node: Self::Node) -> Self::Node;

    /// Appends a node as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Removes `child` and its subtree from `parent`. Returns false if it
    /// was not a child. Handles into the removed subtree must not be used
    /// afterwards; implementations may recycle them.
    fn remove_child(&mut self, parent: Self::Node, child: Self::Node) -> bool;

    /// Lists the element children of a node in document order.
    fn child_elements(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Finds the first descendant element with the given tag name.
    fn find_descendant(&self, node: Self::Node, tag: &str) -> Option<Self::Node>;

    /// Creates a detached, empty element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Replaces all children of an element with a single text node.
    fn set_text(&mut self, node: Self::Node, text: &str);
}
