//! In-memory SVG tree.
//!
//! Nodes live in an arena indexed by [`NodeId`]. Lookups walk the tree from
//! the root, so detached nodes are invisible. Removed subtrees go on a free
//! list and their slots are handed out again by later inserts.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{MapDocument, SvgError};

/// Handle to a node inside an [`SvgDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeData {
    Element { name: String, attributes: Vec<(String, String)> },
    Text(String),
    CData(String),
    /// Raw (already escaped) comment body.
    Comment(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An SVG document held entirely in memory.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    root: NodeId,
    declaration: bool,
    doctype: Option<String>,
    prolog_comments: Vec<String>,
}

impl SvgDocument {
    /// Parses SVG text. The root element must be `<svg>`.
    ///
    /// Whitespace-only text nodes are dropped. Any other text is kept
    /// verbatim, including its leading and trailing spaces.
    pub fn parse(xml: &str) -> Result<Self, SvgError> {
        let mut reader = Reader::from_str(xml);

        let mut nodes: Vec<Node> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root: Option<NodeId> = None;
        let mut declaration = false;
        let mut doctype = None;
        let mut prolog_comments = Vec::new();

        loop {
            let xml_err = |source: quick_xml::Error, reader: &Reader<&[u8]>| SvgError::Xml {
                position: reader.buffer_position() as u64,
                source,
            };
            match reader.read_event() {
                Ok(Event::Decl(_)) => declaration = true,
                Ok(Event::DocType(e)) => {
                    doctype = Some(String::from_utf8_lossy(&e).trim().to_string());
                }
                Ok(Event::Start(e)) => {
                    let data = element_data(&e).map_err(|err| xml_err(err, &reader))?;
                    let id = attach(&mut nodes, &mut root, &stack, data)?;
                    stack.push(id);
                }
                Ok(Event::Empty(e)) => {
                    let data = element_data(&e).map_err(|err| xml_err(err, &reader))?;
                    attach(&mut nodes, &mut root, &stack, data)?;
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    match stack.pop() {
                        Some(open) if element_name(&nodes[open.0]) == Some(name.as_str()) => {}
                        _ => return Err(SvgError::UnbalancedTag(name)),
                    }
                }
                Ok(Event::Text(e)) => {
                    if !stack.is_empty() {
                        let text = e.unescape().map_err(|err| xml_err(err, &reader))?;
                        if text.trim().is_empty() {
                            continue;
                        }
                        attach(&mut nodes, &mut root, &stack, NodeData::Text(text.into_owned()))?;
                    }
                }
                Ok(Event::CData(e)) => {
                    if !stack.is_empty() {
                        let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                        attach(&mut nodes, &mut root, &stack, NodeData::CData(text))?;
                    }
                }
                Ok(Event::Comment(e)) => {
                    let body = String::from_utf8_lossy(&e).into_owned();
                    if stack.is_empty() {
                        if root.is_none() {
                            prolog_comments.push(body);
                        }
                    } else {
                        attach(&mut nodes, &mut root, &stack, NodeData::Comment(body))?;
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(xml_err(e, &reader)),
            }
        }

        if let Some(open) = stack.last() {
            let name = element_name(&nodes[open.0]).unwrap_or_default().to_string();
            return Err(SvgError::UnclosedTag(name));
        }
        let root = root.ok_or(SvgError::NoRoot)?;
        match element_name(&nodes[root.0]) {
            Some("svg") => {}
            other => return Err(SvgError::NotSvg(other.unwrap_or_default().to_string())),
        }

        Ok(SvgDocument { nodes, free: Vec::new(), root, declaration, doctype, prolog_comments })
    }

    /// Reads and parses an SVG file.
    pub fn load(path: &Path) -> Result<Self, SvgError> {
        let data = fs::read_to_string(path).map_err(|source| SvgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }

    /// Serializes the document back to SVG text.
    pub fn to_svg_string(&self) -> Result<String, SvgError> {
        let mut writer = Writer::new(Vec::new());
        if self.declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            writer.get_mut().push(b'\n');
        }
        if let Some(doctype) = &self.doctype {
            writer.write_event(Event::DocType(BytesText::from_escaped(doctype.as_str())))?;
            writer.get_mut().push(b'\n');
        }
        for comment in &self.prolog_comments {
            writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?;
            writer.get_mut().push(b'\n');
        }
        self.write_node(&mut writer, self.root)?;
        String::from_utf8(writer.into_inner()).map_err(|_| SvgError::Encoding)
    }

    fn write_node(&self, writer: &mut Writer<Vec<u8>>, id: NodeId) -> Result<(), SvgError> {
        let node = &self.nodes[id.0];
        match &node.data {
            NodeData::Element { name, attributes } => {
                let mut start = BytesStart::new(name.as_str());
                for (key, value) in attributes {
                    start.push_attribute((key.as_str(), value.as_str()));
                }
                if node.children.is_empty() {
                    writer.write_event(Event::Empty(start))?;
                } else {
                    writer.write_event(Event::Start(start))?;
                    for &child in &node.children {
                        self.write_node(writer, child)?;
                    }
                    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
                }
            }
            NodeData::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            NodeData::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
            NodeData::Comment(body) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(body.as_str())))?
            }
        }
        Ok(())
    }

    /// Returns the root `<svg>` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the tag name of an element, or None for text and comments.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        element_name(&self.nodes[node.0])
    }

    /// Returns the concatenated text content of a node's subtree.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].data {
            NodeData::Text(t) | NodeData::CData(t) => out.push_str(t),
            NodeData::Element { .. } => {
                for &child in &self.nodes[node.0].children {
                    self.collect_text(child, out);
                }
            }
            NodeData::Comment(_) => {}
        }
    }

    /// Returns the parent of a node, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Counts attached elements matching a predicate.
    pub fn count_elements<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&Self, NodeId) -> bool,
    {
        let mut count = 0;
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            if self.tag_name(id).is_some() {
                if pred(self, id) {
                    count += 1;
                }
                pending.extend(self.nodes[id.0].children.iter().rev());
            }
        }
        count
    }

    /// Visits attached elements in document order until `visit` returns true.
    fn find_element<F>(&self, start: NodeId, mut visit: F) -> Option<NodeId>
    where
        F: FnMut(NodeId, &str, &[(String, String)]) -> bool,
    {
        let mut pending = vec![start];
        while let Some(id) = pending.pop() {
            let node = &self.nodes[id.0];
            if let NodeData::Element { name, attributes } = &node.data {
                if visit(id, name, attributes) {
                    return Some(id);
                }
                pending.extend(node.children.iter().rev());
            }
        }
        None
    }

    /// Number of node slots held by the arena, live or free.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let node = Node { data, parent: None, children: Vec::new() };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Unlinks `child` from `parent` without freeing it.
    fn detach(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.0].children;
        match children.iter().position(|&c| c == child) {
            Some(idx) => {
                children.remove(idx);
                self.nodes[child.0].parent = None;
                true
            }
            None => false,
        }
    }

    /// Returns a detached subtree's slots to the free list.
    fn release(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let slot = &mut self.nodes[id.0];
            pending.append(&mut slot.children);
            slot.parent = None;
            slot.data = NodeData::Text(String::new());
            self.free.push(id);
        }
    }
}

impl FromStr for SvgDocument {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SvgDocument::parse(s)
    }
}

impl MapDocument for SvgDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element(self.root, |_, _, attrs| {
            attrs.iter().any(|(k, v)| k == "id" && v == id)
        })
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let NodeData::Element { attributes, .. } = &mut self.nodes[node.0].data {
            match attributes.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn deep_clone(&mut self, node: NodeId) -> NodeId {
        let copy = self.push(self.nodes[node.0].data.clone());
        let children = self.nodes[node.0].children.clone();
        for child in children {
            let child_copy = self.deep_clone(child);
            self.append_child(copy, child_copy);
        }
        copy
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.detach(old, child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.detach(parent, child) {
            return false;
        }
        self.release(child);
        true
    }

    fn child_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .filter(|&c| self.tag_name(c).is_some())
            .collect()
    }

    fn find_descendant(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.find_element(node, |id, name, _| id != node && name == tag)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element { name: tag.to_string(), attributes: Vec::new() })
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.release(child);
        }
        let text_node = self.push(NodeData::Text(text.to_string()));
        self.append_child(node, text_node);
    }
}

fn element_name(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name),
        _ => None,
    }
}

fn element_data(e: &BytesStart<'_>) -> Result<NodeData, quick_xml::Error> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(NodeData::Element { name, attributes })
}

/// Adds a parsed node under the innermost open element, or as the root.
fn attach(
    nodes: &mut Vec<Node>,
    root: &mut Option<NodeId>,
    stack: &[NodeId],
    data: NodeData,
) -> Result<NodeId, SvgError> {
    let id = NodeId(nodes.len());
    let parent = stack.last().copied();
    match parent {
        Some(p) => nodes[p.0].children.push(id),
        None if root.is_some() => return Err(SvgError::MultipleRoots),
        None => *root = Some(id),
    }
    nodes.push(Node { data, parent, children: Vec::new() });
    Ok(id)
}
