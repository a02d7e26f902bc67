//! The parsed-markup view a [`ConfigNode`](super::ConfigNode) is built from.

/// An element of an already parsed markup document.
///
/// The loader only ever needs these four things from the parser, so any
/// tree-shaped XML representation can feed [`ConfigNode::init`](super::ConfigNode::init).
pub trait MarkupElement: Sized {
    /// Local tag name, without namespace prefix.
    fn tag_name(&self) -> &str;

    /// Direct text content, untrimmed. `None` if the element has no text children.
    fn text(&self) -> Option<String>;

    /// Attributes in document order.
    fn attributes(&self) -> Vec<(String, String)>;

    /// Child elements in document order.
    fn child_elements(&self) -> Vec<Self>;
}

impl<'a, 'input: 'a> MarkupElement for roxmltree::Node<'a, 'input> {
    fn tag_name(&self) -> &str {
        roxmltree::Node::tag_name(self).name()
    }

    fn text(&self) -> Option<String> {
        let mut texts = self
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .peekable();

        texts.peek()?;
        Some(texts.collect())
    }

    fn attributes(&self) -> Vec<(String, String)> {
        roxmltree::Node::attributes(self)
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect()
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter(|child| child.is_element()).collect()
    }
}
