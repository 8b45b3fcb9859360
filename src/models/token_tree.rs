/// One line of a report, split into nested fields.
///
/// Each level of nesting corresponds to one delimiter of the
/// [`DelimiterSet`](crate::models::DelimiterSet) the line was split with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenTree {
    Leaf(String),
    Branch(Vec<TokenTree>),
}

impl TokenTree {
    pub fn leaf(text: impl Into<String>) -> Self {
        TokenTree::Leaf(text.into())
    }

    /// Top-level children; a leaf has none.
    pub fn children(&self) -> &[TokenTree] {
        match self {
            TokenTree::Leaf(_) => &[],
            TokenTree::Branch(children) => children,
        }
    }

    /// True when both trees nest the same way, regardless of leaf text.
    pub fn same_shape(&self, other: &TokenTree) -> bool {
        match (self, other) {
            (TokenTree::Leaf(_), TokenTree::Leaf(_)) => true,
            (TokenTree::Branch(a), TokenTree::Branch(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            TokenTree::Leaf(_) => 1,
            TokenTree::Branch(children) => children.iter().map(TokenTree::leaf_count).sum(),
        }
    }
}
