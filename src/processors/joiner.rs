use crate::models::TokenTree;

/// Serialize a [`TokenTree`] back to text.
///
/// Children of a branch are joined with the first delimiter, each child being
/// serialized with the remaining ones. Once the delimiters run out, children
/// are concatenated as they are.
pub fn join<S: AsRef<str>>(tree: &TokenTree, delimiters: &[S]) -> String {
    match tree {
        TokenTree::Leaf(text) => text.clone(),
        TokenTree::Branch(children) => {
            let (delimiter, rest) = match delimiters.split_first() {
                Some((first, rest)) => (first.as_ref(), rest),
                None => ("", delimiters),
            };

            children
                .iter()
                .map(|child| join(child, rest))
                .collect::<Vec<_>>()
                .join(delimiter)
        }
    }
}
