use crate::models::TokenTree;

/// Split `text` into a [`TokenTree`], one nesting level per delimiter.
///
/// Text is split on the first delimiter and every segment is split again with
/// the remaining ones. Empty segments are kept, and nothing is trimmed. Text
/// that does not contain the current delimiter, or that is reached once the
/// delimiters run out, becomes a leaf.
pub fn tokenize<S: AsRef<str>>(text: &str, delimiters: &[S]) -> TokenTree {
    let Some((delimiter, rest)) = delimiters.split_first() else {
        return TokenTree::leaf(text);
    };
    let delimiter = delimiter.as_ref();

    if !text.contains(delimiter) {
        return TokenTree::leaf(text);
    }

    TokenTree::Branch(
        text.split(delimiter)
            .map(|segment| tokenize(segment, rest))
            .collect(),
    )
}
