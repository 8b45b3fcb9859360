use crate::models::{Number, TokenTree};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombineError {
    #[error("token trees have different shapes")]
    ShapeMismatch,

    #[error("could not convert '{0}' to a number")]
    InvalidNumber(String),
}

/// Merge two trees of the same shape leaf by leaf.
///
/// Leaves are parsed as numbers, normalized (see [`Number`]) and reduced with
/// `reducer`; the result leaf holds the reduced value's canonical text.
pub fn combine<F>(a: &TokenTree, b: &TokenTree, reducer: &F) -> Result<TokenTree, CombineError>
where
    F: Fn(Number, Number) -> Number,
{
    match (a, b) {
        (TokenTree::Leaf(x), TokenTree::Leaf(y)) => {
            let x = parse_leaf(x)?;
            let y = parse_leaf(y)?;
            Ok(TokenTree::Leaf(reducer(x, y).to_string()))
        }
        (TokenTree::Branch(xs), TokenTree::Branch(ys)) if xs.len() == ys.len() => xs
            .iter()
            .zip(ys)
            .map(|(x, y)| combine(x, y, reducer))
            .collect::<Result<Vec<_>, _>>()
            .map(TokenTree::Branch),
        _ => Err(CombineError::ShapeMismatch),
    }
}

fn parse_leaf(text: &str) -> Result<Number, CombineError> {
    text.parse()
        .map_err(|_| CombineError::InvalidNumber(text.to_string()))
}
