pub mod delimiters;
pub mod number;
pub mod report;
pub mod token_tree;

pub use delimiters::DelimiterSet;
pub use number::Number;
pub use report::ReportFile;
pub use token_tree::TokenTree;
