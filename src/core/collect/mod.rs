pub mod comments;

pub use comments::{CommentCollector, Directive, Suppressions};
