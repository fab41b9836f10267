//! Request extractors.

mod json_body;
mod page_query;

pub use json_body::JsonBody;
pub use page_query::PageQuery;
