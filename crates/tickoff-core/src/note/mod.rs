//! Note-level helpers that sit outside the checklist grammar

pub mod frontmatter;

pub use frontmatter::{header_info, HeaderInfo};
