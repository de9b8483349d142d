pub mod domain_set;
pub mod matcher;
pub mod source;

pub use domain_set::DomainSet;
pub use matcher::BlocklistMatcher;
pub use source::{parse_list_line, parse_list_text, LocalBlocklistSource};
