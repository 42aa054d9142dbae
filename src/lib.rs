//! Parametrized prefix tree for delimiter-segmented keys.
//!
//! Patterns such as `/sum/{a}/{b}` are registered once and subjects such as
//! `/sum/a/42/b/24` are matched against them. Parameters are returned as
//! offsets into the subject, never as copies.
//!
//! ```
//! use param_trie::PrefixTree;
//!
//! let mut tree = PrefixTree::new("/").unwrap();
//! tree.insert("/sum/{a}/{b}", "Sum").unwrap();
//!
//! let subject = "/sum/a/42/b/24";
//! let mut params = Vec::new();
//! assert_eq!(tree.find(subject, &mut params), Some(&"Sum"));
//! assert_eq!(params[0].value(subject), Some("42"));
//! assert_eq!(params[1].value(subject), Some("24"));
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::TrieConfig;
pub use routing::{Parameter, PrefixTree, RouteMatch, RouteTable, TrieError};
