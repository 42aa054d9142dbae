//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → router.rs (insert in file order)
//!     → tree.rs (split pattern via delimiter.rs, grow node arena)
//!     → Freeze as immutable RouteTable
//!
//! Subject Lookup:
//!     subject string
//!     → tree.rs (walk child/sibling links)
//!     → delimiter.rs (bound parameter values)
//!     → Return: value + Parameter views, or NoMatch
//! ```
//!
//! # Design Decisions
//! - Nodes live in an arena and link by index, never by pointer
//! - Conflicts are rejected at insertion, so lookups never have to rank
//! - Parameters are offsets into the subject, no substring copies
//! - No backtracking above the depth where a match was committed

pub mod delimiter;
pub mod error;
pub(crate) mod node;
pub mod param;
pub mod router;
pub mod tree;

pub use delimiter::Delimiter;
pub use error::TrieError;
pub use param::Parameter;
pub use router::{BuildError, RouteMatch, RouteTable};
pub use tree::PrefixTree;
