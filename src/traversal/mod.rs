//! Structural traversal operators over [`Node`](crate::node::Node) trees.
//!
//! All operators are pure: they read the input tree and build new values.
//! `map` and `filter` recurse once per tree level; `reduce` walks an
//! explicit stack through [`PreOrder`].

mod filter;
mod map;
mod pre_order;
mod reduce;

pub use filter::filter;
pub use map::map;
pub use pre_order::PreOrder;
pub use reduce::reduce;
