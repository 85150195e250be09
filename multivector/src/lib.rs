//! A recursively nested sequence container.
//!
//! A [`MultiVector`] is an ordered sequence of [`Node`]s. Each node is either
//! a leaf value or a nested `MultiVector` of the same element type, so a
//! multivector is a tree of arbitrary, non-uniform depth:
//!
//! ```
//! use multivector::{multivector, Node};
//!
//! let mv = multivector![1, [2, 3], 4];
//! assert_eq!(mv.len(), 3);
//! assert!(matches!(mv[1], Node::Branch(_)));
//! assert_eq!(mv.linear().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```
//!
//! There are two ways to look at a multivector. Shallow access (`len`,
//! `iter`, `get`, `find`) sees the direct nodes only, with a branch counting
//! as a single step. Linear access (`linear_len`, `linear`, `find_if`) sees
//! all leaf values in depth-first order and ignores nesting entirely.
//!
//! All traversals, as well as clone, comparison, hashing, formatting and
//! drop, use an explicit heap stack, so very deep nesting does not exhaust
//! the call stack.

mod compare;
mod container;
mod creation;
mod display;
mod error;
mod iter;
mod node;
mod promote;
mod search;
#[cfg(feature = "serde")]
mod serialization;

pub use container::MultiVector;
pub use error::{Error, Result};
pub use iter::{IntoLinear, Linear, LinearMut};
pub use node::Node;
pub use search::{Cursor, Path};
