//! Typed access to the foreign library's linked lists
//!
//! Foreign lists are chains of `GList`/`GSList` nodes whose payload is an
//! untyped pointer. This crate reconstructs a caller-chosen element type
//! from each payload while walking the `next` chain.
//!
//! Two rules hold everywhere:
//!
//! - A node whose payload is null yields nothing, and the walk moves on to
//!   the next node. Only a null node ends the list.
//! - Walking never frees nodes. Only the owning [`List`]/[`SList`]
//!   containers free nodes, and never their payloads.
//!
//! A cyclic foreign list never ends; nothing here detects cycles.

pub mod iter;
pub mod list;
pub mod node;
pub mod payload;
pub mod slist;

pub use iter::Iter;
pub use list::{List, ListRef};
pub use node::{DoublyLinked, Node};
pub use payload::{FromPayload, ToPayload};
pub use slist::{SList, SListRef};
