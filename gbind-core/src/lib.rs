//! Typed ownership for foreign resource handles
//!
//! Every resource exported by the C library is reached through an untyped
//! pointer. This crate gives each pointer a *kind* (a marker type naming the
//! foreign struct and how it must be released) and two wrappers over it:
//!
//! - [`Owned`] holds one claim and releases it exactly once on drop
//! - [`Borrowed`] is a copyable view that never releases anything
//!
//! Operations live in per-kind extension traits written against
//! [`AsHandle`], so owners and views share a single implementation.

pub mod borrowed;
pub mod capability;
pub mod error;
pub mod handle;
mod macros;
pub mod owned;
pub mod resource;

pub use borrowed::Borrowed;
pub use capability::AsHandle;
pub use error::HandleError;
pub use handle::Handle;
pub use owned::Owned;
pub use resource::{Discipline, RefCounted, Resource, ThreadSafe};
