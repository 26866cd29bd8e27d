//! Resource kinds and their memory-management disciplines

use core::fmt;

/// How a resource kind must be released
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Statically allocated, embedded or owned elsewhere; release is a no-op
    Uncounted,
    /// Shared through a foreign counter; each owner holds one reference
    RefCounted,
    /// Uniquely owned; freed exactly once by its single owner
    Transferred,
}

impl Discipline {
    /// Whether dropping an owner issues a foreign call
    pub fn releases(self) -> bool {
        !matches!(self, Discipline::Uncounted)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Discipline::Uncounted => "uncounted",
            Discipline::RefCounted => "ref-counted",
            Discipline::Transferred => "transferred",
        };
        f.write_str(name)
    }
}

/// A kind of foreign resource
///
/// Implementors are uninhabited marker types, normally declared with
/// [`resource!`](crate::resource). They tie the foreign struct type to the
/// release path of its discipline.
///
/// # Safety
///
/// `Raw` must be the foreign type the release function expects, `DISCIPLINE`
/// must describe the foreign contract, and `release` must perform exactly the
/// discipline's release: decrement for `RefCounted`, free for `Transferred`,
/// nothing for `Uncounted`.
pub unsafe trait Resource: 'static {
    /// Foreign struct behind the handle
    type Raw;

    const NAME: &'static str;
    const DISCIPLINE: Discipline;

    /// Give up one owner's claim on `raw`
    ///
    /// # Safety
    ///
    /// `raw` must be a live resource of this kind on which the caller holds
    /// an owner's claim. The claim is gone afterwards.
    unsafe fn release(raw: *mut Self::Raw);
}

/// Resource kinds with a foreign reference counter
///
/// Only these kinds can be cloned: a clone is one more foreign reference.
///
/// # Safety
///
/// `retain` must increment the foreign counter that `Resource::release`
/// decrements, and the kind's `DISCIPLINE` must be `RefCounted`.
pub unsafe trait RefCounted: Resource {
    /// Take one more reference on `raw`
    ///
    /// # Safety
    ///
    /// `raw` must be a live resource of this kind.
    unsafe fn retain(raw: *mut Self::Raw);
}

/// Resource kinds the foreign library documents as usable from any thread
///
/// Owners and views of these kinds are `Send` and `Sync`.
///
/// # Safety
///
/// Every foreign operation exposed for the kind, including retain and
/// release, must be safe to call concurrently from several threads.
pub unsafe trait ThreadSafe: Resource {}
