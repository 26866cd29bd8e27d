//! String-keyed hash tables (`GHashTable`)
//!
//! Tables made here own their keys (copied in, freed by the table) and
//! store values as untyped payloads they never free.

use std::ffi::CStr;

use gbind_core::{resource, AsHandle, Borrowed, Handle, Owned};
use gbind_list::{FromPayload, List, ToPayload};
use gbind_sys as ffi;

use crate::error::Result;
use crate::strings::to_cstring;

resource! {
    pub enum HashTableKind: refcounted(ffi::GHashTable) {
        ref = ffi::g_hash_table_ref,
        unref = ffi::g_hash_table_unref,
    }
}

pub type HashTable = Owned<HashTableKind>;
pub type HashTableRef<'a> = Borrowed<'a, HashTableKind>;

/// Empty table hashing keys as strings
pub fn new() -> Result<HashTable> {
    let raw = unsafe {
        ffi::g_hash_table_new_full(
            Some(ffi::g_str_hash),
            Some(ffi::g_str_equal),
            Some(ffi::g_free),
            None,
        )
    };
    Ok(unsafe { HashTable::try_adopt(raw) }?)
}

pub trait HashTableExt: AsHandle<Kind = HashTableKind> {
    /// Insert or overwrite; `true` when the key was new
    ///
    /// On overwrite the table keeps its existing key copy.
    fn insert<V: ToPayload>(&self, key: &str, value: V) -> Result<bool> {
        let key = to_cstring(key)?;
        let added = unsafe {
            ffi::g_hash_table_insert(
                self.as_raw(),
                ffi::g_strdup(key.as_ptr()).cast(),
                value.to_payload(),
            )
        };
        Ok(added != ffi::GFALSE)
    }

    /// As [`insert`](Self::insert), but the new key copy replaces the old one
    fn replace<V: ToPayload>(&self, key: &str, value: V) -> Result<bool> {
        let key = to_cstring(key)?;
        let added = unsafe {
            ffi::g_hash_table_replace(
                self.as_raw(),
                ffi::g_strdup(key.as_ptr()).cast(),
                value.to_payload(),
            )
        };
        Ok(added != ffi::GFALSE)
    }

    /// Stored value; `None` for a missing key or a null value
    fn lookup(&self, key: &str) -> Result<Option<Handle>> {
        let key = to_cstring(key)?;
        let value = unsafe { ffi::g_hash_table_lookup(self.as_raw(), key.as_ptr().cast()) };
        Ok(unsafe { Handle::from_payload(value) })
    }

    fn contains(&self, key: &str) -> Result<bool> {
        let key = to_cstring(key)?;
        Ok(unsafe { ffi::g_hash_table_contains(self.as_raw(), key.as_ptr().cast()) } != ffi::GFALSE)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let key = to_cstring(key)?;
        Ok(unsafe { ffi::g_hash_table_remove(self.as_raw(), key.as_ptr().cast()) } != ffi::GFALSE)
    }

    fn remove_all(&self) {
        unsafe { ffi::g_hash_table_remove_all(self.as_raw()) }
    }

    fn size(&self) -> usize {
        unsafe { ffi::g_hash_table_size(self.as_raw()) as usize }
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Copies of every key, in table order
    fn keys(&self) -> Result<Vec<String>> {
        // SAFETY: the borrowed keys do not outlive this call
        let keys = unsafe { self.borrowed_keys() };
        // Bound so the iterator temporary drops before `keys` does.
        let copied = keys
            .iter()
            .map(|key| Ok(key.to_str()?.to_owned()))
            .collect::<Result<Vec<_>>>();
        copied
    }

    /// The table's own key strings, without copying
    ///
    /// # Safety
    ///
    /// The elements point into the table. Removing or replacing a key, or
    /// dropping the last owner, while the list is alive leaves them dangling.
    unsafe fn borrowed_keys(&self) -> List<&CStr> {
        List::from_raw(ffi::g_hash_table_get_keys(self.as_raw()))
    }

    fn values(&self) -> List<Handle> {
        unsafe { List::from_raw(ffi::g_hash_table_get_values(self.as_raw())) }
    }
}

impl<T: AsHandle<Kind = HashTableKind> + ?Sized> HashTableExt for T {}
