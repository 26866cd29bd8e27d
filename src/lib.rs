//! gbind - typed ownership bindings for a GLib-style C utility library
//!
//! Every foreign resource kind is bound to its release discipline through
//! [`gbind_core`]: ref-counted kinds clone by taking a foreign reference,
//! transferred kinds are freed exactly once by their single owner, and
//! uncounted kinds (mutexes, thread-local keys) are never released.
//!
//! Each kind lives in its own module with an owning alias (`HashTable`), a
//! borrowed alias (`HashTableRef<'a>`), free-function factories
//! (`hash_table::new()`) and a capability trait (`HashTableExt`) shared by
//! owners and views. Foreign `GError` reports become [`Error::Foreign`].
//!
//! ```ignore
//! use gbind::prelude::*;
//!
//! let table = gbind::hash_table::new()?;
//! table.insert("alpha", Handle::from_ptr(ptr))?;
//! for key in table.keys()? {
//!     println!("{key}");
//! }
//! ```

pub mod config;
pub mod dir;
pub mod error;
pub mod error_report;
pub mod hash_table;
pub mod io_channel;
pub mod logging;
pub mod main_context;
pub mod main_loop;
pub mod mutex;
pub mod pattern_spec;
pub mod prelude;
pub mod private;
pub mod quark;
pub mod rand;
pub mod source;
pub mod string_chunk;
pub mod strings;
pub mod timer;

pub use error::{check, check_result, Error, FileErrorCode, ForeignError, Result};
pub use quark::Quark;

pub use dir::{Dir, DirRef};
pub use error_report::{ErrorReport, ErrorReportRef};
pub use hash_table::{HashTable, HashTableRef};
pub use io_channel::{IoChannel, IoChannelRef, IoStatus};
pub use main_context::{MainContext, MainContextRef};
pub use main_loop::{MainLoop, MainLoopRef};
pub use mutex::{Mutex, MutexRef, MutexStorage, RecMutex, RecMutexRef, RecMutexStorage};
pub use pattern_spec::{PatternSpec, PatternSpecRef};
pub use private::{Private, PrivateRef, PrivateStorage};
pub use rand::{Rand, RandRef};
pub use source::{Source, SourceRef};
pub use string_chunk::{StringChunk, StringChunkRef};
pub use timer::{Timer, TimerRef};

pub use gbind_core::{AsHandle, Borrowed, Discipline, Handle, HandleError, Owned};
pub use gbind_list::{List, ListRef, SList, SListRef};

pub use gbind_sys as ffi;
