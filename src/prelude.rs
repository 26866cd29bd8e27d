//! Every capability trait, for glob import
//!
//! ```ignore
//! use gbind::prelude::*;
//! ```

pub use crate::dir::DirExt;
pub use crate::error_report::ErrorReportExt;
pub use crate::hash_table::HashTableExt;
pub use crate::io_channel::IoChannelExt;
pub use crate::main_context::MainContextExt;
pub use crate::main_loop::MainLoopExt;
pub use crate::mutex::{MutexExt, RecMutexExt};
pub use crate::pattern_spec::PatternSpecExt;
pub use crate::private::PrivateExt;
pub use crate::rand::RandExt;
pub use crate::source::SourceExt;
pub use crate::string_chunk::StringChunkExt;
pub use crate::timer::TimerExt;

pub use gbind_core::{AsHandle, Handle};
