//! Convenient imports for Stashcell.
//!
//! ```
//! use stashcell::prelude::*;
//!
//! let cell = PersistentCell::bind("count", Some(0u32), Backend::new(MemoryStore::new()))?;
//! assert_eq!(cell.get(), Some(&0));
//! # Ok::<(), stashcell::Error>(())
//! ```

// Cells
pub use crate::{CellBuilder, CellOptions, PersistentCell};

// Error handling
pub use crate::{Error, Result};

// Stores
pub use crate::{Backend, ExternalStore, FileStore, MemoryStore, StoreExt};

// Codecs
pub use crate::{Codec, Field, JsonCodec, Pattern, PatternCodec, PatternRecord, RawCodec};
