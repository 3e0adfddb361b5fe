//! Filesystem-backed store
//!
//! [`FileStore`] keeps one file per key under a base directory, so values
//! survive process restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── <base64url(key)>        # short key: stored string, UTF-8
//! ├── ~<xxh3-128(key) hex>    # long key: header line, then stored string
//! └── <name>.tmp              # in-flight write, renamed into place
//! ```
//!
//! Short keys are named by the URL-safe, unpadded base64 of the key, so any
//! key is a valid file name. Keys whose encoded name would exceed
//! [`MAX_NAME_LEN`] are named by a fixed-length digest instead; the file's
//! first line holds the encoded key so a digest collision reads as absent
//! rather than as another key's value.
//!
//! Writes go to a temporary file first and are renamed over the target, so a
//! reader never sees a half-written value.

use crate::traits::ExternalStore;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use stash_core::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use xxhash_rust::xxh3::xxh3_128;

/// Longest encoded key used directly as a file name
///
/// Leaves room for [`TMP_SUFFIX`] under the common 255-byte name limit.
pub const MAX_NAME_LEN: usize = 200;

const TMP_SUFFIX: &str = ".tmp";

/// Marks digest-named files; not part of the base64url alphabet
const HASHED_PREFIX: char = '~';

/// Where a key lives on disk
enum Slot {
    /// File named by the encoded key, holding only the value
    Direct(PathBuf),
    /// File named by a digest, holding `encoded key \n value`
    Hashed { path: PathBuf, header: String },
}

impl Slot {
    fn path(&self) -> &Path {
        match self {
            Slot::Direct(path) | Slot::Hashed { path, .. } => path,
        }
    }
}

/// Directory-backed key-value store
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base`, creating the directory if needed
    pub fn open(base: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        debug!(path = %base.display(), "opened file store");
        Ok(Self { base })
    }

    /// The base directory
    pub fn path(&self) -> &Path {
        &self.base
    }

    /// Keys currently stored, in no particular order
    ///
    /// Files whose names are not valid encoded keys are skipped.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.ends_with(TMP_SUFFIX) {
                continue;
            }
            let key = if name.starts_with(HASHED_PREFIX) {
                let contents = fs::read_to_string(entry.path())?;
                contents
                    .split_once('\n')
                    .and_then(|(header, _)| decode_file_name(header))
            } else {
                decode_file_name(name)
            };
            if let Some(key) = key {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn slot(&self, key: &str) -> Slot {
        let encoded = encode_file_name(key);
        if encoded.len() <= MAX_NAME_LEN {
            return Slot::Direct(self.base.join(encoded));
        }
        let digest = format!("{}{:032x}", HASHED_PREFIX, xxh3_128(key.as_bytes()));
        Slot::Hashed {
            path: self.base.join(digest),
            header: encoded,
        }
    }

    /// Read a slot, `None` when absent or owned by another key
    fn read_slot(&self, slot: &Slot) -> Result<Option<String>, StoreError> {
        let contents = match fs::read_to_string(slot.path()) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match slot {
            Slot::Direct(_) => Ok(Some(contents)),
            Slot::Hashed { path, header } => match contents.split_once('\n') {
                Some((stored, value)) if stored == header => Ok(Some(value.to_string())),
                Some(_) => {
                    warn!(path = %path.display(), "digest collision, slot holds another key");
                    Ok(None)
                }
                None => Err(StoreError::Rejected(format!(
                    "missing key header in {}",
                    path.display()
                ))),
            },
        }
    }
}

fn encode_file_name(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

fn decode_file_name(name: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(name).ok()?;
    String::from_utf8(bytes).ok()
}

impl ExternalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.read_slot(&self.slot(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let slot = self.slot(key);
        let contents = match &slot {
            Slot::Direct(_) => value.to_string(),
            Slot::Hashed { header, .. } => format!("{}\n{}", header, value),
        };

        let path = slot.path();
        let mut tmp = path.to_path_buf().into_os_string();
        tmp.push(TMP_SUFFIX);
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, contents)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let slot = self.slot(key);
        if let Slot::Hashed { .. } = slot {
            // Leave a colliding key's file alone
            if self.read_slot(&slot)?.is_none() {
                return Ok(());
            }
        }
        match fs::remove_file(slot.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
