use std::path::Path;
use std::sync::{Arc, OnceLock};

use bell_core::converter::{DictionaryConverter, DictionaryError, KanaConverter};
use bell_core::keymap::Keymap;

use super::{BellConversion, BellConverter, BellError};

/// Keymap shared by every session created through the FFI.
pub(super) fn shared_keymap() -> Arc<Keymap> {
    static SHARED: OnceLock<Arc<Keymap>> = OnceLock::new();
    Arc::clone(SHARED.get_or_init(|| Arc::new(Keymap::global().clone())))
}

/// Bundled TOML dictionary exposed as a `BellConverter`.
pub(super) struct BellDictionary {
    inner: DictionaryConverter,
}

impl BellDictionary {
    pub(super) fn open(path: &str) -> Result<Self, BellError> {
        let inner = DictionaryConverter::open(Path::new(path)).map_err(|e| match e {
            DictionaryError::Io(e) => BellError::Io {
                msg: format!("{path}: {e}"),
            },
            other => BellError::InvalidData {
                msg: other.to_string(),
            },
        })?;
        Ok(Self { inner })
    }
}

impl BellConverter for BellDictionary {
    fn convert(&self, reading: String) -> BellConversion {
        self.inner.convert(&reading).into()
    }
}
