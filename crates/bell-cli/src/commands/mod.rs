use std::path::Path;
use std::process;
use std::sync::Arc;

use bell_core::converter::{DictionaryConverter, KanaConverter};
use bell_core::keymap::Keymap;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod table_ops;
pub mod type_ops;

/// Built-in keymap, or the one in `path`.
pub(crate) fn load_keymap(path: Option<&str>) -> Keymap {
    match path {
        Some(path) => {
            let content = die!(std::fs::read_to_string(path), "Error reading {path}: {}");
            die!(Keymap::from_toml(&content), "Error in keymap {path}: {}")
        }
        None => Keymap::default_keymap(),
    }
}

pub(crate) fn load_dictionary(path: &str) -> DictionaryConverter {
    die!(
        DictionaryConverter::open(Path::new(path)),
        "Error opening dictionary: {}"
    )
}

pub(crate) fn load_converter(path: Option<&str>) -> Option<Arc<dyn KanaConverter>> {
    path.map(|p| Arc::new(load_dictionary(p)) as Arc<dyn KanaConverter>)
}
