use std::fs;
use std::process;

pub fn keymap_export() {
    print!("{}", bell_core::keymap::default_toml());
}

pub fn keymap_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let def = die!(bell_core::keymap::parse_keymap_toml(&content), "Error: {}");
    println!(
        "OK: {} mappings, dakuten={}, handakuten={}",
        def.pairs.len(),
        def.dakuten,
        def.handakuten
    );
}

pub fn settings_export() {
    print!("{}", bell_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        bell_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: candidates.max_results={}, composing.max_length={}, preview.cursor={:?}",
        s.candidates.max_results, s.composing.max_length, s.preview.cursor
    );
}
