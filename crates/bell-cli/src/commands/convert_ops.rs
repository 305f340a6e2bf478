use std::process;

use bell_core::converter::KanaConverter;

use super::load_dictionary;

pub fn convert_cmd(dict_file: &str, reading: &str, n: usize, json: bool) {
    if reading.is_empty() {
        eprintln!("Error: reading must not be empty");
        process::exit(1);
    }
    let dict = load_dictionary(dict_file);
    let conversion = dict.convert(reading).normalized(reading, n);

    if json {
        let out = serde_json::json!({
            "reading": reading,
            "best": conversion.best,
            "candidates": conversion.candidates,
        });
        println!("{}", die!(serde_json::to_string_pretty(&out), "Error: {}"));
        return;
    }

    println!("best: {}", conversion.best);
    for (i, surface) in conversion.candidates.iter().enumerate() {
        println!("#{:>2}: {surface}", i + 1);
    }
}
