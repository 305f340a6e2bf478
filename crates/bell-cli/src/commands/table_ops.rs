use std::process;

use bell_core::keymap::Keymap;
use bell_core::voicing::Voicing;

use super::load_keymap;

/// Print the key reference table, optionally a single row.
pub fn table(row: Option<u8>, keymap_file: Option<&str>) {
    let keymap = load_keymap(keymap_file);
    let rows = match row {
        Some(r) if r > 9 => {
            eprintln!("Error: row must be 0-9, got {r}");
            process::exit(1);
        }
        Some(r) => vec![r],
        None => keymap.rows().to_vec(),
    };
    for line in format_rows(&keymap, &rows) {
        println!("{line}");
    }
}

pub(crate) fn format_rows(keymap: &Keymap, rows: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    for &row in rows {
        let cells: Vec<String> = keymap
            .characters_for_row(row)
            .into_iter()
            .map(|(code, text)| format!("{code}:{}", visible(&text)))
            .collect();
        let mut line = format!("{row} | {}", cells.join(" "));
        for voicing in [Voicing::Dakuten, Voicing::Handakuten] {
            let code = keymap.operator_code(voicing);
            if code.first.value() == row {
                line.push_str(&format!(" {code}:{}", voicing.mark()));
            }
        }
        lines.push(line);
    }
    lines
}

fn visible(text: &str) -> String {
    if text == " " {
        "␣".to_string()
    } else {
        text.to_string()
    }
}
