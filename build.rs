//! Build script to generate the color code table.
//!
//! Reads `colors.json` from the crate root and generates a static map of
//! color codes to their hex colors.

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use phf_codegen::Map;

fn main() {
    println!("cargo:rerun-if-changed=colors.json");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("colors.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    let colors_json = fs::read_to_string("colors.json").unwrap();
    let colors: BTreeMap<String, String> = serde_json::from_str(&colors_json).unwrap();

    let values: Vec<(String, String)> = colors
        .into_iter()
        .map(|(code, hex)| {
            let hex = hex.to_ascii_lowercase();
            assert!(
                hex.len() == 4
                    && hex.starts_with('#')
                    && hex[1..].chars().all(|c| c.is_ascii_hexdigit()),
                "invalid hex color for {}: {}",
                code,
                hex
            );
            (code, format!("\"{}\"", hex))
        })
        .collect();

    let mut color_map = Map::new();
    for (code, hex) in &values {
        color_map.entry(code.as_str(), hex.as_str());
    }

    writeln!(
        &mut file,
        "static COLORS: phf::Map<&'static str, &'static str> = \n{};\n",
        color_map.build()
    )
    .unwrap();
}
