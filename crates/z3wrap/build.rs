//! Generates `<file>.wrap.rs` in `OUT_DIR` for every declaration file.

use std::env;
use std::path::PathBuf;

use z3_genwrap::{GenConfig, Generator};

/// Declaration files and the default type of each.
const DECLARATIONS: &[(&str, &str)] = &[
    ("boolean", "Bool"),
    ("int", "Int"),
    ("string", "String"),
    ("seq", "Sequence"),
    ("expr", "Expr"),
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    for (name, default_type) in DECLARATIONS {
        let input = PathBuf::from(format!("src/ast/{name}.rs"));
        println!("cargo:rerun-if-changed={}", input.display());

        let output = out_dir.join(format!("{name}.wrap.rs"));
        Generator::new(GenConfig::new(*default_type))
            .run_to(&[&input], &output)
            .unwrap_or_else(|err| {
                if let Some(raw) = err.raw_output() {
                    eprintln!("{raw}");
                }
                panic!("genwrap failed for {}: {err}", input.display())
            });
    }
}
