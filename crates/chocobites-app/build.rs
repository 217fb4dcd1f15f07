//! Bakes `CHOCOBITES_*` settings into the generated `env` module.
//!
//! Values come from the process environment first, then `.env` in this
//! crate or any parent directory.

use std::env;
use std::fs;
use std::path::Path;

const VARS: &[(&str, &str)] = &[
    ("CHOCOBITES_APP_ENV", "dev"),
    ("CHOCOBITES_EMBED_SCRIPT_URL", ""),
    (
        "CHOCOBITES_INSTAGRAM_URL",
        "https://www.instagram.com/c_hoco_bites/",
    ),
    ("CHOCOBITES_EMBED_MAX_RETRIES", "3"),
    ("CHOCOBITES_EMBED_RETRY_DELAY_MS", "1000"),
];

fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let mut out = String::from("// @generated by build.rs\n\n");
    for (name, default) in VARS {
        println!("cargo:rerun-if-env-changed={name}");
        let value = env::var(name).unwrap_or_else(|_| (*default).to_owned());
        out.push_str(&format!("pub const {name}: &str = {value:?};\n"));
    }

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("env.rs"), out).expect("failed to write env.rs");
}
