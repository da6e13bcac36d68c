use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=CONGRUITY_SITE_ROOT_HINT");
    println!("cargo:rerun-if-changed=content/site_content.json");
    println!("cargo:rerun-if-changed=schema/site_content.schema.json");

    let hint = env::var("CONGRUITY_SITE_ROOT_HINT")
        .ok()
        .or_else(|| env::var("CARGO_MANIFEST_DIR").ok());

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=CONGRUITY_SITE_ROOT_HINT={}",
            canonical.display()
        );
    }
}
