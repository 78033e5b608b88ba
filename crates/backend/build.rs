use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Places the workspace config.toml next to the enquiry collector binary,
// which is where `shared::config::load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=could not locate the target profile directory");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!(
            "cargo:warning=no config.toml at {:?}, the collector will use its embedded defaults",
            source
        );
        return;
    }

    let dest = target_dir.join("config.toml");
    match fs::copy(&source, &dest) {
        Ok(_) => println!("cargo:warning=copied config.toml to {:?}", dest),
        Err(e) => println!("cargo:warning=failed to copy config.toml: {}", e),
    }
}

/// `OUT_DIR` is `target/<profile>/build/backend-<hash>/out`
fn profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
