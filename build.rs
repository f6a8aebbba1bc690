use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Copy the config file from /src to the output directory, next to our resulting executable
pub fn main() {
    println!("cargo:rerun-if-changed=src/config.toml");

    let cargo_manifest_dir = match env::var_os("CARGO_MANIFEST_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };
    let output_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };
    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out
    let exe_dir = match output_dir.ancestors().nth(3) {
        Some(dir) => dir.to_path_buf(),
        None => return,
    };

    let config_file = cargo_manifest_dir.join("src").join("config.toml");
    let dest_file = Path::new(&exe_dir).join("config.toml");
    if let Err(e) = fs::copy(&config_file, &dest_file) {
        println!(
            "cargo:warning=Failed to copy config file from {:?} to {:?}: {:?}",
            config_file, dest_file, e
        );
    }
}
