use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DIST_ENV: &str = "CARDS_FRONTEND_DIST";
const DEFAULT_DIST: &str = "../frontend/dist";

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n\
<html lang=\"es\">\n\
<head><meta charset=\"utf-8\"><title>Tarjetas Digitales</title></head>\n\
<body><p>La interfaz no está compilada. Ejecute <code>trunk build</code> en <code>frontend/</code> y recompile el servidor.</p></body>\n\
</html>\n";

/// Where the Trunk bundle lives; `CARDS_FRONTEND_DIST` overrides the sibling
/// `frontend/dist`.
fn dist_dir() -> PathBuf {
    env::var_os(DIST_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST))
}

/// Copies the bundle into `static/dist`, the directory `main.rs` embeds.
fn embed_bundle(dist: &Path, out_dir: &Path) -> Result<(), String> {
    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).map_err(|e| format!("create {}: {}", out_dir.display(), e))?;

    let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .copy_inside(true);
    fs_extra::dir::copy(dist, out_dir.join("dist"), &options)
        .map_err(|e| format!("copy {}: {}", dist.display(), e))?;
    Ok(())
}

/// Without a bundle the server still builds and answers every page with a
/// short notice instead of a 404.
fn write_placeholder(out_dir: &Path) -> Result<(), String> {
    let target = out_dir.join("dist");
    fs::create_dir_all(&target).map_err(|e| format!("create {}: {}", target.display(), e))?;
    let index = target.join("index.html");
    if !index.exists() {
        fs::write(&index, PLACEHOLDER_INDEX)
            .map_err(|e| format!("write {}: {}", index.display(), e))?;
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let out_dir = Path::new("static");
    let dist = dist_dir();

    println!("cargo:rerun-if-env-changed={}", DIST_ENV);
    println!("cargo:rerun-if-changed={}", dist.display());

    if dist.join("index.html").exists() {
        embed_bundle(&dist, out_dir)
    } else {
        println!(
            "cargo:warning=No frontend bundle at {}, embedding a placeholder page",
            dist.display()
        );
        write_placeholder(out_dir)
    }
}
