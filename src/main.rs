//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg`
//! and serves `static/` on a local HTTP server.

use std::process::{Command, ExitStatus, Stdio};

const ADDR: &str = "127.0.0.1";
const PORT: &str = "8000";
const SITE_DIR: &str = "static";
const PKG_DIR: &str = "static/pkg";

fn wasm_pack_args() -> [&'static str; 7] {
    ["build", "--release", "--target", "web", "--out-dir", PKG_DIR, "--no-typescript"]
}

fn server_args() -> [&'static str; 7] {
    ["-m", "http.server", PORT, "--bind", ADDR, "--directory", SITE_DIR]
}

fn build_bundle() -> std::io::Result<ExitStatus> {
    Command::new("wasm-pack").args(wasm_pack_args()).status()
}

fn main() {
    // Only meaningful on non-wasm targets.
    if cfg!(target_arch = "wasm32") {
        return;
    }

    println!("Building pool_scene bundle into {PKG_DIR} …");
    match build_bundle() {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("bundle build failed ({st}); fix the errors above and rerun");
            std::process::exit(1);
        }
        Err(e) => {
            // Serving an older bundle is still useful for tweaking the page.
            eprintln!("could not launch wasm-pack ({e}); serving whatever is already in {PKG_DIR}");
        }
    }

    println!("Serving {SITE_DIR}/ at http://{ADDR}:{PORT} (Space strike, R reset, T top view, A original view)");
    let server = Command::new("python3")
        .args(server_args())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("http server exited with {st}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("failed to start http server (python3 required): {e}");
            std::process::exit(1);
        }
    }
}
