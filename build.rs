//! Build script for embedding frontend assets.
//!
//! In release mode, this builds the client bundle with Trunk into dist/ for
//! rust-embed to include in the server binary.
//!
//! In debug mode, this script does nothing (rust-embed reads dist/ and
//! public/ from the filesystem at runtime).

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only build frontend assets for release server builds. The client
    // bundle itself (wasm32, frontend feature) is what Trunk compiles.
    #[cfg(not(debug_assertions))]
    {
        use std::env;
        use std::process::Command;

        let is_wasm = env::var("CARGO_CFG_TARGET_ARCH").is_ok_and(|arch| arch == "wasm32");
        let is_backend = env::var_os("CARGO_FEATURE_BACKEND").is_some();
        if is_wasm || !is_backend {
            return;
        }

        println!("cargo:rerun-if-changed=src/frontend");
        println!("cargo:rerun-if-changed=src/site");
        println!("cargo:rerun-if-changed=Trunk.toml");
        println!("cargo:rerun-if-changed=index.html");
        println!("cargo:rerun-if-changed=public");

        println!("cargo:warning=Building frontend with Trunk...");

        let status = Command::new("trunk")
            .args(["build", "--release", "--dist", "dist"])
            .env("CARGO_TARGET_DIR", "target/trunk")
            .status()
            .expect("Failed to execute trunk command. Is trunk installed?");

        if !status.success() {
            panic!(
                "Trunk build failed with exit code: {:?}. \
                 Ensure trunk is installed and the frontend builds successfully.",
                status.code()
            );
        }

        println!("cargo:warning=Frontend build completed successfully");
    }
}
