//! Build script: embeds the git hash and pre-checks GPU toolkits.
//!
//! whisper-rs-sys fails with opaque cmake errors when a GPU backend is
//! requested without its toolkit installed, so surface that before the
//! long compile starts.

use std::process::Command;

fn main() {
    // Embed git short hash for version string
    if let Ok(output) = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        && output.status.success()
    {
        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=GIT_HASH={}", hash);
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");

    if cfg!(feature = "cuda") {
        require_tool(
            "nvcc",
            "CUDA toolkit is not installed.\n\
             Install: https://developer.nvidia.com/cuda-downloads\n\
             Or build without CUDA: cargo build --release",
        );
    }
    if cfg!(feature = "vulkan") {
        require_tool(
            "vulkaninfo",
            "Vulkan SDK is not installed.\n\
             Install: https://vulkan.lunarg.com/\n\
             Or build without Vulkan: cargo build --release",
        );
    }
    if cfg!(feature = "hipblas") {
        require_tool(
            "rocminfo",
            "ROCm is not installed.\n\
             Install: https://rocm.docs.amd.com/\n\
             Or build without HipBLAS: cargo build --release",
        );
    }
}

fn require_tool(tool: &str, help: &str) {
    if Command::new(tool).arg("--version").output().is_err() {
        panic!("\n\n`{tool}` not found — {help}\n");
    }
}
