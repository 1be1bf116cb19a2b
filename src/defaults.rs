//! Default configuration constants for scriba.
//!
//! Shared constants used across the CLI, config file, and pipeline so the
//! same decoding setup is applied no matter how the run was launched.

/// Default target language for recognition.
///
/// The pipeline is tuned for Japanese listening-comprehension recordings;
/// override with `--language` or the config file for other material.
pub const DEFAULT_LANGUAGE: &str = "ja";

/// Beam search width for the recognition decoder.
///
/// 5 trades decode speed for noticeably fewer substitution errors on
/// exam-style audio compared to greedy decoding.
pub const BEAM_SIZE: usize = 5;

/// Priming prompt fed to the recognition decoder.
///
/// Biases the vocabulary toward JLPT listening-comprehension phrasing,
/// which reduces hallucinated openings on the first segment.
pub const INITIAL_PROMPT: &str = "これから聞く音声は日本語能力試験の聴解問題です。";

/// Default directory for the three output files.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Default recognition model tier.
pub const DEFAULT_MODEL: &str = "base";

/// Recognition model size tiers accepted by `--model`.
pub const MODEL_TIERS: &[&str] = &["tiny", "base", "small", "medium", "large-v3"];

/// Map a model tier to its ggml model file name.
pub fn model_file_name(tier: &str) -> String {
    format!("ggml-{tier}.bin")
}

/// Report the GPU backend compiled into this build.
///
/// Returns a human-readable name based on the compile-time feature flags.
/// Only one GPU backend can be active at a time; if none is enabled, returns "CPU".
pub fn gpu_backend() -> &'static str {
    if cfg!(feature = "cuda") {
        "CUDA"
    } else if cfg!(feature = "vulkan") {
        "Vulkan"
    } else if cfg!(feature = "hipblas") {
        "HipBLAS (AMD)"
    } else if cfg!(feature = "openblas") {
        "OpenBLAS"
    } else {
        "CPU"
    }
}
