//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kiraa_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("kiraa_core ping={}", kiraa_core::ping());
    println!("kiraa_core version={}", kiraa_core::core_version());
    println!("kiraa_core default_log_level={}", kiraa_core::default_log_level());
}
