use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Dev marker reported by /health so we can see whether the running server
    // is the newest binary.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITY_SIGNUP_BUILD_ID={}", build_id);
}
