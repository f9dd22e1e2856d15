//! User-facing status lines.
//!
//! One prefixed line per outcome, separate from the tracing diagnostics:
//! success and informational results go to stdout, fatal errors to stderr.
//! A launcher can detect the outcome from the prefix alone.

pub fn success(msg: &str) {
    println!("✅ {msg}");
}

pub fn info(msg: &str) {
    println!("ℹ️ {msg}");
}

pub fn error(msg: &str) {
    eprintln!("❌ {msg}");
}
