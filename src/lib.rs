//! # Scholaris
//!
//! Public entry of the school management portal: a landing page, a login
//! page and a four step registration wizard (email, one-time code, password,
//! success).
//!
//! The crate builds for two targets:
//!
//! - `wasm32`: the [`web`] module renders the pages with Leptos and is mounted
//!   by the `scholaris-web` binary. Only its configuration loader is built
//!   natively.
//! - native: the `scholaris` binary serves the compiled bundle through
//!   [`portal`], configured by [`cli`].
//!
//! [`registration`] holds the wizard logic shared by both and is tested natively.

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod portal;
pub mod registration;
pub mod web;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(GIT_COMMIT_HASH.len() >= 7);
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "scholaris");
    }
}
