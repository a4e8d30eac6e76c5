//! Shared re-exports for the smart irrigation crates.
//!
//! Every crate pulls its error type, byte buffers and randomness through here so
//! that versions stay aligned across the workspace.

pub use ::anyhow::{self, Error, Result, anyhow};
pub use bytes::Bytes;
pub use rand;

pub mod utils;

pub mod sync {
    pub use tokio::sync::Mutex;
}

/// Short unique identifier used for model generations and error reports.
pub fn create_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::{Error, Result, anyhow, create_id};

    #[test]
    fn ids_are_unique_and_compact() {
        let a = create_id();
        let b = create_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(!a.contains('-'));
    }

    #[test]
    fn anyhow_reexports_resolve() {
        let failing = || -> Result<()> { Err(anyhow!("dataset {} missing", "crops.csv")) };
        let err: Error = failing().unwrap_err();
        assert_eq!(err.to_string(), "dataset crops.csv missing");

        let wrapped = anyhow::Error::msg("disk full");
        assert_eq!(wrapped.to_string(), "disk full");
    }
}
