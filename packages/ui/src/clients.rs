//! Shared client constructors for the app's two collaborators.
//!
//! Returns a [`store::ProfileStore`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native** (tests, tooling): in-memory via [`store::MemoryStore`]
//!
//! The advisory client is the same on every platform.

use advisor::{Advisor, GeminiClient};

/// Create a platform-appropriate profile store.
///
/// Each call hands out a fresh handle; consumers read a snapshot at their own
/// mount point rather than sharing cached state.
pub fn make_profiles() -> store::ProfileStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::ProfileStore::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::ProfileStore::new(store::MemoryStore::new())
    }
}

/// Create the advisory-service client, configured from the build environment.
pub fn make_advisor() -> Advisor<GeminiClient> {
    Advisor::from_env()
}
