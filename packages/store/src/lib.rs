pub mod models;
pub mod profile;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use models::{ExamScores, UserProfile};
pub use profile::{KeyValueStore, ProfileStore, PROFILE_KEY};
