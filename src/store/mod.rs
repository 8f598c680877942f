//! # Record Store
//!
//! The in-memory joke collection, its id counter, and the flat JSON file
//! it is loaded from and snapshotted to.

pub mod errors;
pub mod joke;
pub mod persist;
pub mod store;

pub use errors::{PersistError, PersistResult, StoreError, StoreResult};
pub use joke::{Joke, JokePatch, NewJoke, RawJoke};
pub use persist::{assign_ids, load_jokes, save_jokes};
pub use store::JokeStore;
