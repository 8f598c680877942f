//! In-memory joke store
//!
//! Owns the ordered collection and the id counter. Callers that share a
//! store between threads wrap it in a single lock; every mutating method
//! takes `&mut self`, so writers are serialized by construction.

use std::collections::HashSet;

use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::joke::{Joke, JokePatch, NewJoke, RawJoke};

/// The record store
#[derive(Debug, Clone, Default)]
pub struct JokeStore {
    jokes: Vec<Joke>,
    last_id: u64,
}

impl JokeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records in load order.
    ///
    /// Records without an id get `position + 1`. The counter starts at the
    /// largest id seen, or 0 for an empty load.
    pub fn initialize(records: Vec<RawJoke>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut jokes = Vec::with_capacity(records.len());
        let mut last_id = 0;

        for (position, raw) in records.into_iter().enumerate() {
            let id = raw.id.unwrap_or(position as u64 + 1);
            if !seen.insert(id) {
                return Err(StoreError::DuplicateId(id));
            }
            last_id = last_id.max(id);
            jokes.push(Joke {
                id,
                kind: raw.kind,
                setup: raw.setup,
                punchline: raw.punchline,
                likes: raw.likes,
                extra: raw.extra,
            });
        }

        Ok(Self { jokes, last_id })
    }

    /// Advance the counter and return the new id
    pub fn next_id(&mut self) -> StoreResult<u64> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        Ok(self.last_id)
    }

    /// Highest id ever handed out or loaded
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// All live records in store order
    pub fn all(&self) -> &[Joke] {
        &self.jokes
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> StoreResult<&Joke> {
        self.jokes
            .iter()
            .find(|j| j.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn get_mut(&mut self, id: u64) -> StoreResult<&mut Joke> {
        self.jokes
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a fully formed record
    pub fn insert(&mut self, joke: Joke) -> StoreResult<Joke> {
        if self.jokes.iter().any(|j| j.id == joke.id) {
            return Err(StoreError::DuplicateId(joke.id));
        }
        self.last_id = self.last_id.max(joke.id);
        debug!(id = joke.id, "joke inserted");
        self.jokes.push(joke.clone());
        Ok(joke)
    }

    /// Assign the next id to `new` and append it
    pub fn create(&mut self, new: NewJoke) -> StoreResult<Joke> {
        let joke = new.into_joke(self.next_id()?);
        debug!(id = joke.id, "joke created");
        self.jokes.push(joke.clone());
        Ok(joke)
    }

    /// Overwrite the non-empty fields of `patch` on the record
    pub fn update(&mut self, id: u64, patch: &JokePatch) -> StoreResult<Joke> {
        let joke = self.get_mut(id)?;
        patch.apply(joke);
        debug!(id, "joke updated");
        Ok(joke.clone())
    }

    /// Remove the record with this id
    pub fn remove(&mut self, id: u64) -> StoreResult<Joke> {
        let index = self
            .jokes
            .iter()
            .position(|j| j.id == id)
            .ok_or(StoreError::NotFound(id))?;
        debug!(id, "joke removed");
        Ok(self.jokes.remove(index))
    }

    /// Remove every record in `ids`, or none of them.
    ///
    /// Duplicate ids collapse. Returns the number of records removed.
    pub fn remove_many(&mut self, ids: &[u64]) -> StoreResult<usize> {
        let wanted: HashSet<u64> = ids.iter().copied().collect();

        let mut missing: Vec<u64> = wanted
            .iter()
            .copied()
            .filter(|id| !self.jokes.iter().any(|j| j.id == *id))
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(StoreError::NotFoundMany(missing));
        }

        let before = self.jokes.len();
        self.jokes.retain(|j| !wanted.contains(&j.id));
        let removed = before - self.jokes.len();
        debug!(removed, "jokes removed in batch");
        Ok(removed)
    }

    /// Add `delta` to the like counter, starting from `delta` when unset.
    ///
    /// A counter already at the edge of its range is left unchanged.
    pub fn adjust_likes(&mut self, id: u64, delta: i64) -> StoreResult<Joke> {
        let joke = self.get_mut(id)?;
        let likes = match joke.likes {
            Some(likes) => likes
                .checked_add(delta)
                .ok_or(StoreError::LikesOutOfRange(id))?,
            None => delta,
        };
        joke.likes = Some(likes);
        debug!(id, likes = ?joke.likes, "likes adjusted");
        Ok(joke.clone())
    }

    /// Copy of the full collection, for persistence
    pub fn snapshot(&self) -> Vec<Joke> {
        self.jokes.clone()
    }
}
