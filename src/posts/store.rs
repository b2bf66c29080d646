//! In-memory, insertion-ordered post storage.
//!
//! Every operation takes the lock exactly once, so list, create and delete
//! are each a single atomic step even when requests run on many threads.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{CreatePost, Post, PostError};

/// How a new post's id is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `id = current number of posts + 1`. After a delete this can hand out
    /// an id that is still in use (seed 1, 2; delete 1; next create gets 2).
    #[default]
    CountPlusOne,
    /// A counter that only moves forward; ids are never reused.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "count+1" | "count-plus-one" => Ok(Self::CountPlusOne),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(format!("unknown id strategy `{other}` (expected `count` or `monotonic`)")),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountPlusOne => f.write_str("count"),
            Self::Monotonic => f.write_str("monotonic"),
        }
    }
}

struct Inner {
    posts: Vec<Post>,
    /// Highest id ever handed out; drives [`IdStrategy::Monotonic`].
    last_id: u64,
}

/// The process-lifetime collection of posts.
pub struct PostStore {
    inner: Mutex<Inner>,
    ids: IdStrategy,
}

impl PostStore {
    /// An empty store.
    pub fn new(ids: IdStrategy) -> Self {
        Self::with_posts(ids, Vec::new())
    }

    /// A store holding the two example posts every fresh process starts with.
    pub fn seeded(ids: IdStrategy) -> Self {
        Self::with_posts(ids, vec![
            Post {
                id: 1,
                author: "Seigmann".into(),
                content: "Au! Noen spiste beina mine!".into(),
            },
            Post {
                id: 2,
                author: "ikke Henrik".into(),
                content: "Jeg har ikke spist noen bein...".into(),
            },
        ])
    }

    fn with_posts(ids: IdStrategy, posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
        Self { inner: Mutex::new(Inner { posts, last_id }), ids }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids
    }

    /// A lock poisoned by a panicking request still guards a consistent
    /// `Vec`: every mutation is a single push or remove.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All posts in insertion order.
    pub fn list(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates `input`, assigns an id, and appends the post.
    pub fn create(&self, input: CreatePost) -> Result<Post, PostError> {
        let new_post = input.validate()?;

        let mut inner = self.lock();
        let id = match self.ids {
            IdStrategy::CountPlusOne => inner.posts.len() as u64 + 1,
            IdStrategy::Monotonic => inner.last_id + 1,
        };
        inner.last_id = inner.last_id.max(id);

        let post = new_post.into_post(id);
        inner.posts.push(post.clone());
        debug!(id, total = inner.posts.len(), "post created");
        Ok(post)
    }

    /// Removes the first post with `id`. Remaining posts keep their ids.
    pub fn delete(&self, id: u64) -> Result<(), PostError> {
        let mut inner = self.lock();
        let index = inner.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PostError::NotFound(id.to_string()))?;
        inner.posts.remove(index);
        debug!(id, total = inner.posts.len(), "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &PostStore) -> Vec<u64> {
        store.list().iter().map(|p| p.id).collect()
    }

    #[test]
    fn seeded_store_holds_the_two_example_posts() {
        let store = PostStore::seeded(IdStrategy::CountPlusOne);
        let posts = store.list();
        assert_eq!(posts.len(), 2);
        assert_eq!((posts[0].id, posts[0].author.as_str()), (1, "Seigmann"));
        assert_eq!((posts[1].id, posts[1].author.as_str()), (2, "ikke Henrik"));
    }

    #[test]
    fn list_is_stable_without_mutation() {
        let store = PostStore::seeded(IdStrategy::CountPlusOne);
        let first = store.list();
        assert_eq!(store.list(), first);
        assert_eq!(store.list(), first);
    }

    #[test]
    fn creates_on_empty_store_count_up_from_one() {
        for strategy in [IdStrategy::CountPlusOne, IdStrategy::Monotonic] {
            let store = PostStore::new(strategy);
            assert!(store.is_empty());
            for expected in 1..=4 {
                let post = store.create(CreatePost::new("Nils", "Hei")).unwrap();
                assert_eq!(post.id, expected);
            }
            assert_eq!(ids(&store), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn invalid_create_leaves_store_unchanged() {
        let store = PostStore::seeded(IdStrategy::CountPlusOne);
        let err = store.create(CreatePost::new(" ", "Hei")).unwrap_err();
        assert_eq!(err, PostError::Validation);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_removes_exactly_one_without_renumbering() {
        let store = PostStore::seeded(IdStrategy::CountPlusOne);
        let created = store.create(CreatePost::new("Nils", "Hei")).unwrap();
        assert_eq!(created.id, 3);

        store.delete(2).unwrap();
        assert_eq!(ids(&store), vec![1, 3]);

        store.delete(3).unwrap();
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn delete_missing_id_is_not_found_and_leaves_store_unchanged() {
        let store = PostStore::seeded(IdStrategy::CountPlusOne);
        assert_eq!(store.delete(999), Err(PostError::NotFound("999".into())));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn count_plus_one_reuses_a_live_id_after_delete() {
        let store = PostStore::seeded(IdStrategy::CountPlusOne);
        store.delete(1).unwrap();

        let post = store.create(CreatePost::new("Nils", "Hei")).unwrap();
        assert_eq!(post.id, 2);
        assert_eq!(ids(&store), vec![2, 2]);

        // Delete-by-id removes the first match only.
        store.delete(2).unwrap();
        let left = store.list();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].author, "Nils");
    }

    #[test]
    fn monotonic_never_reuses_ids() {
        let store = PostStore::seeded(IdStrategy::Monotonic);
        store.delete(2).unwrap();
        assert_eq!(store.create(CreatePost::new("Nils", "Hei")).unwrap().id, 3);
        store.delete(3).unwrap();
        assert_eq!(store.create(CreatePost::new("Nils", "Hei")).unwrap().id, 4);
        assert_eq!(ids(&store), vec![1, 4]);
    }

    #[test]
    fn strategy_parses_from_config_strings() {
        assert_eq!("count".parse::<IdStrategy>(), Ok(IdStrategy::CountPlusOne));
        assert_eq!(" Monotonic ".parse::<IdStrategy>(), Ok(IdStrategy::Monotonic));
        assert!("random".parse::<IdStrategy>().is_err());
        assert_eq!(IdStrategy::Monotonic.to_string(), "monotonic");
    }
}
