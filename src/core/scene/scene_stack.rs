//=========================================================================
// Scene Stack
//=========================================================================
//
// Ordered list of scene tags; the single source of truth for navigation
// order.
//
// Index 0 holds the oldest scene, the last index holds the scene on top.
// Tags are unique. The stack is persisted as the same ordered list of
// strings and restored verbatim.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::SceneTag;

//=== Constants ===========================================================

/// Key under which hosts conventionally store a [`SavedStack`].
pub const STAGE_SCENE_TAG_LIST_KEY: &str = "stage_scene_tag_list";

//=== StackError ==========================================================

/// Stack consistency errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// A tag was pushed (or restored) twice.
    DuplicateTag(SceneTag),

    /// A tag was looked up but is not on the stack.
    NotFound(SceneTag),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTag(tag) => write!(f, "Scene tag {} is already on the stack", tag),
            Self::NotFound(tag) => write!(f, "Scene tag {} is not on the stack", tag),
        }
    }
}

impl std::error::Error for StackError {}

//=== SavedStack ==========================================================

/// Persisted form of the scene stack.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedStack {
    /// Tags ordered bottom to top.
    pub scene_tags: Vec<String>,
}

//=== SceneStack ==========================================================

/// Ordered, duplicate-free sequence of scene tags.
#[derive(Debug, Clone, Default)]
pub struct SceneStack {
    tags: Vec<SceneTag>,
}

impl SceneStack {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the tag on top, if any.
    pub fn top(&self) -> Option<&SceneTag> {
        self.tags.last()
    }

    /// Returns the position of `tag`, counting from the bottom.
    pub fn index_of(&self, tag: &SceneTag) -> Option<usize> {
        self.tags.iter().position(|t| t == tag)
    }

    pub fn contains(&self, tag: &SceneTag) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &SceneTag> {
        self.tags.iter()
    }

    //--- Mutation ---------------------------------------------------------

    /// Pushes `tag` on top.
    pub fn push(&mut self, tag: SceneTag) -> Result<(), StackError> {
        if self.contains(&tag) {
            return Err(StackError::DuplicateTag(tag));
        }

        debug!("Pushing scene {} at position {}", tag, self.tags.len());
        self.tags.push(tag);
        Ok(())
    }

    /// Removes `tag` wherever it sits, returning its former index.
    pub fn remove(&mut self, tag: &SceneTag) -> Result<usize, StackError> {
        let Some(pos) = self.index_of(tag) else {
            return Err(StackError::NotFound(tag.clone()));
        };

        debug!("Removing scene {} from position {}", tag, pos);
        self.tags.remove(pos);
        Ok(pos)
    }

    //--- Persistence ------------------------------------------------------

    /// Returns the tags as strings, bottom to top.
    pub fn to_ordered_list(&self) -> Vec<String> {
        self.tags.iter().cloned().map(SceneTag::into_string).collect()
    }

    /// Replaces the stack with `list`, in order.
    ///
    /// A list containing the same tag twice is rejected and the stack is
    /// left as it was.
    pub fn restore_from<I, T>(&mut self, list: I) -> Result<(), StackError>
    where
        I: IntoIterator<Item = T>,
        T: Into<SceneTag>,
    {
        let restored: Vec<SceneTag> = list.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(restored.len());
        for tag in &restored {
            if !seen.insert(tag) {
                return Err(StackError::DuplicateTag(tag.clone()));
            }
        }

        debug!("Restoring scene stack with {} entries", restored.len());
        self.tags = restored;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tag(id: u32) -> SceneTag {
        SceneTag::from_id(id)
    }

    #[test]
    fn empty_stack_has_no_top() {
        let stack = SceneStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn push_places_tag_on_top() {
        let mut stack = SceneStack::new();
        stack.push(tag(0)).unwrap();
        stack.push(tag(1)).unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&tag(1)));
        assert_eq!(stack.index_of(&tag(0)), Some(0));
    }

    #[test]
    fn push_rejects_duplicate() {
        let mut stack = SceneStack::new();
        stack.push(tag(3)).unwrap();

        assert_eq!(stack.push(tag(3)), Err(StackError::DuplicateTag(tag(3))));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn remove_from_middle_keeps_order() {
        let mut stack = SceneStack::new();
        for id in 0..4 {
            stack.push(tag(id)).unwrap();
        }

        assert_eq!(stack.remove(&tag(1)), Ok(1));
        assert_eq!(stack.to_ordered_list(), vec!["0", "2", "3"]);
    }

    #[test]
    fn remove_missing_tag_fails() {
        let mut stack = SceneStack::new();
        stack.push(tag(0)).unwrap();

        assert_eq!(stack.remove(&tag(9)), Err(StackError::NotFound(tag(9))));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn index_lookup_does_not_assume_sorted_tags() {
        // "10" sorts before "9" as text; lookup must follow insertion order.
        let mut stack = SceneStack::new();
        stack.push(tag(9)).unwrap();
        stack.push(tag(10)).unwrap();

        assert_eq!(stack.index_of(&tag(9)), Some(0));
        assert_eq!(stack.index_of(&tag(10)), Some(1));
    }

    #[test]
    fn restore_rejects_duplicates_and_keeps_state() {
        let mut stack = SceneStack::new();
        stack.push(tag(5)).unwrap();

        let result = stack.restore_from(vec!["1", "2", "1"]);

        assert_eq!(result, Err(StackError::DuplicateTag(SceneTag::from("1"))));
        assert_eq!(stack.to_ordered_list(), vec!["5"]);
    }

    #[test]
    fn restore_accepts_foreign_tags() {
        let mut stack = SceneStack::new();
        stack.restore_from(vec!["home", "3"]).unwrap();
        assert_eq!(stack.top(), Some(&SceneTag::from("3")));
    }

    #[test]
    fn error_messages_name_the_tag() {
        let err = StackError::NotFound(tag(12));
        assert_eq!(err.to_string(), "Scene tag 12 is not on the stack");
    }

    proptest! {
        /// Persisting and restoring reproduces the exact order.
        #[test]
        fn ordered_list_round_trips(ids in proptest::collection::hash_set(any::<u32>(), 0..32)) {
            let mut stack = SceneStack::new();
            for id in &ids {
                stack.push(tag(*id)).unwrap();
            }

            let saved = stack.to_ordered_list();
            let mut restored = SceneStack::new();
            restored.restore_from(saved.clone()).unwrap();

            prop_assert_eq!(restored.to_ordered_list(), saved);
        }
    }
}
