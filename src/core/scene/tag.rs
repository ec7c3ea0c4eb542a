//=========================================================================
// Scene Tag
//=========================================================================
//
// String identifier of one scene instance on the stack.
//
// Tags are decimal encodings of ids issued by the IdGenerator. They are
// kept as strings because that is the form the host persists them in.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== SceneTag ============================================================

/// Unique identifier for a scene instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneTag(String);

impl SceneTag {
    /// Builds the tag for a generated id.
    pub fn from_id(id: u32) -> Self {
        Self(id.to_string())
    }

    /// Returns the tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the tag back into the id it was generated from.
    ///
    /// Returns `None` for tags that did not come from an IdGenerator.
    pub fn id(&self) -> Option<u32> {
        self.0.parse().ok()
    }

    /// Consumes the tag, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SceneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SceneTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<&str> for SceneTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_owned())
    }
}

impl From<SceneTag> for String {
    fn from(tag: SceneTag) -> Self {
        tag.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
