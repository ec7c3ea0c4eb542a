//=========================================================================
// Scene System
//=========================================================================
//
// Scene contract, tag-indexed stack, and transition planning.
//
// Architecture:
//   StageController
//     ├─ stack: SceneStack          (ordered SceneTags)
//     ├─ ids: IdGenerator           (fresh tags)
//     └─ coordinator: TransitionCoordinator
//                          ↓
//                 TransitionDirective → StageHost::apply_transaction()
//
// Scenes themselves live in the host. The stack only holds their tags.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

//=== Module Declarations =================================================

mod scene_stack;
mod tag;
mod transition;
mod transition_coordinator;

//=== Public API ==========================================================

pub use scene_stack::{SavedStack, SceneStack, StackError, STAGE_SCENE_TAG_LIST_KEY};
pub use tag::SceneTag;
pub use transition::{TransitionDirective, TransitionStrategy};
pub use transition_coordinator::TransitionCoordinator;

//=== Scene Key Trait =====================================================

/// Marker trait for scene type identifiers.
///
/// A key names a *kind* of scene; the host turns it into a fresh scene
/// instance in `StageHost::create_scene`. Typically implemented by an
/// application enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Launch Mode =========================================================

/// How a scene behaves when its type is started while it is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaunchMode {
    /// Every start pushes a new instance.
    #[default]
    Standard,

    /// Starting the type while it is on top reuses the visible instance
    /// and hands it the new arguments.
    SingleTop,
}

//=== Soft Input Mode =====================================================

/// Opaque soft-keyboard hint forwarded to the host whenever the top
/// scene changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SoftInputMode(pub u32);

impl SoftInputMode {
    /// No preference; the host keeps its default behavior.
    pub const UNSPECIFIED: Self = Self(0);
}

//=== Arguments ===========================================================

/// Key-value payload handed to a scene when it is started.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Arguments {
    entries: BTreeMap<String, String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

//=== Scene Trait =========================================================

/// One navigable unit of screen content.
///
/// Scenes are created and owned by the host. The controller reaches them
/// by tag through `StageHost::find_scene` / `find_scene_mut` and only
/// calls the hooks below.
///
/// # Minimal Implementation
///
/// Only `key()` and `set_arguments()` are required:
///
/// ```rust
/// # use scene_stage::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Gallery }
/// # impl SceneKey for Screen {}
/// struct GalleryScene {
///     arguments: Option<Arguments>,
/// }
///
/// impl Scene<Screen> for GalleryScene {
///     fn key(&self) -> Screen {
///         Screen::Gallery
///     }
///
///     fn set_arguments(&mut self, arguments: Option<Arguments>) {
///         self.arguments = arguments;
///     }
/// }
/// ```
pub trait Scene<K: SceneKey> {
    /// Runtime type of this scene.
    fn key(&self) -> K;

    /// Called once, right after creation and before the scene is added.
    fn set_arguments(&mut self, arguments: Option<Arguments>);

    /// Launch policy for this scene.
    fn launch_mode(&self) -> LaunchMode {
        LaunchMode::Standard
    }

    /// Soft input hint applied while this scene is on top.
    fn soft_input_mode(&self) -> SoftInputMode {
        SoftInputMode::UNSPECIFIED
    }

    /// Called when a single-top scene is started again while on top.
    fn on_new_arguments(&mut self, _arguments: Arguments) {}

    /// Gives the scene first refusal on a back press.
    ///
    /// Returns true if the scene consumed the event.
    fn on_back_pressed(&mut self) -> bool {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
