//=========================================================================
// Launch
//=========================================================================
//
// Parameters of one scene start: which type, with which arguments, and
// optionally with a custom transition.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::scene::{Arguments, SceneKey, TransitionStrategy};

//=== Launch ==============================================================

/// A request to start a scene of type `K`.
///
/// # Examples
///
/// ```rust
/// # use scene_stage::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Detail }
/// # impl SceneKey for Screen {}
/// # struct DetailScene;
/// let launch: Launch<Screen, DetailScene> = Launch::new(Screen::Detail)
///     .with_arguments(Arguments::new().with("gid", "1024"));
///
/// assert_eq!(launch.arguments().and_then(|a| a.get("gid")), Some("1024"));
/// ```
pub struct Launch<K, S> {
    key: K,
    arguments: Option<Arguments>,
    transition: Option<Box<dyn TransitionStrategy<S> + Send>>,
}

impl<K: SceneKey, S> Launch<K, S> {
    /// Starts `key` with no arguments and the default transition.
    pub fn new(key: K) -> Self {
        Self {
            key,
            arguments: None,
            transition: None,
        }
    }

    /// Attaches the arguments handed to the new scene, or to the reused
    /// scene under single-top.
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Replaces the default transition with `strategy`.
    ///
    /// Only consulted when a scene is already on top.
    pub fn with_transition<T>(mut self, strategy: T) -> Self
    where
        T: TransitionStrategy<S> + Send + 'static,
    {
        self.transition = Some(Box::new(strategy));
        self
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn arguments(&self) -> Option<&Arguments> {
        self.arguments.as_ref()
    }

    pub fn has_custom_transition(&self) -> bool {
        self.transition.is_some()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (K, Option<Arguments>, Option<Box<dyn TransitionStrategy<S> + Send>>) {
        (self.key, self.arguments, self.transition)
    }
}

impl<K: fmt::Debug, S> fmt::Debug for Launch<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Launch")
            .field("key", &self.key)
            .field("arguments", &self.arguments)
            .field("custom_transition", &self.transition.is_some())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
