//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Host-to-stage contract (collaborator trait and errors).
//
// The host owns every scene instance and realizes transitions; the stage
// only tracks tags and decides what should happen.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::scene::{Scene, SceneKey, SceneTag, SoftInputMode, StackError, TransitionDirective};

//=== StageHost ===========================================================

/// The view/container system a stage runs inside.
///
/// Implementations wrap whatever the UI toolkit offers for hosting
/// scene content (fragment managers, DOM containers, retained-mode
/// widget trees) and apply each [`TransitionDirective`] as one atomic
/// visual transaction.
pub trait StageHost {
    /// Identifier of a scene type.
    type Key: SceneKey;

    /// Concrete scene type owned by the host.
    type Scene: Scene<Self::Key>;

    /// Instantiates a fresh scene of type `key`.
    fn create_scene(&mut self, key: Self::Key) -> Result<Self::Scene, InstantiationError>;

    /// Looks up a live scene by tag.
    fn find_scene(&self, tag: &SceneTag) -> Option<&Self::Scene>;

    /// Looks up a live scene by tag, mutably.
    fn find_scene_mut(&mut self, tag: &SceneTag) -> Option<&mut Self::Scene>;

    /// Returns true if the scene tagged `tag` is currently attached.
    fn is_attached(&self, tag: &SceneTag) -> bool;

    /// Realizes every part of `directive` as one transaction.
    fn apply_transaction(&mut self, directive: TransitionDirective<Self::Scene>);

    /// Applies the soft input hint of the scene now on top.
    fn set_soft_input_hint(&mut self, hint: SoftInputMode);

    /// Shuts the host down. Called when the last scene goes away.
    fn terminate(&mut self);
}

//=== InstantiationError ==================================================

/// A scene type could not be constructed.
///
/// This is a configuration error in the host, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantiationError {
    /// Debug rendering of the scene key.
    pub key: String,

    /// Host-provided explanation.
    pub reason: String,
}

impl InstantiationError {
    pub fn new(key: impl fmt::Debug, reason: impl Into<String>) -> Self {
        Self {
            key: format!("{:?}", key),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InstantiationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Can't instantiate scene {}: {}", self.key, self.reason)
    }
}

impl std::error::Error for InstantiationError {}

//=== StageError ==========================================================

/// Hard failures surfaced by the stage.
///
/// Lookup inconsistencies (unknown tags, unresolvable scenes) are not
/// errors; they are logged and the operation becomes a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// The scene stack rejected a push or restore. Only a duplicate tag
    /// gets here, which means the id generator collided.
    Stack(StackError),

    /// The host failed to create a scene.
    Instantiation(InstantiationError),

    /// The navigation request queue is full.
    RequestQueueFull,

    /// The stage that owned the request queue has been dropped.
    StageClosed,
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack(e) => write!(f, "Scene stack invariant violated: {}", e),
            Self::Instantiation(e) => write!(f, "{}", e),
            Self::RequestQueueFull => write!(f, "Navigation request queue is full"),
            Self::StageClosed => write!(f, "Stage is closed"),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stack(e) => Some(e),
            Self::Instantiation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StackError> for StageError {
    fn from(e: StackError) -> Self {
        Self::Stack(e)
    }
}

impl From<InstantiationError> for StageError {
    fn from(e: InstantiationError) -> Self {
        Self::Instantiation(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug)]
    enum Screen {
        Gallery,
    }

    #[test]
    fn instantiation_error_names_key() {
        let err = InstantiationError::new(Screen::Gallery, "no constructor registered");
        assert_eq!(err.key, "Gallery");
        assert_eq!(
            err.to_string(),
            "Can't instantiate scene Gallery: no constructor registered"
        );
    }

    #[test]
    fn stage_error_wraps_instantiation_source() {
        let err: StageError = InstantiationError::new(Screen::Gallery, "boom").into();
        assert!(matches!(err, StageError::Instantiation(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn stack_errors_convert() {
        let err: StageError = StackError::DuplicateTag(SceneTag::from_id(3)).into();
        assert_eq!(err, StageError::Stack(StackError::DuplicateTag(SceneTag::from_id(3))));
        assert_eq!(
            err.to_string(),
            "Scene stack invariant violated: Scene tag 3 is already on the stack"
        );
    }
}
