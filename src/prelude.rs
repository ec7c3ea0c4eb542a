//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use scene_stage::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Stage controller
pub use crate::stage::{BackOutcome, FinishOutcome, Launch, StageBuilder, StageController, StartOutcome};

// Scene system
pub use crate::core::scene::{
    Arguments, LaunchMode, SavedStack, Scene, SceneKey, SceneTag, SoftInputMode,
    TransitionDirective, TransitionStrategy,
};

// Host bridge
pub use crate::core::host_bridge::{InstantiationError, NavigationRequest, StageError, StageHandle, StageHost};
