//=========================================================================
// Transition Directive
//=========================================================================
//
// Description of one navigation step for the host to realize.
//
// A directive is built by the TransitionCoordinator, optionally reshaped
// by a TransitionStrategy, and handed to StageHost::apply_transaction(),
// which must apply all of its parts as one visual transaction.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::SceneTag;

//=== TransitionDirective =================================================

/// What the host must do for one navigation event.
///
/// The new scene travels inside `scene_to_add`; every other part refers
/// to scenes the host already owns, by tag.
pub struct TransitionDirective<S> {
    /// Newly created scene to add to the container under its tag.
    pub scene_to_add: Option<(SceneTag, S)>,

    /// Scene to remove from the container and drop.
    pub scene_to_remove: Option<SceneTag>,

    /// Detached scene to attach (make visible) again.
    pub scene_to_attach: Option<SceneTag>,

    /// Scene to detach. It stays on the stack but is no longer visible.
    pub scene_to_detach: Option<SceneTag>,

    /// True when a TransitionStrategy shaped this directive; the host
    /// should skip its default animation.
    pub use_custom_transition: bool,
}

impl<S> TransitionDirective<S> {
    /// Creates a directive that does nothing.
    pub fn empty() -> Self {
        Self {
            scene_to_add: None,
            scene_to_remove: None,
            scene_to_attach: None,
            scene_to_detach: None,
            use_custom_transition: false,
        }
    }

    /// Returns true if the directive asks the host for no change at all.
    pub fn is_empty(&self) -> bool {
        self.scene_to_add.is_none()
            && self.scene_to_remove.is_none()
            && self.scene_to_attach.is_none()
            && self.scene_to_detach.is_none()
    }

    /// Tag of the scene being added, if any.
    pub fn added_tag(&self) -> Option<&SceneTag> {
        self.scene_to_add.as_ref().map(|(tag, _)| tag)
    }

    /// The scene being added, if any.
    pub fn added_scene(&self) -> Option<&S> {
        self.scene_to_add.as_ref().map(|(_, scene)| scene)
    }
}

impl<S> Default for TransitionDirective<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> fmt::Debug for TransitionDirective<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionDirective")
            .field("add", &self.added_tag())
            .field("remove", &self.scene_to_remove)
            .field("attach", &self.scene_to_attach)
            .field("detach", &self.scene_to_detach)
            .field("custom", &self.use_custom_transition)
            .finish()
    }
}

//=== TransitionStrategy ==================================================

/// Custom transition hook supplied with a scene launch.
///
/// When a launch carries a strategy and a scene is already on top, the
/// coordinator hands the strategy a directive that only adds the new
/// scene. The strategy decides what happens to the old one: detach it,
/// or leave it attached for shared-element and crossfade transitions.
/// It may set `scene_to_detach` and `scene_to_attach`; the added scene
/// must stay in place and nothing may be removed.
///
/// Closures with the matching signature implement this trait.
pub trait TransitionStrategy<S> {
    fn on_transition(&mut self, old_tag: &SceneTag, old: &S, directive: &mut TransitionDirective<S>);
}

impl<S, F> TransitionStrategy<S> for F
where
    F: FnMut(&SceneTag, &S, &mut TransitionDirective<S>),
{
    fn on_transition(&mut self, old_tag: &SceneTag, old: &S, directive: &mut TransitionDirective<S>) {
        self(old_tag, old, directive)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
