//=========================================================================
// Transition Coordinator
//=========================================================================
//
// Decides which scenes are added, removed, attached, and detached for a
// push or a pop.
//
// Rules:
//   push  → add new; detach old top (unless a strategy takes over)
//   pop   → remove finishing scene; if it was the visible one, attach
//           the new top when that scene is currently detached
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{SceneTag, TransitionDirective, TransitionStrategy};

//=== TransitionCoordinator ===============================================

/// Builds the [`TransitionDirective`] for each navigation step.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransitionCoordinator;

impl TransitionCoordinator {
    pub fn new() -> Self {
        Self
    }

    //--- Push -------------------------------------------------------------

    /// Plans a default push: add the new scene, detach the old top.
    pub fn plan_push<S>(&self, new_tag: SceneTag, new_scene: S, old_tag: Option<&SceneTag>) -> TransitionDirective<S> {
        let mut directive = TransitionDirective::empty();
        directive.scene_to_detach = old_tag.cloned();

        debug!("Planned push of {} (detach: {:?})", new_tag, directive.scene_to_detach);
        directive.scene_to_add = Some((new_tag, new_scene));
        directive
    }

    /// Plans a push shaped by `strategy`.
    ///
    /// The strategy starts from a directive that only adds the new scene,
    /// and decides itself whether `old` is detached. The new tag is
    /// already on the stack, so the strategy must leave `scene_to_add` in
    /// place and must not set `scene_to_remove`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the strategy broke either rule.
    pub fn plan_custom_push<S, T>(
        &self,
        new_tag: SceneTag,
        new_scene: S,
        old_tag: &SceneTag,
        old: &S,
        strategy: &mut T,
    ) -> TransitionDirective<S>
    where
        T: TransitionStrategy<S> + ?Sized,
    {
        let expected = new_tag.clone();
        let mut directive = TransitionDirective::empty();
        directive.scene_to_add = Some((new_tag, new_scene));
        directive.use_custom_transition = true;

        strategy.on_transition(old_tag, old, &mut directive);

        debug_assert!(
            directive.added_tag() == Some(&expected),
            "Transition strategy must keep the new scene in the directive"
        );
        debug_assert!(
            directive.scene_to_remove.is_none(),
            "Transition strategy must not remove scenes"
        );

        debug!("Planned custom push: {:?}", directive);
        directive
    }

    //--- Pop --------------------------------------------------------------

    /// Plans the removal of `finishing`.
    ///
    /// `new_top` is the tag on top once `finishing` is gone, paired with
    /// whether the host currently shows it.
    pub fn plan_pop<S>(
        &self,
        finishing: SceneTag,
        finishing_was_attached: bool,
        new_top: Option<(&SceneTag, bool)>,
    ) -> TransitionDirective<S> {
        let mut directive = TransitionDirective::empty();

        if finishing_was_attached {
            if let Some((tag, false)) = new_top {
                directive.scene_to_attach = Some(tag.clone());
            }
        }

        debug!("Planned pop of {} (attach: {:?})", finishing, directive.scene_to_attach);
        directive.scene_to_remove = Some(finishing);
        directive
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
