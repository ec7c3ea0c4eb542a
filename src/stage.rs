//=========================================================================
// Stage Controller
//=========================================================================
//
// Orchestrating façade over the scene stack.
//
// Architecture:
// ```text
//   Host events ──► StageController ──► TransitionDirective ──► StageHost
//                     ├─ SceneStack        (navigation order)
//                     ├─ IdGenerator       (fresh tags)
//                     ├─ TransitionCoordinator
//                     └─ RequestCollector  (queued StageHandle requests)
// ```
//
// Invariants:
// - Tags on the stack are unique.
// - Finishing the only remaining scene terminates the host instead of
//   emptying the stack.
// - Stack mutation is committed before the directive reaches the host
//   and is never rolled back.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::host_bridge::{NavigationRequest, RequestCollector, StageError, StageHandle, StageHost};
use crate::core::scene::{LaunchMode, SavedStack, Scene, SceneStack, SceneTag, TransitionCoordinator};
use crate::core::IdGenerator;

//=== Module Declarations =================================================

mod builder;
mod launch;

#[cfg(test)]
pub(crate) mod test_host;

//=== Public API ==========================================================

pub use builder::StageBuilder;
pub use launch::Launch;

//=== Outcomes ============================================================

/// Result of [`StageController::start_scene`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new scene was pushed under this tag.
    Started(SceneTag),

    /// The single-top scene on top was reused.
    Reused(SceneTag),

    /// The host has already terminated.
    Ignored,
}

/// Result of [`StageController::finish_scene`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    /// The scene was removed from the stack.
    Finished {
        removed: SceneTag,
        new_top: Option<SceneTag>,
    },

    /// It was the last scene; the host was terminated instead.
    HostTerminated,

    /// Unknown tag or terminated host; nothing happened.
    Ignored,
}

/// Result of [`StageController::handle_back_pressed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// The top scene handled the back press itself.
    Consumed,

    /// The top scene with this tag was finished.
    Finished(SceneTag),

    /// Only one scene was left; the host was terminated.
    HostTerminated,

    /// Empty stack, unresolvable top, or terminated host.
    Ignored,
}

//=== StageController =====================================================

/// Manages the scene stack of one host.
///
/// Create through [`StageBuilder`]. The host forwards its navigation
/// events (scene starts, back presses, save/restore) to the controller,
/// which mutates the stack and tells the host what to attach, detach,
/// add, and remove.
pub struct StageController<H: StageHost> {
    host: H,
    stack: SceneStack,
    ids: IdGenerator,
    coordinator: TransitionCoordinator,
    sender: Sender<NavigationRequest<H::Key, H::Scene>>,
    requests: RequestCollector<H::Key, H::Scene>,
    terminated: bool,
}

impl<H: StageHost> StageController<H> {
    //--- Starting Scenes --------------------------------------------------

    /// Starts a scene of type `key` with no arguments.
    pub fn start(&mut self, key: H::Key) -> Result<StartOutcome, StageError> {
        self.start_scene(Launch::new(key))
    }

    /// Starts a scene as described by `launch`.
    ///
    /// If the scene on top has the same type and is single-top, it is
    /// reused: it receives the launch arguments (when there are any) and
    /// the stack is left alone. Otherwise a new scene is created, pushed
    /// under a fresh tag, and the old top is detached (or handed to the
    /// launch's transition strategy).
    ///
    /// # Errors
    ///
    /// [`StageError::Instantiation`] if the host cannot create the scene,
    /// and [`StageError::Stack`] if the new tag collides with one already
    /// on the stack. Both leave stack and host untouched.
    pub fn start_scene(&mut self, launch: Launch<H::Key, H::Scene>) -> Result<StartOutcome, StageError> {
        if self.terminated {
            warn!("start_scene: host already terminated, ignoring {:?}", launch);
            return Ok(StartOutcome::Ignored);
        }

        let (key, arguments, mut transition) = launch.into_parts();

        // Resolve the current top
        let old_tag = match self.stack.top() {
            Some(tag) if self.host.find_scene(tag).is_some() => Some(tag.clone()),
            Some(tag) => {
                warn!("start_scene: can't find scene for top tag {}", tag);
                None
            }
            None => None,
        };

        // Launch mode single top
        if let Some(tag) = &old_tag {
            if let Some(old) = self.host.find_scene_mut(tag) {
                if old.key() == key && old.launch_mode() == LaunchMode::SingleTop {
                    debug!("Reusing single-top scene {} for {:?}", tag, key);
                    if let Some(arguments) = arguments {
                        old.on_new_arguments(arguments);
                    }
                    return Ok(StartOutcome::Reused(tag.clone()));
                }
            }
        }

        // New scene
        let mut scene = self.host.create_scene(key).map_err(|e| {
            error!("start_scene: {}", e);
            StageError::from(e)
        })?;
        scene.set_arguments(arguments);
        let hint = scene.soft_input_mode();

        let tag = SceneTag::from_id(self.ids.next_id());
        self.stack.push(tag.clone()).map_err(|e| {
            error!("start_scene: {}", e);
            StageError::from(e)
        })?;

        let directive = match (transition.as_deref_mut(), &old_tag) {
            (Some(strategy), Some(old_tag)) => match self.host.find_scene(old_tag) {
                Some(old) => self
                    .coordinator
                    .plan_custom_push(tag.clone(), scene, old_tag, old, strategy),
                None => self.coordinator.plan_push(tag.clone(), scene, Some(old_tag)),
            },
            _ => self.coordinator.plan_push(tag.clone(), scene, old_tag.as_ref()),
        };

        info!("Started scene {:?} as {}", key, tag);
        self.host.apply_transaction(directive);
        self.host.set_soft_input_hint(hint);

        Ok(StartOutcome::Started(tag))
    }

    //--- Finishing Scenes -------------------------------------------------

    /// Finishes the scene tagged `tag`.
    ///
    /// Unknown tags are logged and ignored. Finishing the only scene on
    /// the stack terminates the host and leaves the stack as it is.
    pub fn finish_scene(&mut self, tag: &SceneTag) -> FinishOutcome {
        if self.terminated {
            warn!("finish_scene: host already terminated, ignoring {}", tag);
            return FinishOutcome::Ignored;
        }

        if self.host.find_scene(tag).is_none() {
            warn!("finish_scene: can't find scene by tag {}", tag);
            return FinishOutcome::Ignored;
        }

        if !self.stack.contains(tag) {
            warn!("finish_scene: can't find tag {} in the stack", tag);
            return FinishOutcome::Ignored;
        }

        if self.stack.len() == 1 {
            info!("finish_scene: {} is the last scene, terminating host", tag);
            self.terminate_host();
            return FinishOutcome::HostTerminated;
        }

        let was_attached = self.host.is_attached(tag);
        if let Err(e) = self.stack.remove(tag) {
            warn!("finish_scene: {}", e);
            return FinishOutcome::Ignored;
        }

        let new_top = self.stack.top().cloned();
        let new_top_state = new_top.as_ref().map(|t| (t, self.host.is_attached(t)));
        let directive = self.coordinator.plan_pop(tag.clone(), was_attached, new_top_state);

        info!("Finished scene {} (new top: {:?})", tag, new_top);
        self.host.apply_transaction(directive);

        if let Some(top) = &new_top {
            if let Some(hint) = self.host.find_scene(top).map(|s| s.soft_input_mode()) {
                self.host.set_soft_input_hint(hint);
            }
        }

        FinishOutcome::Finished {
            removed: tag.clone(),
            new_top,
        }
    }

    //--- Back Navigation --------------------------------------------------

    /// Handles a back press from the host.
    ///
    /// The top scene gets first refusal. If it declines, the top scene is
    /// finished when others remain beneath it, otherwise the host is
    /// terminated. The decision uses the stack size before any change.
    pub fn handle_back_pressed(&mut self) -> BackOutcome {
        if self.terminated {
            warn!("handle_back_pressed: host already terminated");
            return BackOutcome::Ignored;
        }

        let Some(tag) = self.stack.top().cloned() else {
            warn!("handle_back_pressed: scene stack is empty");
            return BackOutcome::Ignored;
        };
        let size = self.stack.len();

        let Some(scene) = self.host.find_scene_mut(&tag) else {
            warn!("handle_back_pressed: can't find scene by tag {}", tag);
            return BackOutcome::Ignored;
        };

        if scene.on_back_pressed() {
            debug!("Back press consumed by scene {}", tag);
            return BackOutcome::Consumed;
        }

        if size > 1 {
            match self.finish_scene(&tag) {
                FinishOutcome::Finished { removed, .. } => BackOutcome::Finished(removed),
                FinishOutcome::HostTerminated => BackOutcome::HostTerminated,
                FinishOutcome::Ignored => BackOutcome::Ignored,
            }
        } else {
            info!("handle_back_pressed: last scene, terminating host");
            self.terminate_host();
            BackOutcome::HostTerminated
        }
    }

    //--- Queued Requests --------------------------------------------------

    /// Returns a handle scenes can use to queue navigation requests.
    pub fn handle(&self) -> StageHandle<H::Key, H::Scene> {
        StageHandle::new(self.sender.clone())
    }

    /// Applies queued requests in FIFO order.
    ///
    /// Returns how many requests were applied. Stops at the first start
    /// that fails; requests after it stay queued.
    pub fn process_requests(&mut self) -> Result<usize, StageError> {
        let mut applied = 0;
        let mut requests = self.requests.collect().into_iter();

        while let Some(request) = requests.next() {
            debug!("Processing navigation request {:?}", request);
            let result = match request {
                NavigationRequest::Start(launch) => self.start_scene(launch).map(|_| ()),
                NavigationRequest::Finish(tag) => {
                    self.finish_scene(&tag);
                    Ok(())
                }
                NavigationRequest::Back => {
                    self.handle_back_pressed();
                    Ok(())
                }
            };

            if let Err(e) = result {
                self.requests.requeue_front(requests);
                return Err(e);
            }
            applied += 1;
        }

        Ok(applied)
    }

    /// Number of queued requests not yet applied.
    pub fn pending_requests(&self) -> usize {
        self.requests.pending()
    }

    //--- State Persistence ------------------------------------------------

    /// Snapshot of the stack for the host to persist.
    pub fn save_state(&self) -> SavedStack {
        SavedStack {
            scene_tags: self.stack.to_ordered_list(),
        }
    }

    /// Replaces the stack with a saved snapshot.
    ///
    /// Scenes are not recreated here; the host restores its own scenes
    /// under the same tags. The id generator is moved past every numeric
    /// restored tag so new scenes never reuse one.
    ///
    /// # Errors
    ///
    /// [`StageError::Stack`] if the snapshot lists a tag twice. The
    /// current stack is kept in that case.
    pub fn restore_state(&mut self, saved: SavedStack) -> Result<(), StageError> {
        self.stack.restore_from(saved.scene_tags).map_err(|e| {
            error!("restore_state: {}", e);
            StageError::from(e)
        })?;

        for tag in self.stack.iter() {
            match tag.id() {
                Some(id) => self.ids.advance_past(id),
                None => warn!("restore_state: tag {} is not a generated id", tag),
            }
        }

        info!("Restored {} scenes, next tag {}", self.stack.len(), self.ids.peek());
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// Tag of the scene on top.
    pub fn top_tag(&self) -> Option<&SceneTag> {
        self.stack.top()
    }

    /// Stack position of `tag`, counting from the bottom.
    pub fn stack_index(&self, tag: &SceneTag) -> Option<usize> {
        self.stack.index_of(tag)
    }

    /// Number of scenes on the stack.
    pub fn scene_count(&self) -> usize {
        self.stack.len()
    }

    /// Tags bottom to top.
    pub fn scene_tags(&self) -> impl Iterator<Item = &SceneTag> {
        self.stack.iter()
    }

    /// True once the host has been told to terminate.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    //--- Internal Helpers -------------------------------------------------

    fn terminate_host(&mut self) {
        self.terminated = true;
        self.host.terminate();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
