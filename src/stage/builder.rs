//=========================================================================
// Stage Builder
//=========================================================================
//
// Fluent configuration for a StageController.
//
// ```text
//     StageBuilder  ──build(host)──>  StageController<H>
//         │
//         ├─ with_first_id()
//         └─ with_request_capacity()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::info;

//=== Internal Dependencies ===============================================

use super::StageController;
use crate::core::host_bridge::{RequestCollector, StageHost};
use crate::core::scene::{SceneStack, TransitionCoordinator};
use crate::core::IdGenerator;

//=== StageBuilder ========================================================

/// Builder for configuring and constructing a [`StageController`].
///
/// # Default Values
///
/// - **First id**: 0 (first scene gets tag `"0"`)
/// - **Request capacity**: 32 queued navigation requests
///
/// # Examples
///
/// ```no_run
/// # use scene_stage::prelude::*;
/// # struct MyHost;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main }
/// # impl SceneKey for Screen {}
/// # struct MainScene;
/// # impl Scene<Screen> for MainScene {
/// #     fn key(&self) -> Screen { Screen::Main }
/// #     fn set_arguments(&mut self, _: Option<Arguments>) {}
/// # }
/// # impl StageHost for MyHost {
/// #     type Key = Screen;
/// #     type Scene = MainScene;
/// #     fn create_scene(&mut self, _: Screen) -> Result<MainScene, InstantiationError> { Ok(MainScene) }
/// #     fn find_scene(&self, _: &SceneTag) -> Option<&MainScene> { None }
/// #     fn find_scene_mut(&mut self, _: &SceneTag) -> Option<&mut MainScene> { None }
/// #     fn is_attached(&self, _: &SceneTag) -> bool { false }
/// #     fn apply_transaction(&mut self, _: TransitionDirective<MainScene>) {}
/// #     fn set_soft_input_hint(&mut self, _: SoftInputMode) {}
/// #     fn terminate(&mut self) {}
/// # }
/// let mut stage = StageBuilder::new()
///     .with_request_capacity(64)
///     .build(MyHost);
///
/// stage.start(Screen::Main).expect("main scene");
/// ```
#[derive(Debug, Clone)]
pub struct StageBuilder {
    first_id: u32,
    request_capacity: usize,
}

impl StageBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            first_id: 0,
            request_capacity: 32,
        }
    }

    /// Sets the id the first generated scene tag is built from.
    ///
    /// Default: 0
    pub fn with_first_id(mut self, first_id: u32) -> Self {
        self.first_id = first_id;
        self
    }

    /// Sets how many navigation requests may wait in the queue.
    ///
    /// Default: 32
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_request_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Request capacity must be positive");
        self.request_capacity = capacity;
        self
    }

    /// Builds a controller around `host` with an empty stack.
    pub fn build<H: StageHost>(self, host: H) -> StageController<H> {
        info!(
            "Building stage (first id: {}, request capacity: {})",
            self.first_id, self.request_capacity
        );

        let (sender, receiver) = bounded(self.request_capacity);

        StageController {
            host,
            stack: SceneStack::new(),
            ids: IdGenerator::starting_at(self.first_id),
            coordinator: TransitionCoordinator::new(),
            sender,
            requests: RequestCollector::new(receiver),
            terminated: false,
        }
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
