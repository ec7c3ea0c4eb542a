//=========================================================================
// Test Host
//=========================================================================
//
// In-memory StageHost used by the stage tests. Records every directive
// and hint it receives and tracks attached state the way a real
// container would.
//
//=========================================================================

use std::collections::{HashMap, HashSet};

use crate::core::host_bridge::{InstantiationError, StageHost};
use crate::core::scene::{
    Arguments, LaunchMode, Scene, SceneKey, SceneTag, SoftInputMode, TransitionDirective,
};

//=== Screen ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Screen {
    Home,
    List,
    Detail,
    /// Single-top.
    Search,
    /// Cannot be instantiated.
    Broken,
}

impl SceneKey for Screen {}

//=== TestScene ===========================================================

#[derive(Debug)]
pub(crate) struct TestScene {
    pub key: Screen,
    pub launch_mode: LaunchMode,
    pub soft_input: SoftInputMode,
    pub arguments: Option<Arguments>,
    pub new_arguments: Vec<Arguments>,
    pub consume_back: bool,
    pub back_presses: usize,
}

impl Scene<Screen> for TestScene {
    fn key(&self) -> Screen {
        self.key
    }

    fn set_arguments(&mut self, arguments: Option<Arguments>) {
        self.arguments = arguments;
    }

    fn launch_mode(&self) -> LaunchMode {
        self.launch_mode
    }

    fn soft_input_mode(&self) -> SoftInputMode {
        self.soft_input
    }

    fn on_new_arguments(&mut self, arguments: Arguments) {
        self.new_arguments.push(arguments);
    }

    fn on_back_pressed(&mut self) -> bool {
        self.back_presses += 1;
        self.consume_back
    }
}

//=== AppliedDirective ====================================================

/// Tag-only copy of a directive the host applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct AppliedDirective {
    pub add: Option<SceneTag>,
    pub remove: Option<SceneTag>,
    pub attach: Option<SceneTag>,
    pub detach: Option<SceneTag>,
    pub custom: bool,
}

//=== TestHost ============================================================

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub scenes: HashMap<SceneTag, TestScene>,
    pub attached: HashSet<SceneTag>,
    pub applied: Vec<AppliedDirective>,
    pub hints: Vec<SoftInputMode>,
    pub terminated: bool,
    pub created: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self, tag: &SceneTag) -> &TestScene {
        &self.scenes[tag]
    }

    pub fn scene_mut(&mut self, tag: &SceneTag) -> &mut TestScene {
        self.scenes.get_mut(tag).expect("scene is live")
    }

    pub fn attached(&self, tag: &SceneTag) -> bool {
        self.attached.contains(tag)
    }

    pub fn last_applied(&self) -> &AppliedDirective {
        self.applied.last().expect("a directive was applied")
    }
}

impl StageHost for TestHost {
    type Key = Screen;
    type Scene = TestScene;

    fn create_scene(&mut self, key: Screen) -> Result<TestScene, InstantiationError> {
        let launch_mode = match key {
            Screen::Broken => return Err(InstantiationError::new(key, "no constructor")),
            Screen::Search => LaunchMode::SingleTop,
            _ => LaunchMode::Standard,
        };

        self.created += 1;
        Ok(TestScene {
            key,
            launch_mode,
            soft_input: SoftInputMode(key as u32 + 1),
            arguments: None,
            new_arguments: Vec::new(),
            consume_back: false,
            back_presses: 0,
        })
    }

    fn find_scene(&self, tag: &SceneTag) -> Option<&TestScene> {
        self.scenes.get(tag)
    }

    fn find_scene_mut(&mut self, tag: &SceneTag) -> Option<&mut TestScene> {
        self.scenes.get_mut(tag)
    }

    fn is_attached(&self, tag: &SceneTag) -> bool {
        self.attached.contains(tag)
    }

    fn apply_transaction(&mut self, directive: TransitionDirective<TestScene>) {
        let mut record = AppliedDirective {
            custom: directive.use_custom_transition,
            ..Default::default()
        };

        if let Some(tag) = directive.scene_to_remove {
            self.scenes.remove(&tag);
            self.attached.remove(&tag);
            record.remove = Some(tag);
        }
        if let Some(tag) = directive.scene_to_detach {
            self.attached.remove(&tag);
            record.detach = Some(tag);
        }
        if let Some(tag) = directive.scene_to_attach {
            self.attached.insert(tag.clone());
            record.attach = Some(tag);
        }
        if let Some((tag, scene)) = directive.scene_to_add {
            self.scenes.insert(tag.clone(), scene);
            self.attached.insert(tag.clone());
            record.add = Some(tag);
        }

        self.applied.push(record);
    }

    fn set_soft_input_hint(&mut self, hint: SoftInputMode) {
        self.hints.push(hint);
    }

    fn terminate(&mut self) {
        self.terminated = true;
    }
}
