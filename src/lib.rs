//=========================================================================
// Scene Stage — Library Root
//
// This crate manages the navigation stack of a single-host, multi-scene
// application.
//
// Responsibilities:
// - Keep the ordered, tag-indexed stack of scenes
// - Apply launch-mode policy (standard vs. single-top)
// - Coordinate attach/detach between the top scene and the one beneath
// - Delegate back presses and persist the stack across host recreation
//
// Typical usage:
// ```ignore
// use scene_stage::prelude::*;
//
// let mut stage = StageBuilder::new().build(MyHost::new());
// stage.start(Screen::Home)?;
// // ... later, from the host's back button
// stage.handle_back_pressed();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the building blocks: scene contract, stack, id
// generation, transition planning, and the host bridge. It is public for
// hosts that need those types directly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `stage` defines the controller façade and its builder.
//
mod stage;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the controller and builder so hosts can simply
// `use scene_stage::StageBuilder;`.
//
pub use stage::{BackOutcome, FinishOutcome, Launch, StageBuilder, StageController, StartOutcome};
