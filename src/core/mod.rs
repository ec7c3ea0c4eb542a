//=========================================================================
// Core
//
// Building blocks the stage controller is composed of.
//
// Responsibilities:
// - `scene`: scene contract, tag-indexed stack, transition planning
// - `host_bridge`: the host collaborator trait, errors, request queue
// - `id_generator`: monotonic ids for scene tags
//
// Notes:
// Everything here runs on the host's UI thread. Nothing blocks and
// nothing is shared; the controller owns one instance of each piece.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod host_bridge;
pub mod scene;

mod id_generator;

//=== Public API ==========================================================

pub use id_generator::IdGenerator;
