//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges the host view system (container, windowing, toolkit lifecycle)
// with the stage controller.
//
// This module defines the contract between host implementations and the
// navigation logic, so any UI host can drive the stage without the stage
// knowing the host's primitives.
//
// Components:
// - `interface`: Host trait and error definitions (the contract)
// - `request_collector`: Queued navigation requests and their collector
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;
pub(crate) mod request_collector;

//=== Public API ==========================================================

pub use interface::{InstantiationError, StageError, StageHost};
pub use request_collector::{NavigationRequest, StageHandle};
pub(crate) use request_collector::RequestCollector;
