//=========================================================================
// Input
//=========================================================================
//
// Engine-level pointer input. The platform converts OS events into
// `InputEvent`s; the scene host turns them into pointer hook calls.
//
//=========================================================================

pub mod event;

pub use event::{InputEvent, MouseButton};
