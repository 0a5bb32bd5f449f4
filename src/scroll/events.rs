//! Scroll domain: lifecycle commands for embedding code.

use bevy::ecs::message::Message;

/// Request to start or stop the shelf animator.
///
/// Both commands are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    Start,
    Stop,
}

impl Message for ScrollCommand {}
