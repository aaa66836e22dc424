//! The seam between the shake effect and the engine that owns the camera.

use glam::{Quat, Vec3};

/// Position and orientation of a camera in one coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Which transform the effect reads its rest pose from and writes offsets to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransformSpace {
    /// Relative to the camera's parent.
    #[default]
    Local,
    World,
}

impl TransformSpace {
    pub fn from_local_flag(use_local_space: bool) -> Self {
        if use_local_space {
            Self::Local
        } else {
            Self::World
        }
    }
}

/// A camera whose transform the host lets the effect read and overwrite.
pub trait TransformTarget {
    /// `None` when the host cannot supply the transform (e.g. camera not spawned yet).
    fn read_transform(&self, space: TransformSpace) -> Option<CameraTransform>;
    fn write_transform(&mut self, space: TransformSpace, transform: CameraTransform);
}

/// Per-frame timing supplied by the host's main loop.
pub trait FrameClock {
    /// Monotonic seconds since the clock started, at the start of this frame.
    fn current_time_secs(&self) -> f32;
    /// Seconds elapsed since the previous frame.
    fn delta_secs(&self) -> f32;
}

/// Mouse-button edges for one frame: true only on the frame the button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Triggers the position channel.
    pub left_click_pressed: bool,
    /// Triggers the rotation channel.
    pub right_click_pressed: bool,
}

impl FrameInput {
    pub const NONE: Self = Self {
        left_click_pressed: false,
        right_click_pressed: false,
    };

    pub fn left() -> Self {
        Self {
            left_click_pressed: true,
            ..Self::NONE
        }
    }

    pub fn right() -> Self {
        Self {
            right_click_pressed: true,
            ..Self::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_from_flag() {
        assert_eq!(TransformSpace::from_local_flag(true), TransformSpace::Local);
        assert_eq!(TransformSpace::from_local_flag(false), TransformSpace::World);
    }

    #[test]
    fn frame_input_constructors() {
        assert!(FrameInput::left().left_click_pressed);
        assert!(!FrameInput::left().right_click_pressed);
        assert!(FrameInput::right().right_click_pressed);
        assert_eq!(FrameInput::default(), FrameInput::NONE);
    }
}
