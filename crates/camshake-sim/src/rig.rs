use glam::{EulerRot, Quat, Vec3};

use camshake_core::{CameraTransform, TransformSpace, TransformTarget};

/// A camera mounted on a moving parent (a player body, a vehicle), the usual
/// reason to shake in local space.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub parent: CameraTransform,
    pub local: CameraTransform,
}

impl CameraRig {
    /// Parent at `origin` facing `yaw` radians; camera raised by `height`, pitched down.
    pub fn new(origin: Vec3, yaw: f32, height: f32, pitch: f32) -> Self {
        Self {
            parent: CameraTransform::new(origin, Quat::from_rotation_y(yaw)),
            local: CameraTransform::new(
                Vec3::new(0.0, height, 0.0),
                Quat::from_euler(EulerRot::YXZ, 0.0, -pitch, 0.0),
            ),
        }
    }

    pub fn world(&self) -> CameraTransform {
        CameraTransform {
            position: self.parent.position + self.parent.rotation * self.local.position,
            rotation: self.parent.rotation * self.local.rotation,
        }
    }
}

impl TransformTarget for CameraRig {
    fn read_transform(&self, space: TransformSpace) -> Option<CameraTransform> {
        Some(match space {
            TransformSpace::Local => self.local,
            TransformSpace::World => self.world(),
        })
    }

    fn write_transform(&mut self, space: TransformSpace, transform: CameraTransform) {
        match space {
            TransformSpace::Local => self.local = transform,
            TransformSpace::World => {
                let inv = self.parent.rotation.inverse();
                self.local = CameraTransform {
                    position: inv * (transform.position - self.parent.position),
                    rotation: inv * transform.rotation,
                };
            },
        }
    }
}

/// Yaw of a rotation in degrees, for logging.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_write_round_trips() {
        let mut rig = CameraRig::new(Vec3::new(3.0, 0.0, -2.0), 0.7, 1.6, 0.2);
        let world = rig.world();
        rig.write_transform(TransformSpace::World, world);
        let back = rig.world();
        assert!(back.position.abs_diff_eq(world.position, 1e-5));
        assert!(back.rotation.abs_diff_eq(world.rotation, 1e-6));
    }

    #[test]
    fn local_read_is_parent_relative() {
        let rig = CameraRig::new(Vec3::new(100.0, 0.0, 0.0), 0.0, 2.0, 0.0);
        let local = rig
            .read_transform(TransformSpace::Local)
            .expect("rig always has a transform");
        assert_eq!(local.position, Vec3::new(0.0, 2.0, 0.0));
        let world = rig
            .read_transform(TransformSpace::World)
            .expect("rig always has a transform");
        assert_eq!(world.position, Vec3::new(100.0, 2.0, 0.0));
    }

    #[test]
    fn yaw_of_pure_yaw() {
        let q = Quat::from_rotation_y(30f32.to_radians());
        assert!((yaw_degrees(q) - 30.0).abs() < 1e-3);
    }
}
