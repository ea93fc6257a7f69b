//! The three flower axes

use super::axis::{ActuatorAxis, AxisId};
use crate::config::{MotionConfig, Pose};
use crate::traits::{ActuatorError, Actuators, AxisDrive};

/// One axis of an [`Actuators`] set seen as a single drive
struct Channel<'a, A> {
    actuators: &'a mut A,
    id: AxisId,
}

impl<A: Actuators> AxisDrive for Channel<'_, A> {
    fn move_to(&mut self, from_deg: f32, to_deg: f32) -> Result<(), ActuatorError> {
        self.actuators.move_to(self.id, from_deg, to_deg)
    }

    fn rezero(&mut self, deg: f32) -> Result<(), ActuatorError> {
        self.actuators.rezero(self.id, deg)
    }
}

/// Base, arm and head axes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    pub base: ActuatorAxis,
    pub arm: ActuatorAxis,
    pub head: ActuatorAxis,
}

impl Axes {
    pub fn from_config(motion: &MotionConfig) -> Self {
        Self {
            base: ActuatorAxis::from_config(&motion.base),
            arm: ActuatorAxis::from_config(&motion.arm),
            head: ActuatorAxis::from_config(&motion.head),
        }
    }

    pub fn get(&self, id: AxisId) -> &ActuatorAxis {
        match id {
            AxisId::Base => &self.base,
            AxisId::Arm => &self.arm,
            AxisId::Head => &self.head,
        }
    }

    pub fn get_mut(&mut self, id: AxisId) -> &mut ActuatorAxis {
        match id {
            AxisId::Base => &mut self.base,
            AxisId::Arm => &mut self.arm,
            AxisId::Head => &mut self.head,
        }
    }

    /// Set arm and head targets from a pose; the base is left alone
    pub fn set_pose(&mut self, pose: &Pose) {
        self.arm.set_target(pose.arm_deg);
        self.head.set_target(pose.head_deg);
    }

    /// Set every target to zero
    pub fn zero_targets(&mut self) {
        for id in AxisId::ALL {
            self.get_mut(id).set_target(0.0);
        }
    }

    /// Advance every axis once, in `AxisId::ALL` order
    pub fn advance_all<A: Actuators>(
        &mut self,
        now_ms: u32,
        actuators: &mut A,
    ) -> [Result<bool, ActuatorError>; 3] {
        AxisId::ALL.map(|id| {
            let mut channel = Channel {
                actuators: &mut *actuators,
                id,
            };
            self.get_mut(id).advance(now_ms, &mut channel)
        })
    }

    /// Check if every axis is within one step of its target
    pub fn all_at_target(&self) -> bool {
        AxisId::ALL.iter().all(|&id| self.get(id).is_at_target())
    }
}
