//! Scripted input for headless runs.
//!
//! Replays a fixed, repeating sequence of key presses so a headless run
//! exercises every controller path without a window or an input device.

use glam::Vec2;
use lumen_rendering::ControllerInput;

use crate::demo::FrameInput;

/// A deterministic, endless input stream.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frame: u64,
}

impl ScriptedInput {
    /// Frames before the script repeats.
    pub const PERIOD: u64 = 480;

    /// Starts the script at frame zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// The input the script produces on `frame`.
    ///
    /// Tracking is switched on at frame zero. Each period then drives the
    /// demo target forward, turns it right, backs it up and turns it left,
    /// while the view camera strafes right, strafes back and looks around
    /// with the mouse.
    #[must_use]
    pub fn input_for(frame: u64) -> FrameInput {
        let phase = frame % Self::PERIOD;
        let press = ControllerInput::default();

        let target = match phase {
            0..=119 => ControllerInput {
                forward: true,
                ..press
            },
            120..=239 => ControllerInput {
                yaw_right: true,
                ..press
            },
            240..=359 => ControllerInput {
                back: true,
                ..press
            },
            _ => ControllerInput {
                yaw_left: true,
                ..press
            },
        };

        let camera = match phase {
            360..=389 => ControllerInput {
                right: true,
                ..press
            },
            390..=419 => ControllerInput {
                left: true,
                ..press
            },
            _ => press,
        };

        let (mouse_look, mouse_delta) = match phase {
            420..=449 => (true, Vec2::new(4.0, 0.0)),
            450..=479 => (true, Vec2::new(-4.0, 0.0)),
            _ => (false, Vec2::ZERO),
        };

        FrameInput {
            camera,
            target,
            mouse_delta,
            mouse_look,
            track: (frame == 0).then_some(true),
        }
    }
}

impl Iterator for ScriptedInput {
    type Item = FrameInput;

    fn next(&mut self) -> Option<FrameInput> {
        let input = Self::input_for(self.frame);
        self.frame += 1;
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_starts_once() {
        let tracked: Vec<u64> = ScriptedInput::new()
            .take(1000)
            .enumerate()
            .filter(|(_, input)| input.track.is_some())
            .map(|(i, _)| i as u64)
            .collect();
        assert_eq!(tracked, vec![0]);
    }

    #[test]
    fn test_script_repeats() {
        for frame in [5, 130, 250, 370, 400, 430, 460] {
            let a = ScriptedInput::input_for(frame);
            let b = ScriptedInput::input_for(frame + ScriptedInput::PERIOD);
            assert_eq!(a.target, b.target);
            assert_eq!(a.camera, b.camera);
            assert_eq!(a.mouse_delta, b.mouse_delta);
        }
    }

    #[test]
    fn test_camera_strafe_cancels_over_a_period() {
        let (right, left) = (0..ScriptedInput::PERIOD)
            .map(ScriptedInput::input_for)
            .fold((0, 0), |(r, l), input| {
                (r + u32::from(input.camera.right), l + u32::from(input.camera.left))
            });
        assert_eq!(right, left);
    }
}
