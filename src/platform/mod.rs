//! Platform abstraction layer
//!
//! The window, keyboard and frame pacing belong to whatever hosts the game.
//! A host implements [`Platform`]; [`HeadlessPlatform`] runs without any
//! window, driven by the autopilot.

use crate::renderer::Frame;
use crate::sim::TickInput;

/// Window, input and presentation supplied by the host
pub trait Platform {
    /// True once the user asked to close the window
    fn should_close(&self) -> bool;

    /// Keyboard state for this frame
    fn poll_input(&mut self) -> TickInput;

    /// Show a finished frame; also where the host holds the frame rate
    fn present(&mut self, frame: &Frame);
}

/// Runs a fixed number of frames with no window
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    frames_left: u64,
    /// Frames presented so far
    pub presented: u64,
    /// Triangle vertices in the most recent frame
    pub last_vertex_count: usize,
}

impl HeadlessPlatform {
    pub fn new(frames: u64) -> Self {
        Self {
            frames_left: frames,
            presented: 0,
            last_vertex_count: 0,
        }
    }
}

impl Platform for HeadlessPlatform {
    fn should_close(&self) -> bool {
        self.frames_left == 0
    }

    fn poll_input(&mut self) -> TickInput {
        TickInput {
            autopilot: true,
            ..Default::default()
        }
    }

    fn present(&mut self, frame: &Frame) {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.presented += 1;
        self.last_vertex_count = frame.tessellate().len();
    }
}
