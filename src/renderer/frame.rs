//! Per-frame draw list
//!
//! The game doesn't own a window. Each frame it describes what to draw in
//! screen coordinates and the platform puts it on screen. Text is positioned
//! by its horizontal center since measuring glyphs is the platform's job.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{PADDLE_DOT_OFFSET, PADDLE_DOT_RADIUS};
use crate::polar_to_cartesian;
use crate::sim::{GamePhase, GameState};

/// Message shown before the first start
pub const START_PROMPT: &str = "Press SPACE to start";

const SCORE_FONT_SIZE: f32 = 60.0;
const HIGH_SCORE_FONT_SIZE: f32 = 20.0;
const PROMPT_FONT_SIZE: f32 = 30.0;
const CIRCLE_SEGMENTS: u32 = 24;

/// The arena wall as a regular polygon, computed once
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaOutline {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    points: Vec<Vec2>,
}

impl ArenaOutline {
    pub fn new(center: Vec2, radius: f32, sides: usize, thickness: f32) -> Self {
        let sides = sides.max(3);
        let points = (0..sides)
            .map(|i| center + polar_to_cartesian(radius, i as f32 * 360.0 / sides as f32))
            .collect();
        Self {
            center,
            radius,
            thickness,
            points,
        }
    }

    /// Boundary points in drawing order
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// A single thing to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Closed outline through `points`
    PolyLine {
        points: Vec<Vec2>,
        thickness: f32,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Text centered horizontally on `center_x`, top edge at `top`
    Text {
        text: String,
        size: f32,
        center_x: f32,
        top: f32,
        color: [f32; 4],
    },
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Build the frame for the current state
    pub fn build(state: &GameState, outline: &ArenaOutline, screen: Vec2) -> Self {
        let center = outline.center;
        let mut commands = Vec::new();

        commands.push(DrawCommand::PolyLine {
            points: outline.points().to_vec(),
            thickness: outline.thickness,
            color: colors::ARENA_WALL,
        });

        // Paddle: one dot per degree along its span, just outside the wall
        let dot_radius = outline.radius + PADDLE_DOT_OFFSET;
        for angle in state.paddle.span().sample_angles(1.0) {
            commands.push(DrawCommand::Circle {
                center: center + polar_to_cartesian(dot_radius, angle),
                radius: PADDLE_DOT_RADIUS,
                color: colors::PADDLE,
            });
        }

        commands.push(DrawCommand::Circle {
            center: center + state.ball.pos,
            radius: state.ball.radius,
            color: colors::BALL,
        });

        commands.push(DrawCommand::Text {
            text: state.score.to_string(),
            size: SCORE_FONT_SIZE,
            center_x: screen.x / 2.0,
            top: screen.y / 2.0 - SCORE_FONT_SIZE / 2.0,
            color: colors::SCORE,
        });
        commands.push(DrawCommand::Text {
            text: format!("High: {}", state.high_score),
            size: HIGH_SCORE_FONT_SIZE,
            center_x: screen.x / 2.0,
            top: screen.y / 2.0 + 40.0,
            color: colors::HIGH_SCORE,
        });

        if state.phase == GamePhase::NotStarted {
            commands.push(DrawCommand::Text {
                text: START_PROMPT.to_string(),
                size: PROMPT_FONT_SIZE,
                center_x: screen.x / 2.0,
                top: screen.y / 3.0 - PROMPT_FONT_SIZE / 2.0,
                color: colors::PROMPT,
            });
        }

        Self {
            clear_color: colors::BACKGROUND,
            commands,
        }
    }

    /// Text lines in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Triangle list for GPU backends (text is left to the platform)
    pub fn tessellate(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::PolyLine {
                    points,
                    thickness,
                    color,
                } => vertices.extend(shapes::closed_polyline(points, *thickness, *color)),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => vertices.extend(shapes::circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
                DrawCommand::Text { .. } => {}
            }
        }
        vertices
    }
}
