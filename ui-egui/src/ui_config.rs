// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI configuration: window geometry, board metrics and color scheme.
//!
//! Defaults reproduce the stock look (80px squares, wooden board colors,
//! yellow selection highlight). A JSON file can override any of it.

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete UI configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Board visual configuration
    pub board: BoardConfig,
    /// Color scheme
    pub colors: ColorScheme,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    /// Minimum window size
    pub min_size: (f32, f32),
}

/// Board visual configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Square size in pixels
    pub square_size: f32,
    /// Margin around the board, used for coordinate labels
    pub margin: f32,
    /// Piece glyph size as a fraction of the square size
    pub glyph_scale: f32,
    /// Legal-target dot radius as a fraction of the square size
    pub target_dot_ratio: f32,
    /// Capture ring radius as a fraction of the square size
    pub capture_ring_ratio: f32,
    /// Coordinate labels (a-h, 1-8) in the margin
    pub show_coordinates: bool,
    /// Coordinate font size
    pub coordinate_font_size: f32,
}

/// Color scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Light square color
    pub light_square: SerializableColor,
    /// Dark square color
    pub dark_square: SerializableColor,
    /// Selection highlight overlay
    pub selection: SerializableColor,
    /// Legal-target dot on empty squares
    pub target_dot: SerializableColor,
    /// Capture ring on occupied targets
    pub capture_ring: SerializableColor,
    /// White piece glyph fill
    pub white_piece: SerializableColor,
    /// Black piece glyph fill
    pub black_piece: SerializableColor,
    /// Glyph shadow, for contrast against same-tone squares
    pub piece_shadow: SerializableColor,
    /// Window background around the board
    pub background: SerializableColor,
    /// Coordinate label color
    pub label: SerializableColor,
}

/// RGBA color that can round-trip through serde
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(c: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Rookery Chess".to_string(),
                initial_size: (860.0, 680.0),
                min_size: (520.0, 420.0),
            },
            board: BoardConfig {
                square_size: 80.0,
                margin: 20.0,
                glyph_scale: 0.78,
                target_dot_ratio: 0.16,
                capture_ring_ratio: 0.42,
                show_coordinates: true,
                coordinate_font_size: 12.0,
            },
            colors: ColorScheme {
                light_square: SerializableColor::rgb(240, 217, 181),
                dark_square: SerializableColor::rgb(181, 136, 99),
                selection: SerializableColor::rgba(255, 255, 0, 150),
                target_dot: SerializableColor::rgba(40, 40, 40, 140),
                capture_ring: SerializableColor::rgba(40, 40, 40, 160),
                white_piece: SerializableColor::rgb(250, 250, 250),
                black_piece: SerializableColor::rgb(25, 25, 25),
                piece_shadow: SerializableColor::rgba(0, 0, 0, 90),
                background: SerializableColor::rgb(40, 40, 40),
                label: SerializableColor::rgb(210, 210, 210),
            },
        }
    }
}

impl UiConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
