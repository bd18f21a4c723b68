// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rookery UI library: egui front end over the core board controller.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod app;
pub mod board_widget;
pub mod ui_config;
