// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! PixelBezier computes parametric Bezier curves of arbitrary degree from a set
//! of 3d control points and renders them as polylines through a pluggable
//! drawing surface. Control points can be animated toward fresh random
//! positions by linear interpolation, driven by the frame loop rather than a
//! blocking wait.
//!
//! The crate is split the same way rust_pixel splits an app: a pure data/
//! algorithm core (util, algorithm, curve, animation), a render layer built
//! around an Adapter trait (render), and a thin Model/Render/Game embedding
//! (context, game, event) that ticks everything at a constant framerate.
//!
//! A runnable terminal demo lives in demos/dance.

/// framerate per second, set to moderate number to save CPUs
pub const GAME_FRAME: u32 = 60;

pub mod algorithm;
pub mod animation;
pub mod context;
pub mod curve;
pub mod event;
pub mod game;
pub mod log;
pub mod render;
pub mod util;
