// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Context encapsulates the public per-game state: frame stage, a user
//! definable state byte, the injectable random source and the render
//! adapter. Passing the adapter in keeps the frame loop backend agnostic.

use crate::{render::adapter::Adapter, util::Rand};

pub struct Context {
    pub game_name: String,
    pub stage: u32,
    pub state: u8,
    pub quit: bool,
    pub rand: Rand,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    pub fn new(name: &str, adapter: Box<dyn Adapter>) -> Self {
        Self {
            game_name: name.to_string(),
            stage: 0,
            state: 0,
            quit: false,
            rand: Rand::new(),
            adapter,
        }
    }
}
