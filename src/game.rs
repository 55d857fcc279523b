// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! Game encapsulates Model and Render classes and implements the main loop.
//! Be aware that all the Game, Model and Render instances have the same lifetime.
//!
//! # Example
//!
//! fn main() -> io::Result<()> {
//!    let m = DanceModel::new();
//!    let r = DanceRender::new();
//!    let mut g = Game::new(m, r, "dance", Box::new(TermAdapter::new()));
//!    g.init();
//!    g.run()?;
//!    g.context.adapter.reset();
//!    Ok(())
//! }

use crate::{context::Context, event::timer_update, log::init_log, render::adapter::Adapter, GAME_FRAME};
use log::info;
use std::{
    io, thread,
    time::{Duration, Instant},
};

/// The Model interface, main entrance for data and core logic
pub trait Model {
    fn init(&mut self, ctx: &mut Context);
    fn update(&mut self, ctx: &mut Context, dt: f32) {
        timer_update();
        self.handle_event(ctx, dt);
        self.handle_timer(ctx, dt);
        self.handle_auto(ctx, dt);
    }
    fn handle_timer(&mut self, ctx: &mut Context, dt: f32);
    fn handle_event(&mut self, ctx: &mut Context, dt: f32);
    fn handle_auto(&mut self, ctx: &mut Context, dt: f32);
}

/// The Render interface, takes context and model as input params. It renders every single frame
pub trait Render {
    type Model: Model;

    fn init(&mut self, ctx: &mut Context, m: &mut Self::Model);
    fn update(&mut self, ctx: &mut Context, m: &mut Self::Model, dt: f32) {
        self.handle_event(ctx, m, dt);
        self.handle_timer(ctx, m, dt);
        self.draw(ctx, m, dt);
    }
    fn handle_event(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32);
    fn handle_timer(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32);
    fn draw(&mut self, ctx: &mut Context, model: &mut Self::Model, dt: f32);
}

/// Game encapsulates a Model, a Render and a Context structure
pub struct Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub context: Context,
    pub model: M,
    pub render: R,
}

impl<M, R> Game<M, R>
where
    M: Model,
    R: Render<Model = M>,
{
    pub fn new(m: M, r: R, name: &str, adapter: Box<dyn Adapter>) -> Self {
        let ctx = Context::new(name, adapter);
        init_log(
            log::LevelFilter::Info,
            &format!("log{}{}.log", std::path::MAIN_SEPARATOR, name),
        );
        info!("{}(pixel_bezier) start...", name);
        Self {
            context: ctx,
            model: m,
            render: r,
        }
    }

    /// Main loop. Ticks at a constant framerate, measuring real elapsed
    /// time with a monotonic clock, until the model raises the quit flag.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Begin run...");

        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_nanos(1_000_000_000 / GAME_FRAME as u64);

        loop {
            if self.context.quit {
                info!("Quit flag raised, leaving run loop...");
                return Ok(());
            }

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_nanos(100));
            thread::sleep(timeout);

            let et = last_tick.elapsed();

            if et >= tick_rate {
                let dt = et.as_secs() as f32 + et.subsec_nanos() as f32 / 1_000_000_000.0;
                self.on_tick(dt);
                last_tick = Instant::now();
            }
        }
    }

    /// calls every frame, update timer, model logic and does rendering
    pub fn on_tick(&mut self, dt: f32) {
        self.context.stage += 1;
        self.model.update(&mut self.context, dt);
        self.render.update(&mut self.context, &mut self.model, dt);
    }

    /// init render and model
    pub fn init(&mut self) {
        info!("Init game...");
        self.model.init(&mut self.context);
        self.render.init(&mut self.context, &mut self.model);
    }
}
