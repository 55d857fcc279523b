use log::info;
use pixel_bezier::animation::CurveTween;
use pixel_bezier::context::Context;
use pixel_bezier::curve::BezierCurve;
use pixel_bezier::event::{event_check, event_emit, timer_fire, timer_register};
use pixel_bezier::game::Model;

pub const DANCEW: u16 = 80;
pub const DANCEH: u16 = 40;
/// world half-extent shown on screen, slightly wider than the point range
pub const DANCE_VIEW: f32 = 12.0;
/// seconds per slide toward fresh random points
pub const DANCE_SECS: f32 = 1.5;
/// pause between two slides
pub const DANCE_PAUSE: f32 = 1.0;
/// how many slides before the demo quits
pub const DANCE_ROUNDS: u32 = 8;

pub struct DanceModel {
    pub curve: BezierCurve,
    pub tween: Option<CurveTween>,
    pub rounds: u32,
}

impl DanceModel {
    pub fn new() -> Self {
        Self {
            curve: BezierCurve::new(),
            tween: None,
            rounds: 0,
        }
    }
}

impl Model for DanceModel {
    fn init(&mut self, ctx: &mut Context) {
        ctx.rand.srand_now();

        self.curve.add_point(-8.0, -6.0, 0.0);
        self.curve.add_point(-3.0, 8.0, 2.0);
        self.curve.add_point(3.0, -8.0, -2.0);
        self.curve.add_point(8.0, 6.0, 0.0);
        self.curve.set_show_control_polygon(true);
        self.curve.set_show_control_points(true);

        timer_register("Dance.Restart", DANCE_PAUSE, "restart");
        timer_fire("Dance.Restart", 0u32);
    }

    fn handle_event(&mut self, ctx: &mut Context, _dt: f32) {
        if event_check("Dance.Restart", "restart") {
            info!("dance round {} begins...", self.rounds + 1);
            match CurveTween::start(&self.curve, &mut ctx.rand, DANCE_SECS) {
                Ok(tw) => self.tween = Some(tw),
                Err(e) => {
                    info!("cannot start tween: {}", e);
                    ctx.quit = true;
                }
            }
        }
    }

    fn handle_timer(&mut self, _ctx: &mut Context, _dt: f32) {}

    fn handle_auto(&mut self, ctx: &mut Context, dt: f32) {
        if let Some(tw) = &mut self.tween {
            let running = tw.advance(&mut self.curve, dt);
            event_emit("Dance.RedrawCurve");
            if !running {
                self.tween = None;
                self.rounds += 1;
                if self.rounds >= DANCE_ROUNDS {
                    ctx.quit = true;
                } else {
                    timer_fire("Dance.Restart", self.rounds);
                }
            }
        }
    }
}
