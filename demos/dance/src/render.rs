use crate::model::{DanceModel, DANCEH, DANCEW, DANCE_VIEW};
use pixel_bezier::context::Context;
use pixel_bezier::event::{event_check, event_register};
use pixel_bezier::game::Render;
use pixel_bezier::render::graph::render_curve;

pub struct DanceRender;

impl DanceRender {
    pub fn new() -> Self {
        Self
    }

    fn draw_curve(&mut self, ctx: &mut Context, d: &mut DanceModel) {
        ctx.adapter.clear_frame();
        if render_curve(&d.curve, ctx.adapter.as_mut()).is_ok() {
            let _ = ctx.adapter.present();
        }
    }
}

impl Render for DanceRender {
    type Model = DanceModel;

    fn init(&mut self, ctx: &mut Context, d: &mut Self::Model) {
        ctx.adapter
            .init(DANCEW, DANCEH, DANCE_VIEW, "dance".to_string());
        event_register("Dance.RedrawCurve", "draw_curve");
        // first frame before any animation starts
        self.draw_curve(ctx, d);
    }

    fn handle_event(&mut self, _ctx: &mut Context, _d: &mut Self::Model, _dt: f32) {}
    fn handle_timer(&mut self, _ctx: &mut Context, _d: &mut Self::Model, _dt: f32) {}

    fn draw(&mut self, ctx: &mut Context, d: &mut Self::Model, _dt: f32) {
        if event_check("Dance.RedrawCurve", "draw_curve") {
            self.draw_curve(ctx, d);
        }
    }
}
