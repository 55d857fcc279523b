mod model;
mod render;

use crate::{model::DanceModel, render::DanceRender};
use pixel_bezier::{game::Game, render::term::TermAdapter};

fn main() -> std::io::Result<()> {
    let m = DanceModel::new();
    let r = DanceRender::new();
    let mut g = Game::new(m, r, "dance", Box::new(TermAdapter::new()));
    g.init();
    g.run()?;
    g.context.adapter.reset();
    Ok(())
}
