#![no_std]

mod canvas;
mod scene;

pub use canvas::Canvas;
pub use scene::SceneRenderer;
