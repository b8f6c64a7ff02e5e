//! Canvas 2D backend for the simulation's draw commands

use game_core::RenderCommand;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    size: (u32, u32),
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            size: (canvas.width(), canvas.height()),
        })
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Replay one frame of commands in order
    pub fn draw(&self, commands: &[RenderCommand]) -> Result<(), JsValue> {
        for command in commands {
            match *command {
                RenderCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
                }
                RenderCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx
                        .fill_rect(x as f64, y as f64, width as f64, height as f64);
                }
                RenderCommand::FillCircle {
                    x,
                    y,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx.begin_path();
                    self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU)?;
                    self.ctx.fill();
                }
            }
        }
        Ok(())
    }
}
