//! Headless picking demo: renders a few overlapping quads off-screen and
//! simulates clicks across them.

use std::path::PathBuf;
use std::sync::Arc;

use colorpick::camera::Camera;
use colorpick::error::PickError;
use colorpick::gpu::pick_renderer::WgpuPickRenderer;
use colorpick::gpu::render_context::RenderContext;
use colorpick::input::InputEvent;
use colorpick::options::Options;
use colorpick::picking::{Geometry, PickRecord, Picker};
use colorpick::world::WorldEvent;
use glam::{Mat4, Vec3};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match Options::load(&path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options '{}': {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = pollster::block_on(run(&options)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(options: &Options) -> Result<(), PickError> {
    let mut context = RenderContext::new_headless(WIDTH, HEIGHT).await?;
    let mut renderer =
        WgpuPickRenderer::new(&context, options.picking.alpha_cutoff);
    let mut picker = Picker::new(&mut renderer, options.picking.clone());
    let mut camera = Camera::new(
        Vec3::new(0.0, 0.0, 8.0),
        Vec3::ZERO,
        WIDTH as f32 / HEIGHT as f32,
        &options.camera,
    );

    // One unit quad shared by every tile, as a visible scene would share it.
    let tile = Geometry::quad([-0.5, -0.5], [0.5, 0.5], 0.0);
    for (i, x) in [-2.0_f32, -0.75, 0.5].into_iter().enumerate() {
        let id = picker.next_id()?;
        let transform = Mat4::from_translation(Vec3::new(x, 0.0, i as f32 * 0.1))
            * Mat4::from_scale(Vec3::splat(1.5));
        picker.add(PickRecord::new(id, Arc::clone(&tile), transform))?;
        let _ = picker.subscribe_to(id, move |picked| {
            log::info!("tile {i} clicked (pick id {picked})");
        });
    }
    let _ = picker.subscribe(|id| log::info!("pick event: {id}"));

    let button = options.picking.button;
    for step in 0..=8 {
        let x = WIDTH as f32 * step as f32 / 8.0;
        let y = HEIGHT as f32 / 2.0;
        let _ = picker.handle_input(
            &mut renderer,
            &camera,
            InputEvent::CursorMoved { x, y },
        )?;
        let picked = picker.handle_input(
            &mut renderer,
            &camera,
            InputEvent::MouseButton {
                button,
                pressed: false,
            },
        )?;
        if picked.is_none() {
            log::info!("click at ({x:.0}, {y:.0}) hit background");
        }
    }

    // Halve the viewport; the next click re-renders at the new size.
    context.resize(WIDTH / 2, HEIGHT / 2);
    renderer.resize(WIDTH / 2, HEIGHT / 2);
    camera.set_viewport(WIDTH / 2, HEIGHT / 2);
    picker.handle_world_event(
        &mut renderer,
        WorldEvent::ViewportChanged {
            width: WIDTH / 2,
            height: HEIGHT / 2,
        },
    );
    let centre = picker.pick(&mut renderer, &camera, WIDTH / 4, HEIGHT / 4)?;
    log::info!(
        "after resize, centre pick = {centre:?} ({} renders total)",
        picker.render_count()
    );

    picker.destroy(&mut renderer);
    Ok(())
}
