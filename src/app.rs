/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update.
 * The model owns the flock (with its random generator), the camera panel
 * parameters and the egui context; nannou calls `update` once per frame and
 * then `renderer::view` reads the flock to draw it.
 */

use clap::Parser;
use log::{debug, error, info};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::Config;
use crate::debug::DebugInfo;
use crate::error::{AppError, Result};
use crate::flock::Flock;
use crate::params::ViewParams;
use crate::{input, renderer, ui};

// Where the first bird appears
pub fn start_position() -> Vec3 {
    vec3(2.0, 2.0, 4.0)
}

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: ViewParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = Config::parse();
    config.init_logging();

    match try_model(app, &config) {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn try_model(app: &App, config: &Config) -> Result<Model> {
    let window_id = app
        .new_window()
        .title("Flocking Cones")
        .size(config.width, config.height)
        .resizable(false)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|e| AppError::WindowCreation(format!("{:?}", e)))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| AppError::WindowNotFound(format!("{:?}", window_id)))?;
    let egui = Egui::from_window(&window);

    let mut flock = match config.seed {
        Some(seed) => Flock::seeded(seed),
        None => Flock::new(),
    };
    let mut params = ViewParams::new(config.aspect_ratio());

    for _ in 0..=config.initial_birds {
        flock.spawn(start_position());
    }
    params.num_birds = flock.len();

    info!(
        "Starting with {} bird(s), window {}x{}, seed {}",
        flock.len(),
        config.width,
        config.height,
        config.seed.map_or_else(|| "from entropy".to_string(), |s| s.to_string()),
    );

    Ok(Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    })
}

/// Advance the simulation by one frame.
///
/// Refreshes the camera aspect ratio, resyncs the displayed bird counter to
/// the flock, snapshots the frustum and steps the flock. Returns how many
/// birds end up inside the frustum.
pub fn advance_frame<R: rand::Rng>(
    flock: &mut Flock<R>,
    params: &mut ViewParams,
    delta_time: f32,
    aspect_ratio: f32,
) -> usize {
    // A zero-sized window yields no usable aspect; keep the previous one
    if is_valid_aspect(aspect_ratio) {
        params.camera.aspect_ratio = aspect_ratio;
    }
    params.num_birds = flock.len();

    let frustum = params.camera.frustum_corners();
    flock.update(delta_time, &frustum);

    flock
        .positions()
        .iter()
        .filter(|&&p| frustum.contains_point(p))
        .count()
}

pub fn is_valid_aspect(aspect_ratio: f32) -> bool {
    aspect_ratio.is_finite() && aspect_ratio > 0.0
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let window_rect = app.window_rect();
    let aspect_ratio = window_rect.w() / window_rect.h();

    model.debug_info.visible_birds = advance_frame(
        &mut model.flock,
        &mut model.params,
        update.since_last.as_secs_f32(),
        aspect_ratio,
    );

    let response = ui::update_panel(&mut model.egui, &mut model.params, &model.debug_info);
    if response.reset_requested {
        let aspect_ratio = model.params.camera.aspect_ratio;
        model.params.reset_defaults(aspect_ratio);
        debug!("Camera reset to defaults; flock still holds {} bird(s)", model.flock.len());
    } else if response.camera_changed {
        let camera = &model.params.camera;
        debug!(
            "Camera edited: eye ({:.2}, {:.2}, {:.2}) look at ({:.2}, {:.2}, {:.2}) fov {:.1}",
            camera.eye_point.x, camera.eye_point.y, camera.eye_point.z,
            camera.look_at.x, camera.look_at.y, camera.look_at.z,
            camera.fov,
        );
    }
}
