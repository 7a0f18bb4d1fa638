/*
 * Flocking Cones - Module Definitions
 *
 * This file defines the module structure for the flocking demo.
 * The simulation core lives in `flock` and `frustum`; everything else is
 * the nannou shell around it.
 */

// Re-export key components for easier access
pub use flock::Flock;
pub use frustum::FrustumCorners;
pub use camera::CameraPersp;
pub use cone::ConeMesh;
pub use params::ViewParams;
pub use debug::DebugInfo;
pub use config::Config;
pub use error::AppError;
pub use app::Model;

// Define modules
pub mod flock;
pub mod frustum;
pub mod camera;
pub mod cone;
pub mod params;
pub mod debug;
pub mod config;
pub mod error;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;
