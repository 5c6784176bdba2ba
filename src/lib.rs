mod aspect_ratio;
mod camera;
mod clear_color;
mod config;
mod display_metrics;
mod error;
mod fullscreen_monitor;
mod pipeline;
mod policy;
mod reference_canvas;
mod render_pass;
mod renderer;
mod viewport;
mod viewport_fixer;

pub use aspect_ratio::*;
pub use camera::*;
pub use clear_color::*;
pub use config::*;
pub use display_metrics::*;
pub use error::*;
pub use fullscreen_monitor::*;
pub use pipeline::*;
pub use policy::*;
pub use reference_canvas::*;
pub use render_pass::*;
pub use renderer::*;
pub use viewport::*;
pub use viewport_fixer::*;
