//! SVG output for rendered link scenes

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_link_fragment;
