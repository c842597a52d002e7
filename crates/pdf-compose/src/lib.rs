pub mod compose;
mod config;
pub mod constants;
mod filename;
pub mod layout;
mod stats;
mod types;

pub use compose::{ConversionSession, convert, load_image, load_images, save_pdf};
pub use config::*;
pub use filename::{default_filename, resolve_filename, resolve_filename_now};
pub use stats::calculate_statistics;
pub use types::*;
