//! Parsing of outline inputs into path commands
//!
//! # Submodules
//! - `commands` - the PathCommand sum type and the `Path` builder
//! - `path_data` - SVG path data (`d` attribute) parser
//! - `svg` - SVG document reader built on quick-xml

mod commands;
mod path_data;
mod svg;

pub use commands::{Path, PathCommand, Winding};
pub use path_data::parse_path_data;
pub use svg::{parse_svg_file, parse_svg_str};
