pub mod color;
pub mod errors;
pub mod hsv;
pub mod named;
pub mod parse;

pub use color::Color;
pub use errors::{ColorError, FigureError};
pub use hsv::HsvKey;
pub use named::{lookup, CSS4_COLORS};
pub use parse::{parse_color, validate_color};

pub type Result<T> = std::result::Result<T, ColorError>;
