pub mod line;

pub use line::PixelLine;
