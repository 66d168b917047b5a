pub mod convert;
pub mod gui;
pub mod render;

pub use convert::{convert, Conversion, ConversionInputs, ConversionRequest, ConvertError};
pub use render::{RenderError, Renderer, RendererConfig, WeasyPrint};
