mod gradient;
mod overlay;
mod starburst;
mod starfield;

pub use gradient::SHADER_GRADIENT;
pub use overlay::SHADER_OVERLAY;
pub use starburst::SHADER_STARBURST;
pub use starfield::SHADER_STARFIELD;
