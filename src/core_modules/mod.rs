pub mod classifier;
pub mod palette;
pub mod pixel;
pub mod region;
pub mod utils;
pub mod yuv;
