pub mod f64;
pub mod gray;
pub mod io;
pub mod pgm;
pub mod traits;
pub mod u8;

pub use self::f64::ImageF64;
pub use self::gray::GrayImage;
pub use self::traits::{clamp_index, ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
