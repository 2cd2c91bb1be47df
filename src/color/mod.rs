use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Color of an unlit pixel
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
