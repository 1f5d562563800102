mod float;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use float::{Rgbf, hsv_f};

pub type Rgb = RGB8;
pub type Hsv = HSV;
