//! Uniform-colour LED strip
//!
//! Every LED shows the same base colour scaled by the brightness level.
//! `set_brightness` only stages a level; `commit` renders and latches a new
//! frame that the firmware then pushes to the strip.

use bloom_core::traits::LightOutput;
use smart_leds::RGB8;

/// Scale an 8-bit channel by an 8-bit factor (255 keeps full value, 0 is off)
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Frame buffer for an `N`-LED strip
pub struct StripLight<const N: usize> {
    color: RGB8,
    level: u8,
    frame: [RGB8; N],
    fresh: bool,
}

impl<const N: usize> StripLight<N> {
    /// Create a dark strip with the given base colour
    pub fn new(color: RGB8) -> Self {
        Self {
            color,
            level: 0,
            frame: [RGB8::default(); N],
            fresh: false,
        }
    }

    /// Take the last committed frame if it has not been taken yet
    pub fn take_frame(&mut self) -> Option<[RGB8; N]> {
        if self.fresh {
            self.fresh = false;
            Some(self.frame)
        } else {
            None
        }
    }
}

impl<const N: usize> LightOutput for StripLight<N> {
    fn set_brightness(&mut self, level: u8) {
        self.level = level;
    }

    fn commit(&mut self) {
        let pixel = RGB8 {
            r: scale8(self.color.r, self.level),
            g: scale8(self.color.g, self.level),
            b: scale8(self.color.b, self.level),
        };
        self.frame = [pixel; N];
        self.fresh = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARM: RGB8 = RGB8 {
        r: 255,
        g: 180,
        b: 60,
    };

    #[test]
    fn test_zero_brightness_is_black() {
        let mut strip: StripLight<8> = StripLight::new(WARM);
        strip.set_brightness(0);
        strip.commit();
        assert_eq!(strip.take_frame(), Some([RGB8::default(); 8]));
    }

    #[test]
    fn test_full_brightness_is_base_colour() {
        let mut strip: StripLight<4> = StripLight::new(WARM);
        strip.set_brightness(255);
        strip.commit();
        assert_eq!(strip.take_frame(), Some([WARM; 4]));
    }

    #[test]
    fn test_nothing_renders_before_commit() {
        let mut strip: StripLight<4> = StripLight::new(WARM);
        strip.set_brightness(255);
        assert_eq!(strip.take_frame(), None);
    }

    #[test]
    fn test_frame_is_taken_once() {
        let mut strip: StripLight<2> = StripLight::new(WARM);
        strip.set_brightness(128);
        strip.commit();
        let frame = strip.take_frame().unwrap();
        assert_eq!(frame[0].r, 128);
        assert_eq!(strip.take_frame(), None);
    }
}
