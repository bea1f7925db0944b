/// Pattern value that turns stippling off regardless of the factor.
pub const STIPPLE_PATTERN_SOLID: u16 = 0xFFFF;

/// Effective outline stipple, as a renderer would consume it.
///
/// Each bit of `pattern` (least significant first) covers `factor` consecutive
/// outline pixels; the sequence repeats every `16 * factor` pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OutlineStipple {
    pub factor: u32,
    pub pattern: u16,
}

impl OutlineStipple {
    /// Returns `None` when the stored values mean "draw a solid outline": a
    /// factor of zero (negative factors are read the same way) or an all-ones
    /// pattern.
    pub fn resolve(factor: i32, pattern: u16) -> Option<Self> {
        if factor <= 0 || pattern == STIPPLE_PATTERN_SOLID {
            return None;
        }
        Some(Self {
            factor: factor as u32,
            pattern,
        })
    }

    pub fn period_pixels(&self) -> u64 {
        16 * self.factor as u64
    }

    pub fn is_pixel_on(&self, pixel: u32) -> bool {
        let bit = (pixel / self.factor.max(1)) % 16;
        self.pattern & (1 << bit) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::OutlineStipple;

    #[test]
    fn zero_or_negative_factor_disables() {
        assert_eq!(OutlineStipple::resolve(0, 0xF0F0), None);
        assert_eq!(OutlineStipple::resolve(-2, 0xF0F0), None);
    }

    #[test]
    fn solid_pattern_disables() {
        assert_eq!(OutlineStipple::resolve(3, 0xFFFF), None);
    }

    #[test]
    fn factor_repeats_each_bit() {
        let s = OutlineStipple::resolve(3, 0b0000_0000_0000_0010).unwrap();
        assert_eq!(s.period_pixels(), 48);
        // Bit 0 is off for pixels 0..3, bit 1 is on for pixels 3..6.
        assert!(!s.is_pixel_on(0));
        assert!(!s.is_pixel_on(2));
        assert!(s.is_pixel_on(3));
        assert!(s.is_pixel_on(5));
        assert!(!s.is_pixel_on(6));
        // Wraps after one period.
        assert!(s.is_pixel_on(48 + 4));
    }
}
