/// An opaque colour used when drawing the difference mask.
pub type Rgb = [u8; 3];

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DIFF_ALPHA: f64 = 0.1;

const RED: Rgb = [255, 0, 0];
const YELLOW: Rgb = [255, 255, 0];

/// Tuning knobs for the per-pixel comparison and the rendered mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Colour distance sensitivity in `[0, 1]`. `0` counts any visible
    /// change, `1` counts nothing.
    pub threshold: f64,
    /// Skip pixels that look like anti-aliased edges in either image.
    pub detect_anti_aliasing: bool,
    /// Opacity of the faded baseline drawn behind unchanged pixels.
    pub diff_alpha: f64,
    pub diff_color: Rgb,
    /// Colour for pixels that got darker in the candidate. Falls back to
    /// `diff_color`.
    pub diff_color_alt: Option<Rgb>,
    pub aa_color: Rgb,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            detect_anti_aliasing: false,
            diff_alpha: DEFAULT_DIFF_ALPHA,
            diff_color: RED,
            diff_color_alt: None,
            aa_color: YELLOW,
        }
    }
}

impl CompareOptions {
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_anti_aliasing_detection(mut self, enabled: bool) -> Self {
        self.detect_anti_aliasing = enabled;
        self
    }

    #[must_use]
    pub fn with_diff_alpha(mut self, alpha: f64) -> Self {
        self.diff_alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_diff_color(mut self, color: Rgb) -> Self {
        self.diff_color = color;
        self
    }

    #[must_use]
    pub fn with_diff_color_alt(mut self, color: Option<Rgb>) -> Self {
        self.diff_color_alt = color;
        self
    }

    #[must_use]
    pub fn with_aa_color(mut self, color: Rgb) -> Self {
        self.aa_color = color;
        self
    }
}
