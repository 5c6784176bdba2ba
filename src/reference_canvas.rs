/// The nominal resolution a browser build is published at, and the rules
/// for shrinking into it on displays smaller than the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceCanvas {
    pub width: f32,
    pub height: f32,

    pub threshold_width: f32,
    pub threshold_height: f32,

    pub usable_fraction_x: f32, // Room for the right scroll bar
    pub usable_fraction_y: f32, // Room for the browser toolbar and the task bar
}

impl ReferenceCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            threshold_width: 1920.,
            threshold_height: 1080.,
            usable_fraction_x: 0.99,
            usable_fraction_y: 0.85,
        }
    }

    pub fn with_threshold(self, threshold_width: f32, threshold_height: f32) -> Self {
        Self { threshold_width, threshold_height, ..self }
    }

    pub fn with_usable_fraction(self, usable_fraction_x: f32, usable_fraction_y: f32) -> Self {
        Self { usable_fraction_x, usable_fraction_y, ..self }
    }

    pub fn is_small_display(&self, resolution_width: f32, resolution_height: f32) -> bool {
        resolution_width < self.threshold_width || resolution_height < self.threshold_height
    }

    pub fn usable_area(&self, resolution_width: f32, resolution_height: f32) -> (f32, f32) {
        (resolution_width * self.usable_fraction_x, resolution_height * self.usable_fraction_y)
    }
}

impl Default for ReferenceCanvas {
    fn default() -> Self {
        Self::new(1280., 720.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_display_when_either_axis_is_below_threshold() {
        let canvas = ReferenceCanvas::default();

        assert!(canvas.is_small_display(1366., 768.));
        assert!(canvas.is_small_display(2560., 1000.));
        assert!(canvas.is_small_display(1900., 1200.));
        assert!(!canvas.is_small_display(1920., 1080.));
        assert!(!canvas.is_small_display(2560., 1440.));
    }

    #[test]
    fn usable_area_reserves_browser_margins() {
        let (usable_x, usable_y) = ReferenceCanvas::default().usable_area(1366., 768.);

        assert!((usable_x - 1352.34).abs() < 1e-2);
        assert!((usable_y - 652.8).abs() < 1e-2);
    }

    #[test]
    fn builders_override_defaults() {
        let canvas = ReferenceCanvas::new(800., 600.)
            .with_threshold(1024., 768.)
            .with_usable_fraction(1., 1.);

        assert_eq!(canvas.width, 800.);
        assert!(!canvas.is_small_display(1024., 768.));
        assert_eq!(canvas.usable_area(1000., 500.), (1000., 500.));
    }
}
