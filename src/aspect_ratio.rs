/// A target ratio written as `antecedent:consequent` of height to width, so
/// 16:9 is stored as `antecedent = 9, consequent = 16`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AspectRatio {
    pub antecedent: f32,
    pub consequent: f32,
}

impl AspectRatio {
    pub const SIXTEEN_BY_NINE: Self = Self { antecedent: 9., consequent: 16. };

    pub fn new(antecedent: f32, consequent: f32) -> Self {
        Self { antecedent, consequent }
    }

    /// Height over width (0.5625 for 16:9).
    pub fn ratio(&self) -> f32 {
        self.antecedent / self.consequent
    }

    pub fn width_over_height(&self) -> f32 {
        self.consequent / self.antecedent
    }

    pub fn width_for_height(&self, height: f32) -> f32 {
        height / self.antecedent * self.consequent
    }

    pub fn height_for_width(&self, width: f32) -> f32 {
        width / self.consequent * self.antecedent
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SIXTEEN_BY_NINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn sixteen_by_nine_ratios() {
        let aspect = AspectRatio::SIXTEEN_BY_NINE;

        assert!((aspect.ratio() - 0.5625).abs() < EPSILON);
        assert!((aspect.width_over_height() - 16. / 9.).abs() < EPSILON);
    }

    #[test]
    fn converts_between_width_and_height() {
        let aspect = AspectRatio::default();

        assert!((aspect.width_for_height(720.) - 1280.).abs() < 1e-3);
        assert!((aspect.height_for_width(1280.) - 720.).abs() < 1e-3);
    }

    #[test]
    fn custom_ratio() {
        let aspect = AspectRatio::new(3., 4.);

        assert!((aspect.ratio() - 0.75).abs() < EPSILON);
        assert!((aspect.width_for_height(300.) - 400.).abs() < 1e-3);
    }
}
