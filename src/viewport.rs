/// A sub-region of the render target in normalized coordinates. The origin
/// is the bottom-left corner and every component is a fraction of the
/// target's full extent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const FULL: Self = Self { x: 0., y: 0., width: 1., height: 1. };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Centers the largest region with the target aspect ratio inside a
    /// drawable of the given size, adding bars top and bottom (letterbox) or
    /// left and right (pillarbox).
    ///
    /// The inputs are not validated. A zero height collapses to a zero-width
    /// rectangle and a zero-sized display produces non-finite components.
    pub fn letterbox(screen_width: f32, screen_height: f32, aspect: crate::AspectRatio) -> Self {
        // The current viewport height should be scaled by this amount.
        let scaled_height = screen_width / screen_height / aspect.width_over_height();

        if scaled_height == 1. {
            Self::FULL
        } else if scaled_height < 1. {
            Self { x: 0., y: (1. - scaled_height) / 2., width: 1., height: scaled_height }
        } else {
            let scaled_width = 1. / scaled_height;
            Self { x: (1. - scaled_width) / 2., y: 0., width: scaled_width, height: 1. }
        }
    }

    /// Shrinks the image inside the reference canvas when a windowed display
    /// is smaller than the canvas threshold. The result is anchored to the
    /// bottom-left corner and may leave space free toward the top and right.
    ///
    /// Fullscreen and large displays get `Viewport::FULL`.
    pub fn reduced_canvas(
        resolution_width: f32,
        resolution_height: f32,
        fullscreen: bool,
        aspect: crate::AspectRatio,
        canvas: crate::ReferenceCanvas,
    ) -> Self {
        if fullscreen || !canvas.is_small_display(resolution_width, resolution_height) {
            return Self::FULL;
        }

        let (usable_x, usable_y) = canvas.usable_area(resolution_width, resolution_height);
        let width_at_usable_height = aspect.width_for_height(usable_y);

        let mut width = usable_x / canvas.width;
        let mut height = usable_y / canvas.height;

        if usable_x > width_at_usable_height {
            width = width_at_usable_height / canvas.width; // Too wide for the ratio
        } else if usable_x < width_at_usable_height {
            height = aspect.height_for_width(usable_x) / canvas.height; // Too tall
        }

        Self { x: 0., y: 0., width, height }
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    pub fn aspect_ratio(&self, target_size: (u32, u32)) -> f32 {
        (self.width * target_size.0 as f32) / (self.height * target_size.1 as f32)
    }

    /// Converts to pixels with a top-left origin, clamped to the target.
    pub fn to_pixels(&self, (target_width, target_height): (u32, u32)) -> PixelViewport {
        let target_width = target_width as f32;
        let target_height = target_height as f32;

        let x = (self.x * target_width).clamp(0., target_width);
        let width = (self.width * target_width).min(target_width - x).max(0.);

        let top = 1. - self.y - self.height;
        let y = (top * target_height).clamp(0., target_height);
        let height = (self.height * target_height).min(target_height * (1. - self.y) - y).max(0.);

        PixelViewport { x, y, width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FULL
    }
}

/// A viewport in pixels of a particular render target, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelViewport {
    /// The unused space on each axis.
    pub fn margins(&self, (target_width, target_height): (u32, u32)) -> (f32, f32) {
        (target_width as f32 - self.width, target_height as f32 - self.height)
    }

    pub fn scissor_rect(&self) -> (u32, u32, u32, u32) {
        let x = self.x.floor() as u32;
        let y = self.y.floor() as u32;
        let right = (self.x + self.width).ceil() as u32;
        let bottom = (self.y + self.height).ceil() as u32;

        (x, y, right - x, bottom - y)
    }

    pub fn is_empty(&self) -> bool {
        self.width < 1. || self.height < 1.
    }
}
