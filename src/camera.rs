/// Anything that accepts a normalized viewport, usually a camera.
pub trait ViewportTarget {
    fn set_viewport(&mut self, viewport: crate::Viewport);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Camera {
    pub viewport: crate::Viewport,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixel_viewport(&self, target_size: (u32, u32)) -> crate::PixelViewport {
        self.viewport.to_pixels(target_size)
    }
}

impl ViewportTarget for Camera {
    fn set_viewport(&mut self, viewport: crate::Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PixelViewport, Viewport};

    #[test]
    fn starts_with_the_full_target() {
        let camera = Camera::new();

        assert!(camera.viewport.is_full());
        assert_eq!(camera.pixel_viewport((640, 360)), PixelViewport { x: 0., y: 0., width: 640., height: 360. });
    }

    #[test]
    fn pixel_viewport_follows_the_applied_viewport() {
        let mut camera = Camera::new();
        camera.set_viewport(Viewport::new(0.25, 0., 0.5, 1.));

        assert_eq!(camera.pixel_viewport((400, 300)), PixelViewport { x: 100., y: 0., width: 200., height: 300. });
    }
}
