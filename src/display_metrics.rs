use winit::window;

/// A snapshot of what the host reports about the display for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub drawable_width: u32,
    pub drawable_height: u32,
    pub resolution_width: u32,
    pub resolution_height: u32,
    pub fullscreen: bool,
}

impl DisplayMetrics {
    pub fn new(drawable: (u32, u32), resolution: (u32, u32), fullscreen: bool) -> Self {
        Self {
            drawable_width: drawable.0,
            drawable_height: drawable.1,
            resolution_width: resolution.0,
            resolution_height: resolution.1,
            fullscreen,
        }
    }

    pub fn from_window(window: &window::Window) -> Self {
        let drawable = window.inner_size();
        let fullscreen = window.fullscreen().is_some();

        // Fall back to the drawable size if the monitor is unknown.
        let resolution = window.current_monitor()
            .map(|monitor| monitor.size())
            .filter(|size| size.width > 0 && size.height > 0)
            .unwrap_or(drawable);

        Self::new((drawable.width, drawable.height), (resolution.width, resolution.height), fullscreen)
    }

    pub fn drawable_size(&self) -> (u32, u32) {
        (self.drawable_width, self.drawable_height)
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.resolution_width, self.resolution_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_drawable_and_resolution() {
        let metrics = DisplayMetrics::new((1280, 720), (1366, 768), false);

        assert_eq!(metrics.drawable_size(), (1280, 720));
        assert_eq!(metrics.resolution(), (1366, 768));
        assert!(!metrics.fullscreen);
    }
}
