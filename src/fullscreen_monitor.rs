#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Entered,
    Exited,
}

impl Transition {
    pub fn entered_fullscreen(&self) -> bool {
        *self == Self::Entered
    }
}

/// Remembers the fullscreen flag between polls so edges can be detected.
#[derive(Clone, Copy, Debug)]
pub struct FullscreenMonitor {
    pub last_fullscreen: bool,
}

impl FullscreenMonitor {
    pub fn new(fullscreen: bool) -> Self {
        Self { last_fullscreen: fullscreen }
    }

    pub fn poll(&mut self, fullscreen: bool) -> Transition {
        if fullscreen == self.last_fullscreen {
            return Transition::Unchanged;
        }

        self.last_fullscreen = fullscreen;
        if fullscreen { Transition::Entered } else { Transition::Exited }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_rising_edge_is_entered() {
        let mut monitor = FullscreenMonitor::new(false);
        let flags = [false, false, true, true, false];

        let transitions = flags.iter().map(|&f| monitor.poll(f)).collect::<Vec<_>>();
        let entered = transitions.iter().enumerate()
            .filter(|(_, t)| t.entered_fullscreen())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        assert_eq!(entered, vec![2]);
        assert_eq!(transitions[4], Transition::Exited);
        assert!(!monitor.last_fullscreen);
    }

    #[test]
    fn starts_from_the_reported_state() {
        let mut monitor = FullscreenMonitor::new(true);

        assert_eq!(monitor.poll(true), Transition::Unchanged);
        assert_eq!(monitor.poll(false), Transition::Exited);
        assert_eq!(monitor.poll(true), Transition::Entered);
    }
}
