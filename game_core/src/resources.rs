use crate::components::Side;
use crate::params::Params;

/// Frame clock fed with wall-clock samples (seconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    previous: f64,
    current: f64,
    max_delta: f64, // Gaps above this are a stall, not elapsed play time
}

impl Clock {
    pub fn new(now: f64) -> Self {
        Self::with_max_delta(now, Params::MAX_FRAME_DELTA)
    }

    pub fn with_max_delta(now: f64, max_delta: f64) -> Self {
        Self {
            previous: now,
            current: now,
            max_delta,
        }
    }

    /// Record a new sample; the old current time becomes the previous one
    pub fn advance(&mut self, now: f64) {
        self.previous = self.current;
        self.current = now;
    }

    pub fn raw_delta(&self) -> f64 {
        self.current - self.previous
    }

    /// True when the last gap was long enough to be thrown away
    pub fn is_stalled(&self) -> bool {
        self.raw_delta() > self.max_delta
    }

    /// Simulated seconds since the previous sample
    pub fn delta(&self) -> f32 {
        if self.is_stalled() {
            0.0
        } else {
            self.raw_delta().max(0.0) as f32
        }
    }
}

/// One of the four paddle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::LeftUp,
        Control::LeftDown,
        Control::RightUp,
        Control::RightDown,
    ];

    /// Map a host key name (`KeyboardEvent.key`) to a control, ignoring case
    pub fn from_key(key: &str) -> Option<Control> {
        Self::ALL
            .into_iter()
            .find(|control| key.eq_ignore_ascii_case(control.key_name()))
    }

    pub fn key_name(self) -> &'static str {
        match self {
            Control::LeftUp => "w",
            Control::LeftDown => "s",
            Control::RightUp => "arrowup",
            Control::RightDown => "arrowdown",
        }
    }

    /// The (up, down) controls of a paddle
    pub fn for_side(side: Side) -> (Control, Control) {
        match side {
            Side::Left => (Control::LeftUp, Control::LeftDown),
            Side::Right => (Control::RightUp, Control::RightDown),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Held/released state of every control
///
/// Key events write into this at any time; the simulation copies it once per
/// frame and only ever sees that snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, control: Control, pressed: bool) {
        self.pressed[control.index()] = pressed;
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed[control.index()]
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 4];
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Player 1
    pub right: u32, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.increment_left(),
            Side::Right => self.increment_right(),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_with_zero_delta() {
        let clock = Clock::new(12.5);
        assert_eq!(clock.delta(), 0.0);
        assert_eq!(clock.raw_delta(), 0.0);
    }

    #[test]
    fn test_clock_delta_is_raw_gap() {
        let mut clock = Clock::new(10.0);
        clock.advance(10.25);
        assert_eq!(clock.delta(), 0.25);
        clock.advance(10.5);
        assert_eq!(clock.delta(), 0.25, "Delta only spans the last two samples");
    }

    #[test]
    fn test_clock_discards_stalls() {
        let mut clock = Clock::new(10.0);
        clock.advance(10.5);
        assert!(clock.is_stalled());
        assert_eq!(clock.delta(), 0.0, "Gaps over 0.3s count as no time");

        clock.advance(70.0);
        assert_eq!(clock.delta(), 0.0);

        clock.advance(70.125);
        assert_eq!(clock.delta(), 0.125, "Clock recovers on the next frame");
    }

    #[test]
    fn test_clock_ignores_backwards_time() {
        let mut clock = Clock::new(10.0);
        clock.advance(9.5);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn test_clock_identical_samples() {
        let mut clock = Clock::new(3.0);
        clock.advance(3.0);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn test_control_from_key() {
        assert_eq!(Control::from_key("w"), Some(Control::LeftUp));
        assert_eq!(Control::from_key("W"), Some(Control::LeftUp));
        assert_eq!(Control::from_key("s"), Some(Control::LeftDown));
        assert_eq!(Control::from_key("ArrowUp"), Some(Control::RightUp));
        assert_eq!(Control::from_key("ARROWDOWN"), Some(Control::RightDown));
        assert_eq!(Control::from_key("a"), None);
        assert_eq!(Control::from_key("Enter"), None);
    }

    #[test]
    fn test_input_state_flags_are_independent() {
        let mut input = InputState::new();
        input.set_pressed(Control::LeftUp, true);
        input.set_pressed(Control::RightDown, true);

        assert!(input.is_pressed(Control::LeftUp));
        assert!(!input.is_pressed(Control::LeftDown));
        assert!(!input.is_pressed(Control::RightUp));
        assert!(input.is_pressed(Control::RightDown));

        input.set_pressed(Control::LeftUp, false);
        assert!(!input.is_pressed(Control::LeftUp));
        assert!(input.is_pressed(Control::RightDown));

        input.release_all();
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_score_increment_by_side() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.get(Side::Left), 2);
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.scored(Side::Left);
        events.scored(Side::Right);
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert_eq!(events, Events::new());
    }
}
