//! Timer controller and frame counter

use crate::config::{ButtonConfig, CountMode, TimerConfig};
use crate::time::TimeValue;
use crate::traits::TimeDisplay;

use super::events::ButtonEvent;

/// Derives a one-second cadence from a faster fixed frame rate
///
/// `advance` reports true on every `divisor`-th call and the count goes
/// back to zero at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickCounter {
    count: u16,
    divisor: u16,
}

impl TickCounter {
    /// Create a counter firing every `divisor` ticks (at least 1)
    pub fn new(divisor: u16) -> Self {
        Self {
            count: 0,
            divisor: divisor.max(1),
        }
    }

    /// Count one tick, returning true when a full period has elapsed
    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.divisor {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Ticks counted in the current period
    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn divisor(&self) -> u16 {
        self.divisor
    }
}

/// Timer state machine
///
/// There is a single running state. Button events and frame ticks are the
/// only transitions, and none of them can fail.
#[derive(Debug, Clone)]
pub struct TimerController {
    time: TimeValue,
    counter: TickCounter,
    mode: CountMode,
    buttons: ButtonConfig,
}

impl TimerController {
    /// Create a controller at the configured start value
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            time: config.timer.start(),
            counter: TickCounter::new(config.timer.frame_rate_hz),
            mode: config.timer.mode,
            buttons: config.buttons,
        }
    }

    /// Push the start value and indicator lights to a freshly built display
    pub fn prime<D: TimeDisplay>(&self, display: &mut D) {
        display.set_digits(self.time.minutes(), self.time.seconds() as u32);
        display.set_light_brightness(1.0, 1.0, 1.0, 1.0);
    }

    /// Apply one button press
    pub fn handle(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::A => self.on_button_a(),
            ButtonEvent::B => self.on_button_b(),
            ButtonEvent::C => self.on_button_c(),
        }
    }

    /// Apply every pending button press in order, returning how many there were
    pub fn drain<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = ButtonEvent>,
    {
        let mut applied = 0;
        for event in events {
            self.handle(event);
            applied += 1;
        }
        applied
    }

    /// Add the A step (one minute by default)
    pub fn on_button_a(&mut self) {
        self.time = self.time.add_seconds(self.buttons.a_step_s);
    }

    /// Add the B step (30 seconds by default), carrying into minutes
    pub fn on_button_b(&mut self) {
        self.time = self.time.add_seconds(self.buttons.b_step_s);
    }

    /// Reset to zero
    pub fn on_button_c(&mut self) {
        self.time = TimeValue::ZERO;
    }

    /// Run one frame
    ///
    /// Always renders the current time first. Every `frame_rate_hz`-th call
    /// then moves the time by one second. Counting down stops at zero.
    pub fn tick<D: TimeDisplay>(&mut self, display: &mut D) -> Result<(), D::Error> {
        display.update(self.time.minutes(), self.time.seconds())?;

        if self.counter.advance() {
            self.time = match self.mode {
                CountMode::Down => self.time.decrement(),
                CountMode::Up => self.time.increment(),
            };
        }

        Ok(())
    }

    /// Current time
    pub fn time(&self) -> TimeValue {
        self.time
    }

    /// Check if a count-down has reached zero
    pub fn is_expired(&self) -> bool {
        self.mode == CountMode::Down && self.time.is_zero()
    }

    /// Frame counter state
    pub fn counter(&self) -> TickCounter {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Records what the controller pushes to the display
    #[derive(Default)]
    struct RecordingDisplay {
        digits: Option<(u32, u32)>,
        lights: Option<[f32; 4]>,
        frames: usize,
        last: Option<(u32, u8)>,
    }

    impl TimeDisplay for RecordingDisplay {
        type Error = ();

        fn set_digits(&mut self, left: u32, right: u32) {
            self.digits = Some((left, right));
        }

        fn set_light_brightness(&mut self, red: f32, green: f32, blue: f32, yellow: f32) {
            self.lights = Some([red, green, blue, yellow]);
        }

        fn update(&mut self, minutes: u32, seconds: u8) -> Result<(), ()> {
            self.frames += 1;
            self.last = Some((minutes, seconds));
            Ok(())
        }
    }

    struct BrokenDisplay;

    impl TimeDisplay for BrokenDisplay {
        type Error = &'static str;

        fn set_digits(&mut self, _: u32, _: u32) {}

        fn set_light_brightness(&mut self, _: f32, _: f32, _: f32, _: f32) {}

        fn update(&mut self, _: u32, _: u8) -> Result<(), &'static str> {
            Err("gone")
        }
    }

    fn controller_at(minutes: u32, seconds: u32) -> TimerController {
        let mut config = TimerConfig::default();
        config.timer.start_minutes = minutes;
        config.timer.start_seconds = seconds;
        TimerController::new(&config)
    }

    fn mm_ss(c: &TimerController) -> (u32, u8) {
        (c.time().minutes(), c.time().seconds())
    }

    #[test]
    fn test_starts_at_five_oh_one() {
        let controller = TimerController::new(&TimerConfig::default());
        assert_eq!(mm_ss(&controller), (5, 1));
        assert!(!controller.is_expired());
    }

    #[test]
    fn test_prime_sets_digits_and_lights() {
        let controller = TimerController::new(&TimerConfig::default());
        let mut display = RecordingDisplay::default();
        controller.prime(&mut display);
        assert_eq!(display.digits, Some((5, 1)));
        assert_eq!(display.lights, Some([1.0; 4]));
        assert_eq!(display.frames, 0);
    }

    #[test]
    fn test_button_a_adds_minute() {
        let mut controller = controller_at(2, 40);
        controller.on_button_a();
        assert_eq!(mm_ss(&controller), (3, 40));
    }

    #[test]
    fn test_button_b_carries() {
        let mut controller = controller_at(0, 45);
        controller.on_button_b();
        assert_eq!(mm_ss(&controller), (1, 15));
    }

    #[test]
    fn test_button_b_carries_at_exactly_sixty() {
        let mut controller = controller_at(0, 30);
        controller.handle(ButtonEvent::B);
        assert_eq!(mm_ss(&controller), (1, 0));
    }

    #[test]
    fn test_double_press_applies_twice() {
        let mut controller = controller_at(0, 0);
        let applied = controller.drain([ButtonEvent::B, ButtonEvent::B]);
        assert_eq!(applied, 2);
        assert_eq!(mm_ss(&controller), (1, 0));
    }

    #[test]
    fn test_drain_keeps_order() {
        let mut controller = controller_at(4, 0);
        controller.drain([ButtonEvent::A, ButtonEvent::C, ButtonEvent::B]);
        assert_eq!(mm_ss(&controller), (0, 30));
    }

    #[test]
    fn test_tick_always_renders_current_time() {
        let mut controller = controller_at(1, 0);
        let mut display = RecordingDisplay::default();
        for _ in 0..20 {
            controller.tick(&mut display).unwrap();
            assert_eq!(display.last, Some((1, 0)));
        }
        assert_eq!(display.frames, 20);
        assert_eq!(mm_ss(&controller), (0, 59));

        controller.tick(&mut display).unwrap();
        assert_eq!(display.last, Some((0, 59)));
    }

    #[test]
    fn test_cadence_at_twenty_hertz() {
        let mut controller = controller_at(10, 0);
        let mut display = RecordingDisplay::default();

        for call in 1..=19 {
            controller.tick(&mut display).unwrap();
            assert_eq!(mm_ss(&controller), (10, 0), "call {}", call);
        }
        controller.tick(&mut display).unwrap();
        assert_eq!(mm_ss(&controller), (9, 59));
        assert_eq!(controller.counter().count(), 0);
    }

    #[test]
    fn test_one_hertz_counts_every_tick() {
        let mut config = TimerConfig::default();
        config.timer.frame_rate_hz = 1;
        let mut controller = TimerController::new(&config);
        let mut display = RecordingDisplay::default();

        controller.tick(&mut display).unwrap();
        controller.tick(&mut display).unwrap();
        assert_eq!(mm_ss(&controller), (4, 59));
    }

    #[test]
    fn test_reaches_zero_and_expires() {
        let mut controller = controller_at(0, 1);
        let mut display = RecordingDisplay::default();
        for _ in 0..20 {
            controller.tick(&mut display).unwrap();
        }
        assert!(controller.is_expired());
    }

    #[test]
    fn test_count_up() {
        let mut config = TimerConfig::default();
        config.timer.mode = CountMode::Up;
        config.timer.start_minutes = 0;
        config.timer.start_seconds = 59;
        let mut controller = TimerController::new(&config);
        let mut display = RecordingDisplay::default();

        for _ in 0..20 {
            controller.tick(&mut display).unwrap();
        }
        assert_eq!(mm_ss(&controller), (1, 0));
        assert!(!controller.is_expired());
    }

    #[test]
    fn test_display_error_propagates() {
        let mut controller = controller_at(1, 0);
        assert_eq!(controller.tick(&mut BrokenDisplay), Err("gone"));
    }

    #[test]
    fn test_tick_counter_divisor_floor() {
        let mut counter = TickCounter::new(0);
        assert_eq!(counter.divisor(), 1);
        assert!(counter.advance());
        assert!(counter.advance());
    }

    proptest! {
        #[test]
        fn prop_zero_is_a_fixed_point(ticks in 0usize..500) {
            let mut controller = controller_at(0, 0);
            let mut display = RecordingDisplay::default();
            for _ in 0..ticks {
                controller.tick(&mut display).unwrap();
                prop_assert_eq!(mm_ss(&controller), (0, 0));
            }
        }

        #[test]
        fn prop_reset_from_anywhere(m in 0u32..100_000, s in 0u32..60) {
            let mut controller = controller_at(m, s);
            controller.handle(ButtonEvent::C);
            prop_assert_eq!(mm_ss(&controller), (0, 0));
            controller.handle(ButtonEvent::C);
            prop_assert_eq!(mm_ss(&controller), (0, 0));
        }

        #[test]
        fn prop_one_second_per_twenty_ticks(m in 0u32..1_000, s in 0u32..60, periods in 0u32..10) {
            let mut controller = controller_at(m, s);
            let mut display = RecordingDisplay::default();
            let start = controller.time().total_seconds();
            for _ in 0..periods * 20 {
                controller.tick(&mut display).unwrap();
            }
            let expected = start.saturating_sub(periods as u64);
            prop_assert_eq!(controller.time().total_seconds(), expected);
        }

        #[test]
        fn prop_b_step_preserves_total(m in 0u32..1_000, s in 0u32..60) {
            let mut controller = controller_at(m, s);
            let before = controller.time().total_seconds();
            controller.on_button_b();
            prop_assert!(controller.time().seconds() < 60);
            prop_assert_eq!(controller.time().total_seconds(), before + 30);
        }
    }
}
