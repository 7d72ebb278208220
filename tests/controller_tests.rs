use cyber_countdown::audio::{AudioBackend, AudioFeedback, Cue};
use cyber_countdown::controller::TimerController;
use cyber_countdown::display::DisplayText;
use cyber_countdown::error::{InputError, Result, TimerError};
use cyber_countdown::input::TimeField;
use cyber_countdown::interval::{DeadlineTimer, TickTimer};
use cyber_countdown::timer_state::TimerStatus;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const SECOND: Duration = Duration::from_secs(1);

/// What the recording backend has been asked to do
#[derive(Default)]
struct Playback {
    played: Vec<Cue>,
    looping: Option<Cue>,
}

struct RecordingBackend {
    log: Rc<RefCell<Playback>>,
}

impl AudioBackend for RecordingBackend {
    fn has_clip(&self, _cue: Cue) -> bool {
        true
    }

    fn play(&mut self, cue: Cue) -> Result<()> {
        self.log.borrow_mut().played.push(cue);
        Ok(())
    }

    fn start_loop(&mut self, cue: Cue) -> Result<()> {
        self.log.borrow_mut().looping = Some(cue);
        Ok(())
    }

    fn stop_loop(&mut self) {
        self.log.borrow_mut().looping = None;
    }

    fn is_looping(&self) -> bool {
        self.log.borrow().looping.is_some()
    }

    fn stop_all(&mut self) {
        self.stop_loop();
    }
}

/// Timer whose arming always fails
struct BrokenTimer;

impl TickTimer for BrokenTimer {
    fn start(&mut self, _now: Instant, _interval: Duration) -> Result<()> {
        Err(TimerError::Scheduling("no timer available".to_string()))
    }

    fn cancel(&mut self) {}

    fn is_pending(&self) -> bool {
        false
    }

    fn poll(&mut self, _now: Instant) -> bool {
        false
    }

    fn time_until_due(&self, _now: Instant) -> Option<Duration> {
        None
    }
}

fn new_controller() -> (TimerController<DeadlineTimer>, Rc<RefCell<Playback>>) {
    let log = Rc::new(RefCell::new(Playback::default()));
    let backend: Box<dyn AudioBackend> = Box::new(RecordingBackend { log: log.clone() });
    let audio = AudioFeedback::new(Some(backend), true);
    (TimerController::new(DeadlineTimer::new(), audio), log)
}

fn set_time(
    controller: &mut TimerController<DeadlineTimer>,
    hours: &str,
    minutes: &str,
    seconds: &str,
) {
    assert!(controller.edit_field(TimeField::Hours, hours));
    assert!(controller.edit_field(TimeField::Minutes, minutes));
    assert!(controller.edit_field(TimeField::Seconds, seconds));
}

/// Poll once per second from `start`, `ticks` times
fn run_ticks(controller: &mut TimerController<DeadlineTimer>, start: Instant, ticks: u32) {
    for n in 1..=ticks {
        assert!(
            controller.poll(start + SECOND * n),
            "Tick {} should have fired",
            n
        );
    }
}

/// Fire only tick number `n` (counted from `start`)
fn fire_tick(controller: &mut TimerController<DeadlineTimer>, start: Instant, n: u32) {
    assert!(controller.poll(start + SECOND * n), "Tick {} should have fired", n);
}

#[test]
fn test_zero_duration_is_invalid_input() {
    let (mut controller, _log) = new_controller();
    let t0 = Instant::now();

    let result = controller.start(t0);

    assert!(matches!(
        result,
        Err(TimerError::InvalidInput(InputError::ZeroDuration))
    ));
    assert_eq!(controller.display(), DisplayText::InvalidInput);
    assert_eq!(controller.display_text(), "Invalid Input");
    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert_eq!(controller.time_until_tick(t0), None);
}

#[test]
fn test_empty_field_is_invalid_input() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "", "00", "05");

    let result = controller.start(Instant::now());

    assert!(matches!(
        result,
        Err(TimerError::InvalidInput(InputError::NotANumber { .. }))
    ));
    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert_eq!(controller.remaining_seconds(), 0);
}

#[test]
fn test_five_second_countdown_expires() {
    let (mut controller, log) = new_controller();
    set_time(&mut controller, "00", "00", "05");
    let t0 = Instant::now();

    controller.start(t0).unwrap();
    assert_eq!(controller.status(), TimerStatus::Running);
    assert_eq!(controller.remaining_seconds(), 5);
    assert_eq!(controller.display_text(), "00:00:05");

    run_ticks(&mut controller, t0, 4);
    assert_eq!(controller.remaining_seconds(), 1);
    assert_eq!(controller.display_text(), "00:00:01");
    assert_eq!(controller.status(), TimerStatus::Running);

    fire_tick(&mut controller, t0, 5);
    assert_eq!(controller.remaining_seconds(), 0);
    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert_eq!(controller.display(), DisplayText::Expired);
    assert_eq!(controller.display_text(), "Time's Up!");
    assert!(controller.is_alarm_playing());
    assert_eq!(
        log.borrow().played,
        vec![Cue::Tick, Cue::Tock, Cue::Tick, Cue::Tock, Cue::Tick]
    );

    // Nothing left to fire
    assert!(!controller.poll(t0 + SECOND * 10));
    assert_eq!(controller.time_until_tick(t0 + SECOND * 10), None);
}

#[test]
fn test_poll_before_deadline_does_nothing() {
    let (mut controller, log) = new_controller();
    set_time(&mut controller, "00", "00", "03");
    let t0 = Instant::now();
    controller.start(t0).unwrap();

    assert!(!controller.poll(t0 + Duration::from_millis(999)));
    assert_eq!(controller.remaining_seconds(), 3);
    assert!(log.borrow().played.is_empty());
    assert_eq!(
        controller.time_until_tick(t0 + Duration::from_millis(400)),
        Some(Duration::from_millis(600))
    );
}

#[test]
fn test_late_poll_runs_a_single_tick() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "00", "10");
    let t0 = Instant::now();
    controller.start(t0).unwrap();

    // A stalled loop catches up one second per poll, never in a burst
    assert!(controller.poll(t0 + SECOND * 3));
    assert_eq!(controller.remaining_seconds(), 9);
    assert!(!controller.poll(t0 + SECOND * 3));
    assert!(controller.poll(t0 + SECOND * 4));
    assert_eq!(controller.remaining_seconds(), 8);
}

#[test]
fn test_stop_while_stopped_is_noop() {
    let (mut controller, _log) = new_controller();
    let before_state = controller.state().clone();
    let before_display = controller.display();

    controller.stop();
    controller.stop();

    assert_eq!(controller.state(), &before_state);
    assert_eq!(controller.display(), before_display);
}

#[test]
fn test_stop_cancels_pending_tick() {
    let (mut controller, log) = new_controller();
    set_time(&mut controller, "00", "01", "00");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 2);

    controller.stop();

    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert!(!controller.poll(t0 + SECOND * 30), "Stale tick must not fire");
    assert_eq!(controller.remaining_seconds(), 58);
    assert_eq!(controller.display_text(), "00:00:58");
    assert_eq!(log.borrow().played.len(), 2);
}

#[test]
fn test_start_while_running_is_noop() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "00", "30");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 1);

    // Fields changed and Start pressed again mid-run
    set_time(&mut controller, "01", "00", "00");
    controller
        .start(t0 + Duration::from_millis(1500))
        .expect("second start is a no-op, not an error");

    assert_eq!(controller.remaining_seconds(), 29);
    assert_eq!(
        controller.time_until_tick(t0 + Duration::from_millis(1500)),
        Some(Duration::from_millis(500)),
        "Deadline should be the one armed by the first tick"
    );
    assert!(controller.poll(t0 + SECOND * 2));
    assert_eq!(controller.remaining_seconds(), 28);
}

#[test]
fn test_restart_after_stop_resumes_from_fields() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "00", "10");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 3);
    controller.stop();

    // Start always reads the fields, not the paused remainder
    controller.start(t0 + SECOND * 5).unwrap();
    assert_eq!(controller.remaining_seconds(), 10);
    assert!(!controller.poll(t0 + SECOND * 5 + Duration::from_millis(500)));
    assert!(controller.poll(t0 + SECOND * 6));
    assert_eq!(controller.remaining_seconds(), 9);
}

#[test]
fn test_reset_after_expiry() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "00", "02");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 2);
    assert!(controller.is_alarm_playing());

    controller.reset();

    assert_eq!(controller.remaining_seconds(), 0);
    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert_eq!(controller.display_text(), "00:00:00");
    for field in TimeField::ALL {
        assert_eq!(controller.field(field), "00");
    }
    assert!(!controller.is_alarm_playing());
}

#[test]
fn test_reset_while_running() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "05", "00");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 1);

    controller.reset();

    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert_eq!(controller.remaining_seconds(), 0);
    assert!(!controller.poll(t0 + SECOND * 60));
    assert_eq!(controller.display_text(), "00:00:00");
}

#[test]
fn test_sound_off_mid_countdown() {
    let (mut controller, log) = new_controller();
    set_time(&mut controller, "00", "00", "04");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 1);
    assert_eq!(log.borrow().played, vec![Cue::Tick]);

    controller.set_sound_enabled(false);
    assert!(!controller.sound_enabled());

    for n in 2..=4 {
        assert!(controller.poll(t0 + SECOND * n));
    }

    assert_eq!(log.borrow().played, vec![Cue::Tick], "No cues after disabling");
    assert_eq!(controller.display(), DisplayText::Expired);
    assert!(!controller.is_alarm_playing(), "Alarm must stay silent");
}

#[test]
fn test_sound_off_silences_alarm() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "00", "01");
    let t0 = Instant::now();
    controller.start(t0).unwrap();
    run_ticks(&mut controller, t0, 1);
    assert!(controller.is_alarm_playing());

    controller.set_sound_enabled(false);

    assert!(!controller.is_alarm_playing());
    assert_eq!(controller.display(), DisplayText::Expired);
}

#[test]
fn test_tick_phase_keeps_alternating_while_muted() {
    let (mut controller, log) = new_controller();
    set_time(&mut controller, "00", "00", "05");
    let t0 = Instant::now();
    controller.start(t0).unwrap();

    controller.set_sound_enabled(false);
    run_ticks(&mut controller, t0, 1);
    controller.set_sound_enabled(true);
    assert!(controller.poll(t0 + SECOND * 2));

    // Second one is a tock: the phase advanced during the muted second
    assert_eq!(log.borrow().played, vec![Cue::Tock]);
}

#[test]
fn test_rejected_keystroke_leaves_field() {
    let (mut controller, _log) = new_controller();
    assert!(!controller.edit_field(TimeField::Minutes, "0a"));
    assert_eq!(controller.field(TimeField::Minutes), "00");
    assert!(controller.edit_field(TimeField::Minutes, ""));
    assert_eq!(controller.field(TimeField::Minutes), "");
}

#[test]
fn test_hours_are_not_wrapped() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "100", "00", "00");
    controller.start(Instant::now()).unwrap();
    assert_eq!(controller.display_text(), "100:00:00");
}

#[test]
fn test_ticks_are_one_second_apart() {
    let (mut controller, _log) = new_controller();
    set_time(&mut controller, "00", "01", "00");
    let t0 = Instant::now();
    controller.start(t0).unwrap();

    assert_eq!(controller.time_until_tick(t0), Some(SECOND));
    assert!(!controller.poll(t0 + Duration::from_millis(100)));
    assert!(!controller.poll(t0 + Duration::from_millis(500)));
    assert_eq!(controller.remaining_seconds(), 60);

    assert!(controller.poll(t0 + SECOND));
    assert_eq!(controller.time_until_tick(t0 + SECOND), Some(SECOND));
    assert_eq!(controller.remaining_seconds(), 59);
}

#[test]
fn test_scheduling_failure_leaves_timer_stopped() {
    let mut controller = TimerController::new(BrokenTimer, AudioFeedback::silent());
    controller.edit_field(TimeField::Seconds, "10");

    let result = controller.start(Instant::now());

    assert!(matches!(result, Err(TimerError::Scheduling(_))));
    assert_eq!(controller.status(), TimerStatus::Stopped);
    assert_eq!(controller.remaining_seconds(), 0);
    assert_eq!(
        controller.display(),
        DisplayText::Time(0),
        "Display must not show a countdown that never started"
    );
    assert!(!controller.poll(Instant::now() + SECOND * 5));
}

#[test]
fn test_missing_output_device_shows_sound_off() {
    let mut controller = TimerController::new(DeadlineTimer::new(), AudioFeedback::new(None, true));
    assert!(!controller.sound_available());
    assert!(!controller.sound_enabled());

    controller.set_sound_enabled(true);
    assert!(!controller.sound_enabled());
}

#[test]
fn test_silent_audio_still_counts_down() {
    let mut controller = TimerController::new(DeadlineTimer::new(), AudioFeedback::silent());
    controller.edit_field(TimeField::Seconds, "2");
    let t0 = Instant::now();
    controller.start(t0).unwrap();

    assert!(controller.poll(t0 + SECOND));
    assert!(controller.poll(t0 + SECOND * 2));
    assert_eq!(controller.display(), DisplayText::Expired);
    assert!(!controller.is_alarm_playing());
}
