mod common;

use common::*;
use scrollable_core::PartialPosition;
use scrollable_engine::scroll::{QueueState, ScrollOptions};

mod at_rest {
    use super::*;

    #[test]
    fn horizontal_move_after_redundant_append_starts_immediately() {
        let (mut s, clock) = window_at(50.0, 50.0);
        s.scroll_to(PartialPosition::x(50.0), ScrollOptions::append())
            .unwrap()
            .scroll_to(PartialPosition::x(150.0), ScrollOptions::append())
            .unwrap();

        after_scrolls(&mut s, &clock, 1);
        assert_eq!(s.position().y, 50.0);
        assert_fuzzy_eq(s.position().x, 150.0);
    }

    #[test]
    fn vertical_move_after_redundant_append_starts_immediately() {
        let (mut s, clock) = window_at(50.0, 50.0);
        s.scroll_to(PartialPosition::y(50.0), ScrollOptions::append())
            .unwrap()
            .scroll_to(PartialPosition::y(150.0), ScrollOptions::append())
            .unwrap();

        after_scrolls(&mut s, &clock, 1);
        assert_fuzzy_eq(s.position().y, 150.0);
        assert_eq!(s.position().x, 50.0);
    }

    #[test]
    fn move_on_both_axes_after_redundant_append_starts_immediately() {
        let (mut s, clock) = window_at(50.0, 50.0);
        s.scroll_to((50.0, 50.0), ScrollOptions::append())
            .unwrap()
            .scroll_to((150.0, 150.0), ScrollOptions::append())
            .unwrap();

        after_scrolls(&mut s, &clock, 1);
        assert_fuzzy_eq(s.position().x, 150.0);
        assert_fuzzy_eq(s.position().y, 150.0);
    }

    #[test]
    fn redundant_append_settles_synchronously_without_frames() {
        let (mut s, _clock) = window_at(50.0, 50.0);
        let log = CallLog::new();
        s.scroll_to(50.0, log.attach(ScrollOptions::append())).unwrap();

        assert_eq!(s.queue_state(), QueueState::Idle);
        assert_eq!(s.target().writes(), 0);
        assert!(!log.fired("step"));
        assert!(!log.fired("progress"));
        assert!(!log.fired("fail"));
        assert_eq!(log.lifecycle(), vec!["start", "done", "complete", "always"]);
        assert_eq!(log.message("done").as_deref(), Some("{}"));
    }
}

#[test]
fn second_identical_append_from_rest_is_discarded() {
    let (mut s, clock) = window_at(50.0, 50.0);
    let first = CallLog::new();
    let second = CallLog::new();
    s.scroll_to(PartialPosition::x(150.0), first.attach(ScrollOptions::append()))
        .unwrap()
        .scroll_to(PartialPosition::x(150.0), second.attach(ScrollOptions::append()))
        .unwrap();
    assert_eq!(s.pending_len(), 0);

    after_scrolls(&mut s, &clock, 1);
    assert_fuzzy_eq(s.position().x, 150.0);
    assert_eq!(s.position().y, 50.0);
    assert_eq!(first.count("start"), 1);
    assert!(second.is_empty());
}

mod while_running {
    use super::*;

    #[test]
    fn redundant_append_is_skipped() {
        let (mut s, clock) = window_at(0.0, 0.0);
        s.scroll_to(100.0, ScrollOptions::new()).unwrap();
        in_mid_scroll(&mut s, &clock);

        s.scroll_to(100.0, ScrollOptions::append()).unwrap();
        assert_eq!(s.pending_len(), 0);
        s.scroll_to(200.0, ScrollOptions::append()).unwrap();
        assert_eq!(s.pending_len(), 1);

        after_scrolls(&mut s, &clock, 2);
        assert_fuzzy_eq(s.position().y, 200.0);
        assert_eq!(s.queue_state(), QueueState::Idle);
    }

    #[test]
    fn callbacks_of_redundant_append_do_not_fire() {
        let (mut s, clock) = window_at(0.0, 0.0);
        s.scroll_to(100.0, ScrollOptions::new()).unwrap();
        in_mid_scroll(&mut s, &clock);

        let log = CallLog::new();
        s.scroll_to(100.0, log.attach(ScrollOptions::append())).unwrap();
        after_scrolls(&mut s, &clock, 1);

        assert!(log.is_empty());
    }

    #[test]
    fn running_animation_completes_with_empty_message() {
        let (mut s, clock) = window_at(0.0, 0.0);
        let log = CallLog::new();
        s.scroll_to(100.0, log.options()).unwrap();
        in_mid_scroll(&mut s, &clock);

        s.scroll_to(100.0, ScrollOptions::append()).unwrap();
        after_scrolls(&mut s, &clock, 1);

        assert_eq!(log.lifecycle(), vec!["start", "done", "complete", "always"]);
        assert_eq!(log.message("done").as_deref(), Some("{}"));
        assert_eq!(log.message("complete").as_deref(), Some("{}"));
        assert_eq!(log.message("always").as_deref(), Some("{}"));
    }

    #[test]
    fn frames_report_monotonic_progress() {
        let (mut s, clock) = window_at(0.0, 0.0);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = seen.clone();
        s.scroll_to(
            300.0,
            ScrollOptions::new()
                .on_progress(move |_, fraction, _| sink.borrow_mut().push(fraction)),
        )
        .unwrap();
        after_scrolls(&mut s, &clock, 1);

        let seen = seen.borrow();
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.last().copied(), Some(1.0));
    }
}

mod with_queue {
    use super::*;

    #[test]
    fn redundant_append_matching_queued_target_is_skipped() {
        let (mut s, clock) = window_at(0.0, 0.0);
        s.scroll_to(50.0, ScrollOptions::new())
            .unwrap()
            .scroll_to(100.0, ScrollOptions::append())
            .unwrap();
        early_in_mid_scroll(&mut s, &clock);

        s.scroll_to(100.0, ScrollOptions::append()).unwrap();
        s.scroll_to(200.0, ScrollOptions::append()).unwrap();
        assert_eq!(s.pending_len(), 2);

        after_scrolls(&mut s, &clock, 3);
        assert_fuzzy_eq(s.position().y, 200.0);
    }

    #[test]
    fn callbacks_of_redundant_append_do_not_fire() {
        let (mut s, clock) = window_at(0.0, 0.0);
        s.scroll_to(50.0, ScrollOptions::new())
            .unwrap()
            .scroll_to(100.0, ScrollOptions::append())
            .unwrap();
        early_in_mid_scroll(&mut s, &clock);

        let log = CallLog::new();
        s.scroll_to(100.0, log.attach(ScrollOptions::append())).unwrap();
        after_scrolls(&mut s, &clock, 2);

        assert!(log.is_empty());
    }

    #[test]
    fn initial_animation_completes_with_empty_message() {
        let (mut s, clock) = window_at(0.0, 0.0);
        let log = CallLog::new();
        s.scroll_to(50.0, log.options())
            .unwrap()
            .scroll_to(100.0, ScrollOptions::append())
            .unwrap();
        early_in_mid_scroll(&mut s, &clock);

        s.scroll_to(100.0, ScrollOptions::append()).unwrap();
        after_scrolls(&mut s, &clock, 2);

        assert_eq!(log.lifecycle(), vec!["start", "done", "complete", "always"]);
        assert_eq!(log.message("always").as_deref(), Some("{}"));
    }

    #[test]
    fn queued_animation_completes_with_empty_message() {
        let (mut s, clock) = window_at(0.0, 0.0);
        let log = CallLog::new();
        s.scroll_to(50.0, ScrollOptions::new())
            .unwrap()
            .scroll_to(100.0, log.attach(ScrollOptions::append()))
            .unwrap();
        early_in_mid_scroll(&mut s, &clock);

        s.scroll_to(100.0, ScrollOptions::append()).unwrap();
        after_scrolls(&mut s, &clock, 2);

        assert_eq!(log.lifecycle(), vec!["start", "done", "complete", "always"]);
        assert_eq!(log.message("complete").as_deref(), Some("{}"));
        assert_fuzzy_eq(s.position().y, 100.0);
    }
}
