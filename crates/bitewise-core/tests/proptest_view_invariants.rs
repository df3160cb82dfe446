//! Property-based invariant tests for the page view state.
//!
//! Verifies:
//! 1. Carousel: exactly one active index for non-empty lists; N ticks return to start
//! 2. Carousel: every transition deactivates the previously active index
//! 3. Username: alphanumeric strings of length 5..=20 are accepted
//! 4. Username: any non-alphanumeric character is rejected
//! 5. Password: checks are independent; removing one property fails only that rule
//! 6. Confirm: valid iff equal and non-empty
//! 7. Steps: timer wraps, buttons clamp, index always in range
//! 8. Upload: only the latest generation's completion is applied

use bitewise_core::carousel::Carousel;
use bitewise_core::steps::StepCursor;
use bitewise_core::upload::UploadState;
use bitewise_core::validation::{ConfirmMatch, PasswordChecks, PasswordRule, Username, Validator};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_alnum(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z'),
            proptest::char::range('A', 'Z'),
            proptest::char::range('0', '9'),
        ],
        min..=max,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_non_alnum() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("non-alphanumeric", |c| !c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy)]
enum StepOp {
    Tick,
    Next,
    Prev,
}

fn arb_step_op() -> impl Strategy<Value = StepOp> {
    prop_oneof![Just(StepOp::Tick), Just(StepOp::Next), Just(StepOp::Prev)]
}

// ── Carousel ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn carousel_full_cycle_returns_to_start(len in 1usize..64, start in 0usize..64) {
        let mut c = Carousel::with_start(len, start);
        let first = c.active();
        prop_assert!(first.is_some());
        for _ in 0..len {
            c.tick();
        }
        prop_assert_eq!(c.active(), first);
    }

    #[test]
    fn carousel_transitions_chain(len in 1usize..32, ticks in 0usize..100) {
        let mut c = Carousel::new(len);
        let mut active = vec![false; len];
        active[0] = true;
        for _ in 0..ticks {
            let t = c.tick().expect("non-empty carousel always transitions");
            prop_assert!(active[t.deactivate]);
            active[t.deactivate] = false;
            active[t.activate] = true;
            prop_assert_eq!(active.iter().filter(|&&on| on).count(), 1);
            prop_assert_eq!(Some(t.activate), c.active());
        }
    }
}

// ── Validators ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn username_accepts_alnum_5_to_20(name in arb_alnum(5, 20)) {
        prop_assert!(Username.validate(&name).is_valid());
    }

    #[test]
    fn username_rejects_wrong_length(name in prop_oneof![arb_alnum(0, 4), arb_alnum(21, 40)]) {
        prop_assert!(Username.validate(&name).is_invalid());
    }

    #[test]
    fn username_rejects_any_non_alnum(
        name in arb_alnum(5, 19),
        bad in arb_non_alnum(),
        pos in 0usize..20,
    ) {
        let mut chars: Vec<char> = name.chars().collect();
        let pos = pos.min(chars.len());
        chars.insert(pos, bad);
        let candidate: String = chars.into_iter().collect();
        prop_assert!(Username.validate(&candidate).is_invalid(), "{:?}", candidate);
    }

    #[test]
    fn password_rules_are_independent(
        upper in proptest::char::range('A', 'Z'),
        lower in proptest::char::range('a', 'z'),
        digit in proptest::char::range('0', '9'),
        special in proptest::sample::select(vec!['!', '@', '#', '$', '%', '^', '&', '*']),
        filler in proptest::collection::vec(proptest::char::range('a', 'z'), 4..=8),
    ) {
        let mut base = vec![upper, lower, digit, special];
        base.extend(filler);
        let full: String = base.iter().collect();
        prop_assert!(PasswordChecks::evaluate(&full).is_all(), "{}", full);

        // Drop each property in turn; only that rule may fail.
        let cases: [(PasswordRule, String); 5] = [
            (PasswordRule::Length, full.chars().take(7).collect::<String>()),
            (PasswordRule::Uppercase, full.to_ascii_lowercase()),
            (PasswordRule::Lowercase, full.to_ascii_uppercase()),
            (PasswordRule::Number, full.replace(digit, "x")),
            (PasswordRule::Special, full.replace(special, "y")),
        ];
        for (rule, value) in cases {
            let checks = PasswordChecks::evaluate(&value);
            prop_assert!(!checks.passes(rule), "{:?} should fail for {:?}", rule, value);
            for other in PasswordRule::ALL {
                if other != rule && other != PasswordRule::Length {
                    prop_assert!(checks.passes(other), "{:?} broke {:?} for {:?}", rule, other, value);
                }
            }
        }
    }

    #[test]
    fn confirm_valid_iff_equal_non_empty(a in ".{0,16}", b in ".{0,16}") {
        let expected = !b.is_empty() && a == b;
        prop_assert_eq!(ConfirmMatch::new(&a).validate(&b).is_valid(), expected);
        prop_assert!(ConfirmMatch::new(&a).validate(&a).is_valid() == !a.is_empty());
    }
}

// ── Step cursor ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn step_index_stays_in_range(total in 1usize..12, ops in proptest::collection::vec(arb_step_op(), 0..64)) {
        let mut c = StepCursor::new(total);
        for op in ops {
            let before = c.current();
            match op {
                StepOp::Tick => {
                    prop_assert_eq!(c.tick(), Some((before + 1) % total));
                }
                StepOp::Next => {
                    let moved = c.next();
                    if before == total - 1 {
                        prop_assert_eq!(moved, None);
                        prop_assert_eq!(c.current(), before);
                    } else {
                        prop_assert_eq!(moved, Some(before + 1));
                    }
                }
                StepOp::Prev => {
                    let moved = c.prev();
                    if before == 0 {
                        prop_assert_eq!(moved, None);
                        prop_assert_eq!(c.current(), 0);
                    } else {
                        prop_assert_eq!(moved, Some(before - 1));
                    }
                }
            }
            prop_assert!(c.current() < total);
            let view = c.view().expect("non-empty cursor has a view");
            prop_assert!(view.progress_percent() > 0.0 && view.progress_percent() <= 100.0);
        }
    }
}

// ── Upload ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn only_latest_decode_applies(order in Just((0usize..6).collect::<Vec<_>>()).prop_shuffle()) {
        let mut state = UploadState::new();
        let tickets: Vec<_> = (0..6)
            .map(|_| state.accept("image/png").expect("image accepted"))
            .collect();
        let latest = tickets[5];
        for i in order {
            let applied = state.complete(tickets[i], format!("data:image/png;base64,{i}"));
            prop_assert_eq!(applied.is_some(), tickets[i] == latest);
        }
        prop_assert_eq!(state.preview(), Some("data:image/png;base64,5"));
    }
}
