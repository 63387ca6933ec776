//! Container law property tests.
//!
//! Uses proptest to verify the structural contracts of `Outcome` and `Maybe`:
//! - exactly one variant is active
//! - transformations preserve the inactive payload and never run on it
//! - `unwrap` panics only on the wrong variant

use std::cell::Cell;

use proptest::prelude::*;
use verdict::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Success),
        "[a-z ]{0,16}".prop_map(Failure),
    ]
}

fn arb_maybe() -> impl Strategy<Value = Maybe<i64>> {
    prop_oneof![any::<i64>().prop_map(Present), Just(Absent)]
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn success_inspection(v in any::<i64>()) {
        let ok: Outcome<i64, String> = Success(v);
        prop_assert!(ok.is_success());
        prop_assert!(!ok.is_failure());
        prop_assert_eq!(ok.unwrap(), v);
    }

    #[test]
    fn failure_inspection(e in ".*") {
        let err: Outcome<i64, String> = Failure(e.clone());
        prop_assert!(err.is_failure());
        prop_assert_eq!(err.clone().unwrap_failure(), e);
        prop_assert!(capture(move || err.unwrap()).is_failure());
    }

    #[test]
    fn exactly_one_variant(outcome in arb_outcome()) {
        prop_assert_ne!(outcome.is_success(), outcome.is_failure());
        prop_assert_eq!(
            outcome.clone().to_option_success().is_present(),
            outcome.clone().to_option_failure().is_absent()
        );
    }

    #[test]
    fn map_identity(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.clone().map(|v| v), outcome.clone());
        prop_assert_eq!(outcome.clone().map_failure(|e| e), outcome);
    }

    #[test]
    fn map_composition(outcome in arb_outcome()) {
        let f = |v: i64| v.wrapping_mul(3);
        let g = |v: i64| v.to_string();
        prop_assert_eq!(outcome.clone().map(f).map(g), outcome.map(|v| g(f(v))));
    }

    #[test]
    fn map_never_probes_failure(e in ".*") {
        let calls = Cell::new(0_u32);
        let mapped = Failure::<i64, _>(e.clone()).map(|v| {
            calls.set(calls.get() + 1);
            v
        });
        prop_assert_eq!(mapped, Failure(e));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_failure_never_probes_success(v in any::<i64>()) {
        let calls = Cell::new(0_u32);
        let mapped = Success::<_, String>(v).map_failure(|e| {
            calls.set(calls.get() + 1);
            e.len()
        });
        prop_assert_eq!(mapped, Success(v));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn chain_short_circuits(e in ".*") {
        let calls = Cell::new(0_u32);
        let chained = Failure::<i64, String>(e.clone()).chain(|v| {
            calls.set(calls.get() + 1);
            Success(v.to_string())
        });
        prop_assert_eq!(chained, Failure(e));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn chain_left_identity(v in any::<i64>()) {
        let step = |v: i64| -> Outcome<i64, String> {
            if v % 2 == 0 { Success(v / 2) } else { Failure(format!("{v} is odd")) }
        };
        prop_assert_eq!(Success(v).chain(step), step(v));
    }

    #[test]
    fn chain_right_identity(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.clone().chain(Success), outcome);
    }

    #[test]
    fn option_projection(v in any::<i64>(), e in ".*") {
        prop_assert_eq!(Success::<i64, String>(v).to_option_success(), Present(v));
        prop_assert_eq!(Failure::<i64, String>(e.clone()).to_option_success(), Absent);
        prop_assert_eq!(Failure::<i64, String>(e.clone()).to_option_failure(), Present(e));
        prop_assert_eq!(Success::<i64, String>(v).to_option_failure(), Absent);
    }

    #[test]
    fn std_result_roundtrip(outcome in arb_outcome()) {
        let result: Result<i64, String> = outcome.clone().into();
        prop_assert_eq!(result.is_ok(), outcome.is_success());
        prop_assert_eq!(Outcome::from(result), outcome);
    }
}

// ---------------------------------------------------------------------------
// Maybe
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn maybe_exactly_one_variant(maybe in arb_maybe()) {
        prop_assert_ne!(maybe.is_present(), maybe.is_absent());
    }

    #[test]
    fn unwrap_or_present(v in any::<i64>(), d in any::<i64>()) {
        prop_assert_eq!(Present(v).unwrap_or(d), v);
    }

    #[test]
    fn unwrap_or_absent(d in any::<i64>()) {
        prop_assert_eq!(Maybe::<i64>::Absent.unwrap_or(d), d);
    }

    #[test]
    fn maybe_map_identity(maybe in arb_maybe()) {
        prop_assert_eq!(maybe.map(|v| v), maybe);
    }

    #[test]
    fn maybe_chain_right_identity(maybe in arb_maybe()) {
        prop_assert_eq!(maybe.chain(Present), maybe);
    }

    #[test]
    fn maybe_unwrap_panics_only_when_absent(maybe in arb_maybe()) {
        prop_assert_eq!(capture(move || maybe.unwrap()).is_success(), maybe.is_present());
    }

    #[test]
    fn std_option_roundtrip(maybe in arb_maybe()) {
        let option: Option<i64> = maybe.into();
        prop_assert_eq!(Maybe::from(option), maybe);
    }
}

#[test]
fn chained_scenario() {
    let text = Success::<i32, String>(42)
        .chain(|v| Success(v.to_string()))
        .unwrap();
    assert_eq!(text, "42");
}

#[test]
fn absent_never_probes() {
    let calls = Cell::new(0_u32);
    let absent: Maybe<i64> = Absent;
    let mapped = absent.map(|v| {
        calls.set(calls.get() + 1);
        v
    });
    let chained = absent.chain(|v| {
        calls.set(calls.get() + 1);
        Present(v)
    });
    assert_eq!(mapped, Absent);
    assert_eq!(chained, Absent);
    assert_eq!(calls.get(), 0);
}
