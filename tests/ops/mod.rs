use easy_result::{Error, Result};
use std::cell::Cell;

fn e1() -> Error {
    Error::new("E1", "bad")
}

fn render(r: Result<i32>) -> String {
    r.match_with(|v| format!("ok:{v}"), |e| format!("err:{}", e.code()))
}

#[test]
fn test_match_scenario() {
    assert_eq!(render(Result::success(42)), "ok:42");
    assert_eq!(render(Result::failure(e1())), "err:E1");
}

#[test]
fn test_match_runs_exactly_one_branch() {
    let cases: Vec<Result<i32>> = vec![Result::success(1), Result::failure(e1())];

    for r in cases {
        let expect_success = r.is_success();
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        r.match_with(|_| successes.set(successes.get() + 1), |_| failures.set(failures.get() + 1));

        assert_eq!(successes.get() + failures.get(), 1);
        assert_eq!(successes.get() == 1, expect_success);
    }
}

#[test]
fn test_match_unit() {
    assert_eq!(Result::SUCCESS.match_unit(|| "done", |_| "failed"), "done");

    let failed: Result = Result::failure(e1());
    assert_eq!(failed.match_unit(|| String::new(), |e| e.message().to_owned()), "bad");
}

#[test]
fn test_map_on_success() {
    assert_eq!(*Result::success(5).map(|x| x * 2).value(), 10);
}

#[test]
fn test_map_changes_payload_type() {
    let r = Result::success(3).map(|n| "ab".repeat(n));
    assert_eq!(r.value(), "ababab");
}

#[test]
fn test_map_on_failure_skips_function_and_keeps_error() {
    let calls = Cell::new(0);
    let failed: Result<i32> = Result::failure(e1());

    let mapped: Result<String> = failed.map(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped, Result::failure(e1()));
}

#[test]
fn test_tap_on_success_calls_action_once() {
    let seen = Cell::new(None);
    let calls = Cell::new(0);

    let r = Result::success(9).tap(|v| {
        calls.set(calls.get() + 1);
        seen.set(Some(*v));
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(seen.get(), Some(9));
    assert_eq!(r, Result::success(9));
}

#[test]
fn test_tap_on_failure_never_calls_action() {
    let calls = Cell::new(0);
    let failed: Result<i32> = Result::failure(e1());

    let r = failed.tap(|_| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
    assert_eq!(r, Result::failure(e1()));
}

#[test]
#[should_panic(expected = "audit log unavailable")]
fn test_tap_propagates_action_panic() {
    let _ = Result::success(1).tap(|_| panic!("audit log unavailable"));
}

#[test]
fn test_tap_error() {
    let codes = std::cell::RefCell::new(Vec::new());

    let _ = Result::success(1).tap_error(|e| codes.borrow_mut().push(e.code().to_owned()));
    let failed: Result<i32> = Result::failure(e1());
    let failed = failed.tap_error(|e| codes.borrow_mut().push(e.code().to_owned()));

    assert_eq!(*codes.borrow(), vec!["E1".to_owned()]);
    assert!(failed.is_failure());
}

#[test]
fn test_ensure_passing_predicate_returns_original() {
    let r = Result::success(20).ensure(|v| *v > 10, e1());
    assert_eq!(r, Result::success(20));
}

#[test]
fn test_ensure_failing_predicate_returns_given_error() {
    let too_small = Error::new("Value.TooSmall", "Must exceed 10.");
    let r = Result::success(3).ensure(|v| *v > 10, too_small.clone());
    assert!(r.is_failure());
    assert_eq!(r.error(), &too_small);
}

#[test]
fn test_ensure_on_failure_skips_predicate() {
    let calls = Cell::new(0);
    let failed: Result<i32> = Result::failure(e1());

    let r = failed.ensure(
        |_| {
            calls.set(calls.get() + 1);
            false
        },
        Error::new("Other", "other"),
    );

    assert_eq!(calls.get(), 0);
    assert_eq!(r.error(), &e1());
}

#[test]
#[should_panic(expected = "A failure result must contain an error.")]
fn test_ensure_rejecting_with_none_panics() {
    let _ = Result::success(1).ensure(|_| false, Error::NONE);
}

#[test]
fn test_ensure_with_builds_error_lazily() {
    let builds = Cell::new(0);
    let build = |v: &i32| {
        builds.set(builds.get() + 1);
        Error::new("Limit", format!("{v} is over the limit"))
    };

    let ok = Result::success(1).ensure_with(|v| *v < 5, build);
    assert!(ok.is_success());
    assert_eq!(builds.get(), 0);

    let rejected = Result::success(8).ensure_with(|v| *v < 5, build);
    assert_eq!(builds.get(), 1);
    assert_eq!(rejected.error().message(), "8 is over the limit");
}

#[test]
fn test_and_then_chains_and_short_circuits() {
    let half = |n: i32| {
        if n % 2 == 0 {
            Result::success(n / 2)
        } else {
            Result::failure(Error::new("Odd", "not even"))
        }
    };

    assert_eq!(*Result::success(8).and_then(half).and_then(half).value(), 2);

    let calls = Cell::new(0);
    let r = Result::success(6).and_then(half).and_then(|n| {
        calls.set(calls.get() + 1);
        half(n)
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(r.error().code(), "Odd");
}

#[test]
fn test_or_else_recovers_failure_only() {
    let failed: Result<i32> = Result::failure(e1());
    assert_eq!(failed.or_else(|_| Result::success(0)), Result::success(0));

    let calls = Cell::new(0);
    let r = Result::success(5).or_else(|_| {
        calls.set(calls.get() + 1);
        Result::success(0)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(r, Result::success(5));
}

#[test]
fn test_map_error_rewrites_failure() {
    let failed: Result<i32> = Result::failure(e1());
    let r = failed.map_error(|e| Error::new(format!("Api.{}", e.code()), e.message().to_owned()));
    assert_eq!(r.error(), &Error::new("Api.E1", "bad"));

    assert_eq!(Result::success(1).map_error(|_| e1()), Result::success(1));
}

#[test]
#[should_panic(expected = "A failure result must contain an error.")]
fn test_map_error_to_none_panics() {
    let failed: Result<i32> = Result::failure(e1());
    let _ = failed.map_error(|_| Error::NONE);
}

#[test]
fn test_value_or() {
    let failed: Result<i32> = Result::failure(e1());
    assert_eq!(failed.clone().value_or(-1), -1);
    assert_eq!(Result::success(3).value_or(-1), 3);
    assert_eq!(failed.value_or_else(|e| e.code().len() as i32), 2);
}

#[test]
fn test_pipeline_preserves_error_identity() {
    let original = Error::new("Stock.Empty", "No stock left.");
    let failed: Result<u32> = Result::failure(original.clone());

    let r = failed
        .map(|n| n + 1)
        .tap(|_| unreachable!())
        .ensure(|_| unreachable!(), Error::new("Never", "never"))
        .map(|n| n.to_string());

    assert_eq!(r.error(), &original);
}
