use easy_result::{Error, Result};

fn not_found() -> Error {
    Error::new("Item.NotFound", "The item does not exist.")
}

#[test]
fn test_success_has_no_error() {
    let r = Result::success(42);
    assert!(r.is_success());
    assert!(!r.is_failure());
    assert_eq!(r.error(), &Error::NONE);
    assert_eq!(*r.value(), 42);
}

#[test]
fn test_failure_carries_error() {
    let r: Result<i32> = Result::failure(not_found());
    assert!(r.is_failure());
    assert!(!r.is_success());
    assert_eq!(r.error(), &not_found());
}

#[test]
fn test_shared_success_instance() {
    let r: Result = Result::SUCCESS;
    assert!(r.is_success());
    assert_eq!(r.error(), &Error::NONE);
    assert_eq!(r, Result::success(()));
}

#[test]
fn test_unit_failure() {
    let r: Result = Result::failure(not_found());
    assert!(r.is_failure());
    assert_eq!(r.error().code(), "Item.NotFound");
}

#[test]
fn test_success_iff_error_is_none() {
    let samples: Vec<Result<u8>> = vec![
        Result::success(0),
        Result::failure(Error::NULL_VALUE),
        Result::failure(Error::new("X", "")),
        Result::failure(Error::new("", "message only")),
        Result::success(255),
    ];

    for r in &samples {
        assert_eq!(r.is_success(), r.error() == &Error::NONE);
    }
}

#[test]
#[should_panic(expected = "A failure result must contain an error.")]
fn test_failure_with_none_panics() {
    let _: Result<i32> = Result::failure(Error::NONE);
}

#[test]
#[should_panic(expected = "A failure result must contain an error.")]
fn test_failure_with_structurally_empty_error_panics() {
    let _: Result = Result::failure(Error::new(String::new(), String::new()));
}

#[test]
fn test_value_returns_constructing_value() {
    let r = Result::success(String::from("payload"));
    assert_eq!(r.value(), "payload");
    assert_eq!(r.into_value(), "payload");
}

#[test]
#[should_panic(expected = "The value of a failure result can not be accessed. (error code: E1)")]
fn test_value_of_failure_panics_with_code() {
    let r: Result<i32> = Result::failure(Error::new("E1", "bad"));
    let _ = r.value();
}

#[test]
#[should_panic(expected = "(error code: Item.NotFound)")]
fn test_into_value_of_failure_panics() {
    let r: Result<String> = Result::failure(not_found());
    let _ = r.into_value();
}

#[test]
fn test_deconstruct() {
    let ok = Result::success(1);
    assert_eq!(ok.deconstruct(), (true, &Error::NONE));

    let failed: Result<i32> = Result::failure(not_found());
    let (is_success, error) = failed.deconstruct();
    assert!(!is_success);
    assert_eq!(error, &not_found());
}

#[test]
fn test_ok_and_err_accessors() {
    assert_eq!(Result::success(5).ok(), Some(5));
    assert_eq!(Result::success(5).err(), None);

    let failed: Result<i32> = Result::failure(not_found());
    assert_eq!(failed.clone().ok(), None);
    assert_eq!(failed.err(), Some(not_found()));
}

#[test]
fn test_as_ref_borrows_payload() {
    let r = Result::success(vec![1, 2, 3]);
    let len = r.as_ref().map(|v| v.len());
    assert_eq!(*len.value(), 3);
    assert_eq!(r.value(), &vec![1, 2, 3]);

    let failed: Result<Vec<i32>> = Result::failure(not_found());
    assert_eq!(failed.as_ref().error(), &not_found());
}

#[test]
fn test_into_unit_keeps_outcome() {
    assert_eq!(Result::success("x").into_unit(), Result::SUCCESS);

    let failed: Result<&str> = Result::failure(not_found());
    let unit = failed.into_unit();
    assert!(unit.is_failure());
    assert_eq!(unit.error(), &not_found());
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", Result::success(7)), "Success(7)");

    let failed: Result<i32> = Result::failure(Error::new("E1", "bad"));
    let debug = format!("{:?}", failed);
    assert!(debug.starts_with("Failure("));
    assert!(debug.contains("E1"));
}

#[test]
fn test_results_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Result<String>>();
    assert_send_sync::<Result>();

    let shared = std::sync::Arc::new(Result::success(10));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || *shared.value() * 2)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 20);
    }
}
