use std::ffi::OsStr;
use std::process::{Command, Output};

fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_test_compress_roundtrip"))
        .args(args)
        .output()
        .expect("spawn test_compress_roundtrip")
}

fn describe(out: &Output) -> String {
    format!(
        "status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
}

fn pointer_width() -> String {
    std::mem::size_of::<*const u8>().to_string()
}

#[test]
fn reference_configuration_exits_zero_silently() {
    let out = run(&["4", "1000", "16", "5", "1", "4"]);
    assert_eq!(out.status.code(), Some(0), "{}", describe(&out));
    assert!(out.stdout.is_empty(), "{}", describe(&out));
    assert!(out.stderr.is_empty(), "{}", describe(&out));
}

#[test]
fn minimal_configuration_exits_zero() {
    let align = pointer_width();
    let out = run(&["1", "1", align.as_str(), "0", "0", "1"]);
    assert_eq!(out.status.code(), Some(0), "{}", describe(&out));
}

#[test]
fn max_level_exits_zero() {
    let out = run(&["8", "2048", "64", "9", "1", "2"]);
    assert_eq!(out.status.code(), Some(0), "{}", describe(&out));
}

#[test]
fn bad_alignment_names_slot_three() {
    let out = run(&["4", "100", "12", "5", "1", "1"]);
    assert_eq!(out.status.code(), Some(1), "{}", describe(&out));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("position 3"), "{}", describe(&out));
    assert!(out.stdout.is_empty(), "{}", describe(&out));
}

#[test]
fn five_arguments_report_expected_six() {
    let out = run(&["4", "100", "16", "5", "1"]);
    assert_eq!(out.status.code(), Some(1), "{}", describe(&out));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("expected 6"), "{}", describe(&out));
}

#[test]
fn no_arguments_fail() {
    let out = run::<&str>(&[]);
    assert_eq!(out.status.code(), Some(1), "{}", describe(&out));
}

#[test]
fn each_slot_is_named_on_failure() {
    let good = ["4", "100", "16", "5", "1", "2"];
    let bad = ["0", "0", "20", "10", "2", "0"];
    for slot in 1..=6 {
        let mut v = good;
        v[slot - 1] = bad[slot - 1];
        let out = run(&v);
        assert_eq!(out.status.code(), Some(1), "slot {slot}: {}", describe(&out));
        let err = String::from_utf8_lossy(&out.stderr);
        assert!(
            err.contains(&format!("position {slot}")),
            "slot {slot}: {}",
            describe(&out)
        );
    }
}

#[test]
fn negative_values_reach_validation() {
    let out = run(&["4", "-1", "16", "5", "1", "1"]);
    assert_eq!(out.status.code(), Some(1), "{}", describe(&out));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("position 2"), "{}", describe(&out));
}

#[test]
fn help_and_version_tokens_are_slot_values() {
    let out = run(&["-h", "100", "16", "5", "1", "1"]);
    assert_eq!(out.status.code(), Some(1), "{}", describe(&out));
    assert!(out.stdout.is_empty(), "{}", describe(&out));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("position 1"), "{}", describe(&out));

    for flag in ["--help", "--version", "-V"] {
        let out = run(&[flag]);
        assert_eq!(out.status.code(), Some(1), "{flag}: {}", describe(&out));
        assert!(out.stdout.is_empty(), "{flag}: {}", describe(&out));
    }
}

#[cfg(unix)]
#[test]
fn non_utf8_value_names_its_slot() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let mut args: Vec<OsString> = ["4", "100", "16", "5", "1", "1"]
        .iter()
        .map(OsString::from)
        .collect();
    args[0] = OsString::from_vec(vec![0xFF]);

    let out = run(&args);
    assert_eq!(out.status.code(), Some(1), "{}", describe(&out));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("position 1"), "{}", describe(&out));
}
