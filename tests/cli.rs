use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    Command::cargo_bin("p2ring").unwrap()
}

#[test]
fn default_run_walks_all_stages() {
    demo()
        .assert()
        .success()
        .stdout(predicate::str::contains("\tCapacity: 16"))
        .stdout(predicate::str::contains("\tEmpty: true"))
        .stdout(predicate::str::contains("15) push true; peek 15; count 16"))
        .stdout(predicate::str::contains("16) push false"))
        .stdout(predicate::str::contains("17) peek 0; pop true; count 15"))
        .stdout(predicate::str::contains("32) peek 15; pop true; count 0"))
        .stdout(predicate::str::contains(
            "?) pop false; count 0; peek failed: offset 0 is out of range for 0 queued element(s)",
        ))
        .stdout(predicate::str::contains("3) peeked 36"))
        .stdout(predicate::str::contains(
            "-1) rejected: offset -1 is out of range for 16 queued element(s)",
        ))
        .stdout(predicate::str::contains("-> original 48; count 16"))
        .stdout(predicate::str::contains("-> modified 42; count 16"));
}

#[test]
fn single_slot_buffer() {
    demo()
        .args(["--pow", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tCapacity: 1"))
        .stdout(predicate::str::contains("1) push false"))
        .stdout(predicate::str::contains(
            "3) rejected: offset 3 is out of range for 1 queued element(s)",
        ))
        .stdout(predicate::str::contains("-> modified 42; count 1"));
}

#[test]
fn zero_cycles_skips_draining() {
    demo()
        .args(["--pow", "2", "--cycles", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draining").not())
        .stdout(predicate::str::contains("3) peeked 3"));
}

#[test]
fn exponent_out_of_range_is_rejected() {
    demo().args(["--pow", "11"]).assert().failure();
}

#[test]
fn bad_log_level_is_reported() {
    demo()
        .args(["--log-level", "=!bogus["])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log level"));
}
