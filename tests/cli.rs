use assert_cmd::Command;
use predicates::prelude::*;

const ENCODED: &str =
    "$argon2id$v=19$m=32768,t=1,p=1$c2FsdHNhbHQ$i3ZCXD8RMwu4akQl0xCL9L3ZJjV0lIutsAO27+vSS5s";

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("argon2-phc"));
    cmd.env_remove("ARGON2_PHC_PASSWORD").env_remove("RUST_LOG");
    cmd
}

fn hash_cmd() -> Command {
    let mut cmd = bin();
    cmd.arg("hash").args(["-m", "64", "-t", "1", "-p", "1"]);
    cmd
}

#[test]
fn hash_prints_status_and_encoded_hash() {
    hash_cmd()
        .arg("pw")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating argon2id hash with m=64, t=1, p=1",
        ))
        .stdout(predicate::str::contains("$argon2id$v=19$m=64,t=1,p=1$"));
}

#[test]
fn silent_hash_prints_only_encoded_hash() {
    hash_cmd()
        .arg("--silent")
        .arg("pw")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$argon2id$v=19$m=64,t=1,p=1$"))
        .stdout(predicate::str::contains("Generating").not());
}

#[test]
fn hash_reads_password_from_env() {
    hash_cmd()
        .env("ARGON2_PHC_PASSWORD", "pw")
        .assert()
        .success()
        .stdout(predicate::str::contains("$argon2id$"));
}

#[test]
fn hash_reads_password_from_stdin() {
    hash_cmd()
        .args(["--variant", "i", "--salt-len", "8", "--hash-len", "16"])
        .write_stdin("pw\n")
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"\$argon2i\$v=19\$m=64,t=1,p=1\$[A-Za-z0-9+/]{11}\$[A-Za-z0-9+/]{22}\n",
            )
            .unwrap(),
        );
}

#[test]
fn hash_without_password_fails() {
    hash_cmd()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no password provided"));
}

#[test]
fn hash_rejects_parallelism_out_of_range() {
    bin()
        .args(["hash", "-p", "256", "pw"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("256"));
}

#[test]
fn hash_rejects_unknown_variant_with_status_1() {
    hash_cmd()
        .args(["--variant", "x", "pw"])
        .assert()
        .code(1);
}

#[test]
fn help_exits_successfully() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hash"));
}

#[test]
fn hash_rejects_zero_time_cost() {
    bin()
        .args(["hash", "-m", "64", "-t", "0", "-p", "1", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("time cost must be >= 1"));
}

#[test]
fn hash_rejects_argon2d() {
    hash_cmd()
        .args(["--variant", "d", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("argon2d hashing is unsupported"));
}

#[test]
fn hash_then_verify_roundtrip() {
    let output = hash_cmd().args(["-s", "pw"]).output().unwrap();
    assert!(output.status.success());
    let encoded = String::from_utf8(output.stdout).unwrap();

    bin()
        .args(["verify", encoded.trim(), "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password matches"));
}

#[test]
fn verify_reference_vector() {
    bin()
        .args(["verify", ENCODED])
        .env("ARGON2_PHC_PASSWORD", "password")
        .assert()
        .success()
        .stdout(predicate::str::contains("password matches"));
}

#[test]
fn verify_wrong_password_fails() {
    bin()
        .args(["verify", ENCODED, "wrong_pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "the password does not match the supplied hash",
        ));
}

#[test]
fn silent_still_reports_errors() {
    bin()
        .args(["--silent", "verify", ENCODED, "wrong_pw"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "the password does not match the supplied hash",
        ));
}

#[test]
fn verify_malformed_hash_fails() {
    bin()
        .args([
            "verify",
            "$argon2id$v=19$m=4294967296,t=1,p=1$c2FsdHNhbHQ$aGFzaA",
            "pw",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decoding failed"));
}

#[test]
fn inspect_prints_parameters() {
    bin()
        .args(["inspect", ENCODED])
        .assert()
        .success()
        .stdout(predicate::str::contains("Variant:     argon2id"))
        .stdout(predicate::str::contains("MemoryCost:  32768 KiB"))
        .stdout(predicate::str::contains("SaltLength:  8"));
}

#[test]
fn inspect_json() {
    bin()
        .args(["inspect", "--json", "$argon2d$v=16$m=16,t=2,p=1$AA$AA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"variant\": \"argon2d\""))
        .stdout(predicate::str::contains("\"version\": 16"));
}

#[test]
fn inspect_unknown_type_fails() {
    bin()
        .args(["inspect", "$argon2x$v=19$m=16,t=2,p=1$AA$AA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("there is no such version of argon2"));
}
