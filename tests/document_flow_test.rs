use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run signet with its home inside the given temp directory.
fn signet(home: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("signet");
    cmd.current_dir(home.path())
        .arg("--home")
        .arg(home.path().join("signet-home"));
    cmd
}

/// Create identities for alice and bob, let alice vouch for bob's
/// exported key, and sign `letter.txt` as bob.
fn exchange_keys_and_sign(dir: &assert_fs::TempDir) {
    for user in ["alice", "bob"] {
        signet(dir)
            .args(["identity", "ensure", user])
            .assert()
            .success();
    }

    signet(dir)
        .args(["identity", "export", "bob"])
        .assert()
        .success();

    signet(dir)
        .args(["trust", "import", "bob.pub", "--signer", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Now vouching for 'bob' as 'alice'"));

    dir.child("letter.txt").write_str("hello").unwrap();
    signet(dir)
        .args(["sign", "bob", "letter.txt"])
        .assert()
        .success();
}

#[test]
fn full_exchange_and_verification() {
    let dir = assert_fs::TempDir::new().unwrap();
    exchange_keys_and_sign(&dir);

    dir.child("letter.txt.sdoc").assert(predicate::path::exists());

    signet(&dir)
        .args(["verify", "letter.txt.sdoc", "--reader", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signature of 'bob' is valid"));
}

#[test]
fn tampered_document_fails_verification() {
    let dir = assert_fs::TempDir::new().unwrap();
    exchange_keys_and_sign(&dir);

    // Appending to the file changes the text, not the signature field.
    let doc_path = dir.child("letter.txt.sdoc");
    let mut payload = std::fs::read(doc_path.path()).unwrap();
    payload.push(b'!');
    std::fs::write(doc_path.path(), payload).unwrap();

    signet(&dir)
        .args(["verify", "letter.txt.sdoc", "--reader", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does NOT match"));
}

#[test]
fn truncated_document_is_a_format_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    exchange_keys_and_sign(&dir);

    dir.child("broken.sdoc").write_binary(&[0, 0]).unwrap();

    signet(&dir)
        .args(["verify", "broken.sdoc", "--reader", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncated"));
}

#[test]
fn unknown_author_fails_with_a_trust_hint() {
    let dir = assert_fs::TempDir::new().unwrap();

    for user in ["alice", "bob"] {
        signet(&dir)
            .args(["identity", "ensure", user])
            .assert()
            .success();
    }

    dir.child("letter.txt").write_str("hello").unwrap();
    signet(&dir)
        .args(["sign", "bob", "letter.txt"])
        .assert()
        .success();

    // Alice never imported bob's key.
    signet(&dir)
        .args(["verify", "letter.txt.sdoc", "--reader", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No trusted public key"));
}

#[test]
fn verification_is_per_reader() {
    let dir = assert_fs::TempDir::new().unwrap();
    exchange_keys_and_sign(&dir);

    signet(&dir)
        .args(["identity", "ensure", "carol"])
        .assert()
        .success();

    // Carol never vouched for bob; alice's record does not help her.
    signet(&dir)
        .args(["verify", "letter.txt.sdoc", "--reader", "carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed signature verification"));
}

#[test]
fn trust_list_shows_vouched_owners() {
    let dir = assert_fs::TempDir::new().unwrap();
    exchange_keys_and_sign(&dir);

    signet(&dir)
        .args(["trust", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn log_records_the_whole_exchange() {
    let dir = assert_fs::TempDir::new().unwrap();
    exchange_keys_and_sign(&dir);

    signet(&dir)
        .args(["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("key-import"))
        .stdout(predicate::str::contains("sign"));

    signet(&dir)
        .args(["log", "--author", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("key-import"));
}

#[test]
fn unwritable_audit_log_warns_but_does_not_fail_commands() {
    let dir = assert_fs::TempDir::new().unwrap();

    // A directory where the log file should be makes every append fail.
    std::fs::create_dir_all(dir.path().join("signet-home/audit.log")).unwrap();

    signet(&dir)
        .args(["identity", "ensure", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log not updated"));

    dir.child("letter.txt").write_str("hello").unwrap();
    signet(&dir)
        .args(["sign", "alice", "letter.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log not updated"));

    // The real artifact was still produced.
    dir.child("letter.txt.sdoc").assert(predicate::path::exists());
}

#[test]
fn signing_with_a_missing_identity_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("letter.txt").write_str("hello").unwrap();

    signet(&dir)
        .args(["sign", "ghost", "letter.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No key pair found"));
}
