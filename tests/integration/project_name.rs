use crate::helpers::prelude::*;

#[test]
fn it_needs_input_projectname() {
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a terminal").from_utf8());
}

#[test]
fn it_needs_input_author() {
    let dir = tempdir().build();

    binary()
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a terminal").from_utf8());

    assert!(dir.entries("").is_empty());
}

#[test]
fn it_accepts_underscores_and_dashes() {
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_name("foobar_project-2")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert!(dir.exists("foobar_project-2/foobar_project_2.py"));
}

#[test]
fn it_rejects_illegal_names() {
    for (name, reason) in [
        ("-test_1", "must start with a letter or a digit"),
        ("_incorrect", "must start with a letter or a digit"),
        ("$Te*st=2", "only letters, digits, `_` and `-` are allowed"),
        ("next&warning", "only letters, digits, `_` and `-` are allowed"),
        ("endswith-", "must not end with `-`"),
        ("One space", "contains whitespace"),
    ] {
        let dir = tempdir().build();

        binary()
            .arg_author("Alice")
            .arg_name(name)
            .current_dir(dir.path())
            .assert()
            .failure()
            .stderr(predicates::str::contains("invalid project name").from_utf8())
            .stderr(predicates::str::contains(reason).from_utf8());

        assert!(dir.entries("").is_empty(), "{name} left files behind");
    }
}

#[test]
fn it_rejects_path_separators() {
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_name("nested/demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("contains a path separator").from_utf8());

    assert!(dir.entries("").is_empty());
}
