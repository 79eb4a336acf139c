use crate::helpers::prelude::*;

#[test]
fn it_overrides_the_readme_from_an_include() {
    let template = create_template();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("my-tool")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        dir.read("my-tool/README.md"),
        "# My Tool\n\nMIT licensed, by Alice\n"
    );
    assert_eq!(
        dir.entries("my-tool"),
        ["LICENSE", "README.md", "TODO.md", "my_tool.py"]
    );
}

#[test]
fn it_lets_define_override_config_values() {
    let template = create_template();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_define("license=Apache-2.0")
        .arg_name("my-tool")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir
        .read("my-tool/README.md")
        .contains("Apache-2.0 licensed, by Alice"));
}

#[test]
fn it_adds_inline_files_and_drops_builtins() {
    let template = tempdir()
        .file(
            "autopb.toml",
            indoc! {r##"
                [template]
                builtin = false

                [[files]]
                path = "src/{{ module_name }}/__init__.py"
                contents = "# {{ project-name | shouty_snake_case }}\n"
            "##},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("my-tool")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.entries("my-tool"), ["src"]);
    assert_eq!(dir.read("my-tool/src/my_tool/__init__.py"), "# MY_TOOL\n");
}

#[test]
fn it_enables_packaging_from_the_config() {
    let template = tempdir()
        .file(
            "autopb.toml",
            indoc! {r#"
                [template]
                packaging = true
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("demo/setup.py"));
    assert!(dir.exists("demo/.gitignore"));
}

#[test]
fn it_reports_a_missing_include() {
    let template = tempdir()
        .file(
            "autopb.toml",
            indoc! {r#"
                [[files]]
                path = "NOTES.md"
                include = "notes.md.liquid"
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("include file not found").from_utf8());

    assert!(dir.entries("").is_empty());
}

#[test]
fn it_refuses_an_include_outside_the_template_dir() {
    let template = tempdir()
        .file(
            "autopb.toml",
            indoc! {r#"
                [[files]]
                path = "NOTES.md"
                include = "../notes.md.liquid"
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("outside the template directory").from_utf8());

    assert!(dir.entries("").is_empty());
}

#[test]
fn it_reports_unknown_variables_and_creates_nothing() {
    let template = tempdir()
        .file(
            "autopb.toml",
            indoc! {r#"
                [[files]]
                path = "TODO.md"
                contents = "{{ deadline }}"
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("error rendering template `TODO.md`").from_utf8());

    assert!(dir.entries("").is_empty());
}

#[test]
fn it_checks_the_required_version() {
    let template = tempdir()
        .file(
            "autopb.toml",
            indoc! {r#"
                [template]
                autopb_version = ">=99.0.0"
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("required autopb version not met").from_utf8());
}

#[test]
fn it_rejects_an_invalid_config() {
    let template = tempdir().file("autopb.toml", "[template\n").build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_template(template.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid configuration file").from_utf8());
}

#[test]
fn it_falls_back_to_the_user_template_dir() {
    let home = tempdir()
        .file(
            ".config/autopb/autopb.toml",
            indoc! {r#"
                [[files]]
                path = "TODO.md"
                contents = "- [ ] ship {{ project-name }}\n"
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_name("demo")
        .env("HOME", home.path())
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read("demo/TODO.md"), "- [ ] ship demo\n");
}

#[test]
fn it_ignores_a_user_template_dir_without_config() {
    let home = tempdir().file(".config/autopb/notes.txt", "x").build();
    let dir = tempdir().build();

    binary()
        .arg_author("Alice")
        .arg_name("demo")
        .env("HOME", home.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("has no autopb.toml").from_utf8());

    assert!(!dir.read("demo/TODO.md").is_empty());
}
