//! Runs the built binary against shell-script stand-ins for javac, dx and
//! baksmali, wired up through java2smali.toml.

#![cfg(unix)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

const FAKE_JAVAC_OK: &str = r#"
for last; do :; done
case "$last" in
    *.java) printf 'class' > "${last%.java}.class" ;;
esac
"#;

const FAKE_JAVAC_FAIL: &str = r#"
echo "B.java:3: error: ';' expected" >&2
echo "1 error" >&2
exit 1
"#;

const FAKE_DX: &str = r#"
while [ $# -gt 0 ]; do
    if [ "$1" = "--output" ]; then out="$2"; shift; fi
    shift
done
printf 'dex\n035' > "$out"
"#;

const FAKE_BAKSMALI: &str = r#"
mkdir -p "$4"
printf '.class public LFoo;\n' > "$4/Foo.smali"
"#;

fn bin_path() -> &'static str {
    env!("CARGO_BIN_EXE_java2smali")
}

/// Write the fake tools and a java2smali.toml pointing at them.
fn setup_toolchain(dir: &Path, javac: &str) {
    let tools = dir.join("tools");
    fs::create_dir_all(&tools).expect("create tools dir");
    for (name, body) in [
        ("javac.sh", javac),
        ("dx.sh", FAKE_DX),
        ("baksmali.sh", FAKE_BAKSMALI),
    ] {
        fs::write(tools.join(name), body).expect("write fake tool");
    }

    let config = format!(
        "[toolchain]\njavac = [\"sh\", \"{0}/javac.sh\"]\ndx = [\"sh\", \"{0}/dx.sh\"]\nbaksmali = [\"sh\", \"{0}/baksmali.sh\"]\n",
        tools.display()
    );
    fs::write(dir.join("java2smali.toml"), config).expect("write config");
}

fn write_source(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, "public class X {}\n").expect("write source");
    path.to_path_buf()
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run java2smali")
}

#[test]
fn help_runs() {
    let output = Command::new(bin_path())
        .arg("--help")
        .output()
        .expect("failed to run java2smali --help");

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "unexpected help output: {stdout}");
    assert!(stdout.contains("convert"));
}

#[test]
fn version_runs() {
    let output = Command::new(bin_path())
        .arg("--version")
        .output()
        .expect("failed to run java2smali --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("java2smali "), "unexpected version: {stdout}");
}

#[test]
fn convert_single_file() {
    let temp = TempDir::new().expect("tempdir");
    setup_toolchain(temp.path(), FAKE_JAVAC_OK);
    let source = write_source(&temp.path().join("Foo.java"));

    let output = run(temp.path(), &["convert", "Foo.java"]);

    assert!(
        output.status.success(),
        "convert should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(temp.path().join("converted/Foo.smali").is_file());
    assert!(source.is_file());
    assert!(!temp.path().join("Foo.class").exists());
    assert!(!temp.path().join("classes.dex").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mode: file"), "unexpected report: {stdout}");
}

#[test]
fn convert_directory_with_compile_error_aborts() {
    let temp = TempDir::new().expect("tempdir");
    setup_toolchain(temp.path(), FAKE_JAVAC_FAIL);
    write_source(&temp.path().join("proj/A.java"));
    write_source(&temp.path().join("proj/B.java"));

    let output = run(temp.path(), &["convert", "proj"]);

    assert!(!output.status.success(), "convert should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("B.java:3: error: ';' expected"),
        "compiler output should be shown: {stderr}"
    );
    assert!(temp.path().join("FilesList.txt").is_file());
    assert!(!temp.path().join("classes.dex").exists());
    assert!(!temp.path().join("converted").exists());

    let manifest = fs::read_to_string(temp.path().join("FilesList.txt")).expect("read manifest");
    assert_eq!(manifest.lines().count(), 2);
}

#[test]
fn convert_missing_input_fails() {
    let temp = TempDir::new().expect("tempdir");

    let output = run(temp.path(), &["convert", "Missing.java"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"), "unexpected stderr: {stderr}");
}

#[test]
fn convert_with_missing_compiler_fails() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(
        temp.path().join("java2smali.toml"),
        "[toolchain]\njavac = \"java2smali-test-no-such-javac\"\n",
    )
    .expect("write config");
    write_source(&temp.path().join("Foo.java"));

    let output = run(temp.path(), &["convert", "Foo.java"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "unexpected stderr: {stderr}");
}

#[test]
fn clean_removes_leftovers() {
    let temp = TempDir::new().expect("tempdir");
    write_source(&temp.path().join("proj/A.java"));
    fs::write(temp.path().join("FilesList.txt"), "A.java\n").expect("write manifest");
    fs::create_dir_all(temp.path().join("proj_compiled")).expect("create dir");
    fs::write(temp.path().join("proj_compiled/A.class"), "class").expect("write class");

    let dry = run(temp.path(), &["clean", "--dry-run", "proj"]);
    assert!(dry.status.success());
    assert!(String::from_utf8_lossy(&dry.stdout).contains("Would delete:"));
    assert!(temp.path().join("FilesList.txt").exists());

    let output = run(temp.path(), &["clean", "proj"]);
    assert!(output.status.success());
    assert!(!temp.path().join("FilesList.txt").exists());
    assert!(!temp.path().join("proj_compiled").exists());
    assert!(temp.path().join("proj/A.java").is_file());
}

#[test]
fn class_file_input_is_never_deleted() {
    let temp = TempDir::new().expect("tempdir");
    let class = temp.path().join("Foo.class");
    fs::write(&class, b"\xca\xfe\xba\xbe").expect("write class");

    let dry = run(temp.path(), &["clean", "--dry-run", "Foo.class"]);
    assert!(!dry.status.success());
    assert!(!String::from_utf8_lossy(&dry.stdout).contains("Would delete"));

    let output = run(temp.path(), &["clean", "Foo.class"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already a class file"), "unexpected stderr: {stderr}");
    assert!(class.is_file(), "Foo.class must survive clean");

    let convert = run(temp.path(), &["convert", "Foo.class"]);
    assert!(!convert.status.success());
    assert!(class.is_file(), "Foo.class must survive convert");
}
