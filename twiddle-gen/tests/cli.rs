use assert_cmd::Command;
use std::fs;

fn twiddle_gen() -> Command {
    Command::cargo_bin("twiddle-gen").unwrap()
}

#[test]
fn writes_both_files_to_the_given_paths() {
    let dir = tempfile::tempdir().unwrap();
    let c = dir.path().join("tables.c");
    let h = dir.path().join("tables.h");
    twiddle_gen()
        .arg("-f")
        .arg(&c)
        .arg("--he")
        .arg(&h)
        .env("RUST_LOG", "info")
        .assert()
        .success();

    let source = fs::read_to_string(&c).unwrap();
    let header = fs::read_to_string(&h).unwrap();
    assert!(source.contains("uint32_t rearranged_twiddle_tab_stride1_arr_16[2]={\n0,0,};"));
    assert!(header.starts_with("/* ---"));
    assert!(header.ends_with("#endif /*_ARM_MVE_TABLES_H*/\n\n"));
}

#[test]
fn single_dash_he_is_the_header_path_not_help() {
    let dir = tempfile::tempdir().unwrap();
    twiddle_gen()
        .current_dir(dir.path())
        .args(["-f", "a.c", "-he", "a.h"])
        .assert()
        .success();

    assert!(dir.path().join("a.c").is_file());
    let header = fs::read_to_string(dir.path().join("a.h")).unwrap();
    assert!(header.contains("extern float32_t rearranged_twiddle_stride3_4096[2728];"));
}

#[test]
fn default_paths_are_relative_to_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let scripts = dir.path().join("Scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::create_dir_all(dir.path().join("Source/CommonTables")).unwrap();
    fs::create_dir_all(dir.path().join("Include")).unwrap();

    twiddle_gen().current_dir(&scripts).assert().success();

    assert!(dir.path().join("Source/CommonTables/arm_mve_tables.c").is_file());
    assert!(dir.path().join("Include/arm_mve_tables.h").is_file());
}

#[test]
fn two_runs_produce_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let c = dir.path().join("a.c");
    let h = dir.path().join("a.h");
    let run = || {
        twiddle_gen()
            .arg("--c-file")
            .arg(&c)
            .arg("--h-file")
            .arg(&h)
            .assert()
            .success();
        (fs::read(&c).unwrap(), fs::read(&h).unwrap())
    };
    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn unwritable_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = twiddle_gen()
        .arg("-f")
        .arg(dir.path().join("missing/tables.c"))
        .arg("--he")
        .arg(dir.path().join("tables.h"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing"), "stderr: {stderr}");
}

#[test]
fn rejects_unknown_flags() {
    twiddle_gen().arg("--size").arg("32").assert().failure();
}
