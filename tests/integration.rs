use std::process::{Command, Output};

fn run_bin(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_stemplot");

    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn renders_all_views_for_valid_input() {
    let output = run_bin(&["1,2,2,3,3,3"]);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Statistics Table"));
    assert!(stdout.contains("2.33"), "mean missing:\n{stdout}");
    assert!(stdout.contains("2.50"), "median missing:\n{stdout}");
    assert!(stdout.contains("3 (3 times)"), "mode missing:\n{stdout}");
    assert!(stdout.contains("Stem and Leaf Plot"));
    assert!(stdout.contains("1 2 2 3 3 3"), "leaves missing:\n{stdout}");
    assert!(stdout.contains("Frequency Table"));
    assert!(stdout.contains("Frequency Chart"));
    assert!(stdout.contains("###"), "bars missing:\n{stdout}");
}

#[test]
fn accepts_whitespace_around_commas() {
    let output = run_bin(&["10, 20, 30"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("18.17"), "geometric mean missing:\n{stdout}");
}

#[test]
fn emits_a_json_report() {
    let output = run_bin(&["10, 20, 30", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("stdout is not valid JSON");

    assert_eq!(report["summary"]["count"], 3);
    assert_eq!(report["summary"]["geometric_mean"], 18.17);
    assert_eq!(report["summary"]["sum"], 60.0);
    assert_eq!(report["stem_leaf"]["buckets"][0][0], 1);
    assert_eq!(report["frequency"]["entries"][0][1], 1);
}

#[test]
fn rejects_non_numeric_input_without_rendering() {
    for input in ["1,2,a", "1,,2"] {
        let output = run_bin(&[input]);
        assert!(!output.status.success(), "{input:?} was accepted");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("numeric values separated by commas"),
            "message missing for {input:?}:\n{stderr}"
        );
        assert!(
            stdout_of(&output).is_empty(),
            "{input:?} still rendered output"
        );
    }
}

#[test]
fn negative_products_yield_nan_not_a_crash() {
    let output = run_bin(&["-5,-5,10"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("NaN"));
}

#[test]
fn repeated_invocations_are_byte_identical() {
    let first = run_bin(&["4,8,15,16,23,42"]);
    let second = run_bin(&["4,8,15,16,23,42"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
