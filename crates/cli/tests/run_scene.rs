use std::io::Write;
use std::process::Command;

#[test]
fn binary_runs_a_scene_file_to_completion() {
    let mut scene = tempfile::NamedTempFile::new().unwrap();
    writeln!(scene, "# two segments on a collision course").unwrap();
    writeln!(scene, "0.1 0.1 0.1 0.2 0.2 0.0 red").unwrap();
    writeln!(scene, "0.9 0.1 0.9 0.2 -0.2 0.0 blue").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_linesim-cli"))
        .arg("--scene")
        .arg(scene.path())
        .arg("--steps")
        .arg("20")
        .output()
        .expect("spawning linesim-cli");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 segments"));
}
