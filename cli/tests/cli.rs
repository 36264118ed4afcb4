use std::{path::Path, process::Command};

use tempfile::tempdir;

fn shaderbake() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shaderbake"))
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    let out = dir.path().join("out");
    std::fs::create_dir(&src).unwrap();
    std::fs::write(src.join("a.vert"), "void main() {}").unwrap();

    let output = shaderbake().arg(&src).arg(&out).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("USAGE"));
    assert!(!out.exists());

    let output = shaderbake()
        .arg(&src)
        .arg(&out)
        .arg("glslangValidator")
        .arg("extra")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}

#[cfg(unix)]
mod unix {
    use std::{
        fs::{read_to_string, set_permissions, write, Permissions},
        os::unix::fs::PermissionsExt,
        path::{Path, PathBuf},
    };

    use tempfile::tempdir;

    use super::shaderbake;

    /// Writes a stand-in for glslangValidator that logs each source and copies
    /// it to the output path.
    fn fake_validator(dir: &Path) -> (PathBuf, PathBuf) {
        let script = dir.join("glslangValidator");
        let log = dir.join("invocations.log");
        write(
            &script,
            format!(
                "#!/bin/sh\n[ \"$1\" = \"-V\" ] && [ \"$3\" = \"-o\" ] || exit 2\necho \"$2\" >> '{}'\ncp \"$2\" \"$4\"\n",
                log.display()
            ),
        )
        .unwrap();
        set_permissions(&script, Permissions::from_mode(0o755)).unwrap();
        (script, log)
    }

    fn invocations(log: &Path) -> Vec<String> {
        read_to_string(log)
            .map(|text| text.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    #[test]
    fn compiles_then_skips() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        std::fs::create_dir_all(src.join("post")).unwrap();
        write(src.join("a.vert"), "void main() {}").unwrap();
        write(src.join("post").join("b.frag"), "void main() {}").unwrap();
        write(src.join("notes.txt"), "todo").unwrap();
        let (validator, log) = fake_validator(dir.path());

        let output = shaderbake()
            .arg(&src)
            .arg(&out)
            .arg(&validator)
            .env("RUST_LOG", "info")
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(out.join("a.vert.spv").is_file());
        assert!(out.join("post").join("b.frag.spv").is_file());
        assert!(!out.join("notes.txt.spv").exists());
        assert_eq!(invocations(&log).len(), 2);
        assert!(String::from_utf8_lossy(&output.stderr).contains("compiling"));

        let output = shaderbake()
            .arg(&src)
            .arg(&out)
            .arg(&validator)
            .env("RUST_LOG", "info")
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(invocations(&log).len(), 2);
        assert!(String::from_utf8_lossy(&output.stderr).contains("up to date"));
    }

    #[test]
    fn progress_is_logged_by_default() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir(&src).unwrap();
        write(src.join("a.vert"), "void main() {}").unwrap();
        let (validator, _) = fake_validator(dir.path());

        let output = shaderbake()
            .arg(&src)
            .arg(dir.path().join("out"))
            .arg(&validator)
            .env_remove("RUST_LOG")
            .output()
            .unwrap();
        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("compiling"));
        assert!(stderr.contains("a.vert.spv"));
    }

    #[test]
    fn compiler_failure_exits_non_zero() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let out = dir.path().join("out");
        std::fs::create_dir(&src).unwrap();
        write(src.join("a.comp"), "void main() {}").unwrap();

        let status = shaderbake()
            .arg(&src)
            .arg(&out)
            .arg("false")
            .status()
            .unwrap();
        assert_eq!(status.code(), Some(1));
        assert!(out.is_dir());
        assert!(!out.join("a.comp.spv").exists());
    }
}

#[test]
fn missing_source_dir_succeeds() {
    let dir = tempdir().unwrap();
    let output = shaderbake()
        .arg(dir.path().join("missing"))
        .arg(dir.path().join("out"))
        .arg(Path::new("glslangValidator"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping unreadable source path"));
    assert!(stderr.contains("compiled 0 shader(s), 0 up to date"));
    assert!(dir.path().join("out").is_dir());
}
