use std::path::PathBuf;

use skillgraph::{Canvas, Member, Point, Skill, SkillSet};

fn smoke_set() -> SkillSet {
    SkillSet {
        member: Member {
            id: "alex".to_string(),
            name: "Alex Chen".to_string(),
            role: "Lead Developer".to_string(),
            image: "@".to_string(),
        },
        canvas: Canvas {
            width: 600.0,
            height: 500.0,
        },
        skills: vec![
            Skill {
                id: "a".to_string(),
                name: "React".to_string(),
                icon: "*".to_string(),
                level: 90,
                description: "components".to_string(),
                position: Point::new(150.0, 120.0),
                connections: vec!["b".to_string()],
            },
            Skill {
                id: "b".to_string(),
                name: "TypeScript".to_string(),
                icon: "*".to_string(),
                level: 85,
                description: "types".to_string(),
                position: Point::new(450.0, 380.0),
                connections: vec![],
            },
        ],
    }
}

fn bin_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_skillgraph")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "skillgraph.exe"
            } else {
                "skillgraph"
            });
            p
        })
}

#[test]
fn cli_render_writes_svg() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let set_path = dir.join("skills.json");
    // Nested output dir must be created by the binary itself.
    let out_path = dir.join("render").join("out.svg");
    let _ = std::fs::remove_file(&out_path);

    let f = std::fs::File::create(&set_path).unwrap();
    serde_json::to_writer_pretty(f, &smoke_set()).unwrap();

    let set_arg = set_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(bin_exe())
        .args(["render", "--in", set_arg.as_str(), "--out"])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());

    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains("<path "));
    assert_eq!(svg.matches("<circle ").count(), 2);
    // No --width/--height: the viewport falls back to the fixture canvas.
    assert!(svg.contains(r#"viewBox="0 0 600 500""#));
}

#[test]
fn cli_render_honors_explicit_viewport() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let set_path = dir.join("skills_scaled.json");
    let out_path = dir.join("out_scaled.svg");
    let _ = std::fs::remove_file(&out_path);

    let f = std::fs::File::create(&set_path).unwrap();
    serde_json::to_writer_pretty(f, &smoke_set()).unwrap();

    let set_arg = set_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(bin_exe())
        .args([
            "render",
            "--in",
            set_arg.as_str(),
            "--width",
            "1200",
            "--height",
            "1000",
            "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 1200 1000""#));
}

#[test]
fn cli_validate_accepts_a_good_fixture() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let set_path = dir.join("skills_validate.json");
    let f = std::fs::File::create(&set_path).unwrap();
    serde_json::to_writer_pretty(f, &smoke_set()).unwrap();

    let set_arg = set_path.to_string_lossy().to_string();
    let status = std::process::Command::new(bin_exe())
        .args(["validate", "--in", set_arg.as_str()])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn cli_validate_rejects_a_bad_fixture() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let mut set = smoke_set();
    set.skills[0].level = 250;

    let set_path = dir.join("skills_bad.json");
    let f = std::fs::File::create(&set_path).unwrap();
    serde_json::to_writer_pretty(f, &set).unwrap();

    let set_arg = set_path.to_string_lossy().to_string();
    let status = std::process::Command::new(bin_exe())
        .args(["validate", "--in", set_arg.as_str()])
        .status()
        .unwrap();
    assert!(!status.success());
}
