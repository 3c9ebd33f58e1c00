use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    input_dir: PathBuf,
    out_dir: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_dir = dir.path().join("input");
        let out_dir = dir.path().join("out");
        fs::create_dir_all(&input_dir).unwrap();

        let export = serde_json::json!({
            "guild": { "id": "1", "name": "guild", "iconUrl": "" },
            "channel": { "id": "2", "type": "GuildTextChat", "name": "general" },
            "messages": [
                { "id": "m1", "content": "hey what s up",
                  "author": { "id": "111", "name": "U1", "roles": [{ "id": "7", "name": "admin" }] } },
                { "id": "m2", "content": "good morning",
                  "author": { "id": "112", "name": "U2", "roles": [] } },
                { "id": "m3", "content": "lol no",
                  "author": { "id": "111", "name": "U1", "roles": [{ "id": "7", "name": "admin" }] } },
                { "id": "m4", "content": "not me",
                  "author": { "id": "900", "name": "U3", "roles": [{ "id": "8", "name": "mod" }] } }
            ]
        });
        fs::write(input_dir.join("general.json"), export.to_string()).unwrap();

        Self {
            dir,
            input_dir,
            out_dir,
        }
    }

    fn users_path(&self) -> PathBuf {
        self.out_dir.join("users.json")
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_discomarkov"))
        .args(args)
        .output()
        .expect("Failed to run binary")
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

fn export(ctx: &TestContext) {
    let output = run(&[
        "export",
        "-i",
        path_str(&ctx.input_dir),
        "-o",
        path_str(&ctx.out_dir),
    ]);
    assert!(
        output.status.success(),
        "export failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_export_writes_users() {
    let ctx = TestContext::new();
    export(&ctx);

    let users: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ctx.users_path()).unwrap()).unwrap();
    assert_eq!(users["111"]["messages"][0], "hey what s up");
    assert_eq!(users["111"]["messages"][1], "lol no");
    assert_eq!(users["900"]["roles"][0]["name"], "mod");
}

#[test]
fn test_generate_json_with_filter() {
    let ctx = TestContext::new();
    export(&ctx);

    let output = run(&[
        "generate",
        "-i",
        path_str(&ctx.users_path()),
        "-o",
        path_str(&ctx.out_dir),
        "-f",
        "uid:11",
        "--report",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bigrams"));
    assert!(stdout.contains("U1"));

    let models: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(ctx.out_dir.join("models.json")).unwrap())
            .unwrap();
    assert!(models.get("900").is_none());
    assert_eq!(models["111"]["ngrams"][0]["grams"]["lol no"], 1);
    assert_eq!(models["112"]["wordFrequency"]["good"], 1);
}

#[test]
fn test_generate_clips_files() {
    let ctx = TestContext::new();
    export(&ctx);
    let facts = ctx.dir.path().join("facts");

    let output = run(&[
        "generate",
        "-i",
        path_str(&ctx.users_path()),
        "-o",
        path_str(&facts),
        "-t",
        "clips",
        "-f",
        "r:adm",
    ]);
    assert!(output.status.success());

    let u1 = fs::read_to_string(facts.join("U1.clp")).unwrap();
    assert!(u1.starts_with("(deffacts message-data-111\n"));
    assert!(u1.contains(r#"(bigram (first-word "lol") (second-word "no") (frequency 1))"#));
    // U2 has no roles and passes the role clause vacuously
    assert!(facts.join("U2.clp").exists());
    assert!(!facts.join("U3.clp").exists());
    assert!(fs::read_to_string(facts.join("templates.clp"))
        .unwrap()
        .contains("(deftemplate trigram"));
}

#[test]
fn test_bad_filter_fails_before_writing() {
    let ctx = TestContext::new();
    export(&ctx);

    for filter in ["name:cherry", "cherry"] {
        let output = run(&[
            "generate",
            "-i",
            path_str(&ctx.users_path()),
            "-o",
            path_str(&ctx.out_dir),
            "-f",
            filter,
        ]);
        assert!(!output.status.success(), "filter {} should fail", filter);
        assert!(!ctx.out_dir.join("models.json").exists());
    }
}

#[test]
fn test_bad_window_size_fails() {
    let ctx = TestContext::new();
    export(&ctx);

    let output = run(&[
        "generate",
        "-i",
        path_str(&ctx.users_path()),
        "-o",
        path_str(&ctx.out_dir),
        "--window-sizes",
        "2,11",
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_export_of_empty_dir_fails() {
    let ctx = TestContext::new();
    let empty = ctx.dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let output = run(&["export", "-i", path_str(&empty), "-o", path_str(&ctx.out_dir)]);
    assert!(!output.status.success());
}
