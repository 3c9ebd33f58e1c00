use discomarkov::clips::RenderedModel;
use discomarkov::output::{write_fact_files, write_templates, TEMPLATES_FILE};
use std::fs;
use tempfile::tempdir;

fn rendered(id: &str, name: &str) -> RenderedModel {
    RenderedModel {
        id: id.to_string(),
        name: name.to_string(),
        text: format!("(deffacts message-data-{}\n)\n", id),
    }
}

#[test]
fn test_one_file_per_user_named_after_display_name() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("facts");
    let paths = write_fact_files(&[rendered("1", "cherry"), rendered("2", "plum")], &out).unwrap();

    assert_eq!(paths, vec![out.join("cherry.clp"), out.join("plum.clp")]);
    assert_eq!(
        fs::read_to_string(out.join("plum.clp")).unwrap(),
        "(deffacts message-data-2\n)\n"
    );
}

#[test]
fn test_name_collisions_get_id_suffix() {
    let dir = tempdir().unwrap();
    let paths = write_fact_files(
        &[
            rendered("1", "cherry"),
            rendered("2", "cherry"),
            rendered("3", "templates"),
        ],
        dir.path(),
    )
    .unwrap();

    assert_eq!(paths[0], dir.path().join("cherry.clp"));
    assert_eq!(paths[1], dir.path().join("cherry-2.clp"));
    assert_eq!(paths[2], dir.path().join("templates-3.clp"));
}

#[test]
fn test_unsafe_names_stay_inside_directory() {
    let dir = tempdir().unwrap();
    let paths = write_fact_files(&[rendered("9", "../evil"), rendered("8", "")], dir.path()).unwrap();
    assert_eq!(paths[0], dir.path().join(".._evil.clp"));
    assert_eq!(paths[1], dir.path().join("8.clp"));
    assert!(paths.iter().all(|p| p.parent() == Some(dir.path())));
}

#[test]
fn test_templates_file() {
    let dir = tempdir().unwrap();
    let path = write_templates("(deftemplate word)\n", dir.path()).unwrap();
    assert_eq!(path, dir.path().join(TEMPLATES_FILE));
    assert_eq!(fs::read_to_string(path).unwrap(), "(deftemplate word)\n");
}

#[test]
fn test_suffixed_stem_never_reuses_a_taken_name() {
    let dir = tempdir().unwrap();
    let paths = write_fact_files(
        &[rendered("0", "a-2"), rendered("1", "a"), rendered("2", "a")],
        dir.path(),
    )
    .unwrap();

    assert_eq!(
        paths,
        vec![
            dir.path().join("a-2.clp"),
            dir.path().join("a.clp"),
            dir.path().join("a-2-2.clp"),
        ]
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    for (path, id) in paths.iter().zip(["0", "1", "2"]) {
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            format!("(deffacts message-data-{}\n)\n", id)
        );
    }
}
