use crate::clips::RenderedModel;
use crate::error::MkResult;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const FACT_FILE_EXTENSION: &str = "clp";
const TEMPLATES_STEM: &str = "templates";
pub const TEMPLATES_FILE: &str = "templates.clp";

/// Turns a display name into a file stem; falls back to `id` when nothing usable is left.
pub fn file_stem(name: &str, id: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        id.to_string()
    } else {
        stem
    }
}

/// Claims `stem`, else `<stem>-<id>`, else `<stem>-<id>-<k>` for the first free `k`.
fn unique_stem(taken: &mut HashSet<String>, stem: String, id: &str) -> String {
    if taken.insert(stem.clone()) {
        return stem;
    }
    let base = format!("{}-{}", stem, id);
    let mut candidate = base.clone();
    let mut k = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}-{}", base, k);
        k += 1;
    }
    candidate
}

/// Writes one `<name>.clp` per rendered model into `dir`.
///
/// Later models whose stem is already taken (or clashes with the templates
/// file) get `-<id>` appended, plus a counter if that is taken too, so the
/// first one in id order keeps the bare name and no two models share a file.
pub fn write_fact_files<P: AsRef<Path>>(
    rendered: &[RenderedModel],
    dir: P,
) -> MkResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut taken = HashSet::from([TEMPLATES_STEM.to_string()]);
    let mut paths = Vec::with_capacity(rendered.len());
    for model in rendered {
        let stem = unique_stem(&mut taken, file_stem(&model.name, &model.id), &model.id);

        let path = dir.join(format!("{}.{}", stem, FACT_FILE_EXTENSION));
        debug!("Writing facts for {} to {}", model.id, path.display());
        fs::write(&path, &model.text)?;
        paths.push(path);
    }

    info!("Wrote {} fact files to {}", paths.len(), dir.display());
    Ok(paths)
}

pub fn write_templates<P: AsRef<Path>>(templates: &str, dir: P) -> MkResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(TEMPLATES_FILE);
    fs::write(&path, templates)?;
    Ok(path)
}
