pub mod export;

pub use self::export::{Author, Channel, DateRange, Export, Guild, Message};

use crate::error::{MarkovError, MkResult};
use crate::model::{User, UserSet};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub fn parse_export(bytes: &[u8]) -> MkResult<Export> {
    Ok(serde_json::from_slice(bytes)?)
}

fn list_export_files(dir: &Path) -> MkResult<Vec<PathBuf>> {
    let mut entries = 0;
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries += 1;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    if entries == 0 {
        return Err(MarkovError::Validation(format!(
            "No files found in {}",
            dir.display()
        )));
    }
    files.sort();
    Ok(files)
}

/// Parses every `*.json` export in `dir` in parallel.
///
/// Files that are not valid exports are logged and skipped; failing to read a
/// file aborts.
pub fn parse_export_dir<P: AsRef<Path>>(dir: P) -> MkResult<Vec<Export>> {
    let dir = dir.as_ref();
    let files = list_export_files(dir)?;
    info!("Found {} export files in {}...", files.len(), dir.display());

    let parsed = files
        .par_iter()
        .map(|path| -> MkResult<Option<Export>> {
            let bytes = fs::read(path)?;
            debug!("Parsing file {}...", path.display());
            match parse_export(&bytes) {
                Ok(export) => Ok(Some(export)),
                Err(e) => {
                    warn!("Failed to parse file {}: {}", path.display(), e);
                    Ok(None)
                }
            }
        })
        .collect::<MkResult<Vec<_>>>()?;

    let exports: Vec<Export> = parsed.into_iter().flatten().collect();
    info!("Parsed {} of {} files", exports.len(), files.len());
    Ok(exports)
}

fn users_of(export: &Export) -> UserSet {
    debug!("Collecting users from {}...", export.channel.name);
    let mut users = UserSet::new();
    for message in &export.messages {
        let author = &message.author;
        users
            .entry(author.id.clone())
            .or_insert_with(|| User {
                id: author.id.clone(),
                name: author.name.clone(),
                messages: Vec::new(),
                roles: author.roles.clone(),
            })
            .messages
            .push(message.content.clone());
    }
    users
}

fn merge_users(mut into: UserSet, from: UserSet) -> UserSet {
    for (id, user) in from {
        match into.get_mut(&id) {
            Some(existing) => existing.messages.extend(user.messages),
            None => {
                into.insert(id, user);
            }
        }
    }
    into
}

/// Groups every message by author across all exports.
///
/// Each export is collected on its own and the partial maps are merged in
/// export order, so an author's messages stay in export-then-message order and
/// their first sighting fixes name and roles.
pub fn collect_users(exports: &[Export]) -> UserSet {
    let users = exports
        .par_iter()
        .map(users_of)
        .reduce(UserSet::new, merge_users);
    info!(
        "Collected {} users from {} exports",
        users.len(),
        exports.len()
    );
    users
}
