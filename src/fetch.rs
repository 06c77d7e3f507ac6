use std::path::PathBuf;

use crate::{
    error::{SkillGraphError, SkillGraphResult},
    model::SkillSet,
};

/// Capability for resolving a per-person skill-set fixture by reference
/// (e.g. `"alex-skills.json"`). Transport is the implementor's concern.
pub trait SkillSetSource {
    fn fetch(&self, reference: &str) -> SkillGraphResult<SkillSet>;
}

/// Filesystem-backed source resolving references under a fixture root.
#[derive(Clone, Debug)]
pub struct FsSkillSetSource {
    root: PathBuf,
}

impl FsSkillSetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SkillSetSource for FsSkillSetSource {
    #[tracing::instrument(skip(self))]
    fn fetch(&self, reference: &str) -> SkillGraphResult<SkillSet> {
        let rel = normalize_reference(reference)?;
        let path = self.root.join(&rel);
        let bytes = std::fs::read_to_string(&path).map_err(|e| {
            SkillGraphError::fetch(format!("read skill set '{}': {e}", path.display()))
        })?;
        let set = SkillSet::from_json(&bytes)?;
        set.validate()?;
        Ok(set)
    }
}

/// Normalize and validate root-relative fixture references.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
fn normalize_reference(reference: &str) -> SkillGraphResult<String> {
    let s = reference.replace('\\', "/");
    if s.starts_with('/') {
        return Err(SkillGraphError::fetch(
            "skill set references must be relative",
        ));
    }
    if s.is_empty() {
        return Err(SkillGraphError::fetch(
            "skill set reference must be non-empty",
        ));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(SkillGraphError::fetch(
                "skill set references must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(SkillGraphError::fetch(
            "skill set reference must contain a file name",
        ));
    }

    Ok(out.join("/"))
}
