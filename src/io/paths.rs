use std::path::{Component, Path, PathBuf};

use crate::model::Category;
use crate::{Result, ScoutError};

/// Output layout under the skill directory
#[derive(Debug, Clone)]
pub struct SkillPaths {
    /// Skill root (SKILL.md lives here)
    pub skill_dir: PathBuf,
    /// Sync script directory (scripts/)
    pub scripts_dir: PathBuf,
    /// Generated references (references/)
    pub references_dir: PathBuf,
    /// Per-category documents (references/patterns/)
    pub patterns_dir: PathBuf,
}

impl SkillPaths {
    pub fn new(skill_dir: impl Into<PathBuf>) -> Self {
        let skill_dir = skill_dir.into();
        let scripts_dir = skill_dir.join("scripts");
        let references_dir = skill_dir.join("references");
        let patterns_dir = references_dir.join("patterns");
        Self {
            skill_dir,
            scripts_dir,
            references_dir,
            patterns_dir,
        }
    }

    /// Instruction document
    pub fn skill_md(&self) -> PathBuf {
        self.skill_dir.join("SKILL.md")
    }

    /// Local copy of the sync script kept current by the self-updater
    pub fn sync_script(&self) -> PathBuf {
        self.scripts_dir.join("sync_patterns.py")
    }

    pub fn index_file(&self) -> PathBuf {
        self.references_dir.join("patterns-index.md")
    }

    pub fn meta_file(&self) -> PathBuf {
        self.references_dir.join("meta.json")
    }

    /// Category document path; the slug must be a single plain file name
    pub fn category_file(&self, category: &Category) -> Result<PathBuf> {
        let file_name = format!("{}.md", category.slug());
        let mut components = Path::new(&file_name).components();
        let single_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        let path = self.patterns_dir.join(&file_name);
        if !single_name
            || file_name.contains(|c: char| c == '/' || c == '\\')
            || path.parent() != Some(self.patterns_dir.as_path())
        {
            return Err(ScoutError::Path(format!(
                "category '{}' does not map to a file inside {}",
                category,
                self.patterns_dir.display()
            )));
        }

        Ok(path)
    }

    /// Create references/ and references/patterns/
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.references_dir, &self.patterns_dir] {
            std::fs::create_dir_all(dir).map_err(|e| ScoutError::io(dir, e))?;
        }
        Ok(())
    }
}

/// Whole-file overwrite
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| ScoutError::io(path, e))
}

/// Overwrite via a temporary file in the same directory and a rename
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    use std::io::Write;

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| ScoutError::io(parent, e))?;

    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(|e| ScoutError::io(parent, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ScoutError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| ScoutError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout() {
        let paths = SkillPaths::new("/skill");
        assert_eq!(paths.skill_md(), PathBuf::from("/skill/SKILL.md"));
        assert_eq!(
            paths.sync_script(),
            PathBuf::from("/skill/scripts/sync_patterns.py")
        );
        assert_eq!(
            paths.index_file(),
            PathBuf::from("/skill/references/patterns-index.md")
        );
        assert_eq!(
            paths.meta_file(),
            PathBuf::from("/skill/references/meta.json")
        );
        assert_eq!(
            paths.category_file(&Category::ToolUseEnvironment).unwrap(),
            PathBuf::from("/skill/references/patterns/tool-use-environment.md")
        );
    }

    #[test]
    fn test_category_file_rejects_path_like_slugs() {
        let paths = SkillPaths::new("/skill");

        for name in ["CI/CD & Deployment", "../../escaped", "..\\up", "/abs"] {
            let result = paths.category_file(&Category::from_name(name));
            assert!(
                matches!(result, Err(ScoutError::Path(_))),
                "expected rejection for {name:?}"
            );
        }

        assert_eq!(
            paths.category_file(&Category::from_name("v2.0 Ideas")).unwrap(),
            PathBuf::from("/skill/references/patterns/v2.0-ideas.md")
        );
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SkillPaths::new(temp_dir.path());

        paths.ensure_directories().unwrap();
        paths.ensure_directories().unwrap();

        assert!(paths.references_dir.is_dir());
        assert!(paths.patterns_dir.is_dir());
    }

    #[test]
    fn test_write_atomic_creates_and_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scripts").join("sync.py");

        write_atomic(&path, "v1").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "v1");

        write_atomic(&path, "v2").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "v2");

        // No temporary files left behind
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
