//! Tree Builder - main application orchestrator.
//!
//! Owns the template's record set and a name-indexed registry of
//! materialized [`FolderNode`]s. Records may reference parents in any order
//! (children before parents is fine), so each candidate's ancestor chain is
//! resolved recursively and created on demand before the candidate itself.

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{CreateOutcome, Filesystem, TemplateSource},
    domain::{FolderNode, FolderRecord, ROOT_KEY},
    error::{TreeError, TreeResult},
};

/// Materializes a folder hierarchy from a flat record table.
///
/// The registry grows monotonically: entries are only added, never removed
/// or replaced, and it always contains the root under [`ROOT_KEY`]. A
/// builder is single-use state for one logical project; construct a fresh
/// one per build invocation.
pub struct TreeBuilder {
    records: Vec<FolderRecord>,
    registry: HashMap<String, Rc<FolderNode>>,
    filesystem: Box<dyn Filesystem>,
}

impl TreeBuilder {
    /// Create a builder over an already-loaded record sequence.
    pub fn new(records: Vec<FolderRecord>, filesystem: Box<dyn Filesystem>) -> Self {
        let mut registry = HashMap::new();
        registry.insert(ROOT_KEY.to_string(), Rc::new(FolderNode::root()));
        Self {
            records,
            registry,
            filesystem,
        }
    }

    /// Create a builder by loading records through a [`TemplateSource`].
    ///
    /// # Errors
    ///
    /// Propagates the source's failure (missing backing file, parse error).
    /// No builder exists on the error path, so a missing template can never
    /// masquerade as a successfully built root-only tree.
    pub fn from_source(
        source: &dyn TemplateSource,
        filesystem: Box<dyn Filesystem>,
    ) -> TreeResult<Self> {
        let records = source.load()?;
        Ok(Self::new(records, filesystem))
    }

    /// Materialize the tree the template describes.
    ///
    /// When `minimal` is true only records flagged `minimal` are candidates;
    /// their ancestors must be part of the minimal set too. Processing stops
    /// at the first fatal error — later records are not attempted, and
    /// folders created by earlier successful branches are not rolled back.
    #[instrument(skip(self), fields(records = self.records.len()))]
    pub fn build_tree(&mut self, minimal: bool) -> TreeResult<()> {
        for index in 0..self.records.len() {
            let record = self.records[index].clone();
            if minimal && !record.minimal {
                continue;
            }

            // Seeding the explored set with the candidate itself is what
            // catches a direct two-node cycle (A -> B -> A).
            let mut explored = vec![record.folder_name.clone()];
            self.resolve_parent_chain(minimal, &record.parent, &mut explored)?;

            // An earlier candidate's resolution may already have created
            // this folder as someone's ancestor.
            if !self.registry.contains_key(&record.folder_name) {
                self.materialize(&record)?;
            }
        }

        info!(folders = self.count(), "tree build completed");
        Ok(())
    }

    /// Ensure `parent_name`'s whole ancestor chain is materialized.
    ///
    /// Recursive with the root as guaranteed base case: the registry always
    /// holds [`ROOT_KEY`]. `explored` is threaded by `&mut` through one
    /// top-level resolution so cycles spanning several levels are detected,
    /// and it is reset per candidate — a folder visited while resolving one
    /// branch must not poison resolution of an unrelated branch later.
    fn resolve_parent_chain(
        &mut self,
        minimal: bool,
        parent_name: &str,
        explored: &mut Vec<String>,
    ) -> TreeResult<()> {
        if self.registry.contains_key(parent_name) {
            return Ok(());
        }

        let Some(record) = self
            .records
            .iter()
            .find(|r| r.folder_name == parent_name)
            .cloned()
        else {
            return Err(crate::domain::DomainError::MissingParent {
                parent: parent_name.to_string(),
            }
            .into());
        };

        if explored.iter().any(|name| name == parent_name) {
            return Err(crate::domain::DomainError::CircularReference {
                folder: parent_name.to_string(),
            }
            .into());
        }
        explored.push(parent_name.to_string());

        if minimal && !record.minimal {
            return Err(crate::domain::DomainError::MinimalExclusion {
                parent: parent_name.to_string(),
            }
            .into());
        }

        self.resolve_parent_chain(minimal, &record.parent, explored)?;
        self.materialize(&record)
    }

    /// Construct the record's [`FolderNode`], create it on disk, and register
    /// it. Creation happens exactly once per folder name.
    fn materialize(&mut self, record: &FolderRecord) -> TreeResult<()> {
        let parent = self
            .registry
            .get(&record.parent)
            .cloned()
            .ok_or_else(|| TreeError::Internal {
                message: format!(
                    "parent '{}' vanished from the registry during materialization",
                    record.parent
                ),
            })?;

        let node = Rc::new(FolderNode::new(
            &record.folder_name,
            Some(parent),
            record.readme_text.clone(),
        )?);

        self.create_on_disk(&node)?;
        self.registry
            .insert(record.folder_name.clone(), Rc::clone(&node));
        debug!(folder = %record.folder_name, path = %node.folder_path(), "folder registered");
        Ok(())
    }

    /// Physical side effects for one node: the directory itself, plus its
    /// README when readme text is present. README content is always
    /// (re)written, matching re-run behavior of the directory creation.
    fn create_on_disk(&self, node: &FolderNode) -> TreeResult<()> {
        let dir = PathBuf::from(node.folder_path());
        match self.filesystem.create_dir(&dir)? {
            CreateOutcome::Created => debug!(path = %dir.display(), "directory created"),
            CreateOutcome::AlreadyExists => {
                warn!(path = %dir.display(), "directory already exists, continuing")
            }
        }

        if let (Some(file_name), Some(contents)) =
            (node.readme_file_name(), node.readme_contents())
        {
            self.filesystem.write_file(&dir.join(file_name), &contents)?;
        }

        Ok(())
    }

    /// Number of registry entries, root included.
    pub fn count(&self) -> usize {
        self.registry.len()
    }

    /// Look up a materialized node by folder name.
    pub fn node(&self, folder_name: &str) -> Option<&Rc<FolderNode>> {
        self.registry.get(folder_name)
    }

    /// Paths of every materialized folder, root included, sorted.
    pub fn folder_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .registry
            .values()
            .map(|node| node.folder_path())
            .collect();
        paths.sort();
        paths
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// Minimal in-crate filesystem double; the full-featured in-memory
    /// adapter lives in `treeform-adapters`. Clones share storage so a test
    /// can keep a handle after handing one to the builder.
    #[derive(Default, Clone)]
    struct StubFilesystem {
        inner: Arc<Mutex<StubInner>>,
    }

    #[derive(Default)]
    struct StubInner {
        dirs: HashSet<PathBuf>,
        files: HashMap<PathBuf, String>,
    }

    impl StubFilesystem {
        fn dirs(&self) -> Vec<PathBuf> {
            let mut dirs: Vec<_> = self.inner.lock().unwrap().dirs.iter().cloned().collect();
            dirs.sort();
            dirs
        }

        fn file(&self, path: &str) -> Option<String> {
            self.inner
                .lock()
                .unwrap()
                .files
                .get(Path::new(path))
                .cloned()
        }
    }

    impl Filesystem for StubFilesystem {
        fn create_dir(&self, path: &Path) -> TreeResult<CreateOutcome> {
            let mut inner = self.inner.lock().unwrap();
            if inner.dirs.insert(path.to_path_buf()) {
                Ok(CreateOutcome::Created)
            } else {
                Ok(CreateOutcome::AlreadyExists)
            }
        }

        fn write_file(&self, path: &Path, contents: &str) -> TreeResult<()> {
            self.inner
                .lock()
                .unwrap()
                .files
                .insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let inner = self.inner.lock().unwrap();
            inner.dirs.contains(path) || inner.files.contains_key(path)
        }
    }

    fn builder(records: Vec<FolderRecord>) -> TreeBuilder {
        TreeBuilder::new(records, Box::new(StubFilesystem::default()))
    }

    fn rec(name: &str, parent: &str) -> FolderRecord {
        FolderRecord::new(name, parent)
    }

    // ── happy path ────────────────────────────────────────────────────────

    #[test]
    fn empty_template_yields_root_only() {
        let mut b = builder(vec![]);
        b.build_tree(false).unwrap();
        assert_eq!(b.count(), 1);
        assert!(b.node(ROOT_KEY).is_some());
    }

    #[test]
    fn acyclic_template_registers_all_records_plus_root() {
        let mut b = builder(vec![
            rec("data", "root"),
            rec("raw", "data"),
            rec("processed", "data"),
            rec("src", "root"),
        ]);
        b.build_tree(false).unwrap();
        assert_eq!(b.count(), 5);
        assert_eq!(b.node("raw").unwrap().folder_path(), "./data/raw");
        assert_eq!(b.node("processed").unwrap().folder_path(), "./data/processed");
    }

    #[test]
    fn children_before_parents_resolve_identically() {
        let parents_first = vec![rec("data", "root"), rec("raw", "data")];
        let children_first = vec![rec("raw", "data"), rec("data", "root")];

        let mut a = builder(parents_first);
        a.build_tree(false).unwrap();
        let mut b = builder(children_first);
        b.build_tree(false).unwrap();

        assert_eq!(a.folder_paths(), b.folder_paths());
    }

    #[test]
    fn deep_chain_listed_leaf_first() {
        let mut b = builder(vec![
            rec("d", "c"),
            rec("c", "b"),
            rec("b", "a"),
            rec("a", "root"),
        ]);
        b.build_tree(false).unwrap();
        assert_eq!(b.node("d").unwrap().folder_path(), "./a/b/c/d");
    }

    #[test]
    fn directories_created_on_filesystem() {
        let fs = StubFilesystem::default();
        let records = vec![rec("data", "root"), rec("raw", "data")];
        let mut b = TreeBuilder::new(records, Box::new(fs.clone()));
        b.build_tree(false).unwrap();

        assert_eq!(
            fs.dirs(),
            vec![PathBuf::from("./data"), PathBuf::from("./data/raw")]
        );
        assert_eq!(
            b.folder_paths(),
            vec![".".to_string(), "./data".to_string(), "./data/raw".to_string()]
        );
    }

    #[test]
    fn readme_written_next_to_its_folder() {
        let fs = StubFilesystem::default();
        let records = vec![rec("data", "root").with_readme("Raw inputs")];

        let mut b = TreeBuilder::new(records, Box::new(fs.clone()));
        b.build_tree(false).unwrap();

        assert_eq!(
            fs.file("./data/README_Data.md").as_deref(),
            Some("##**Data**\n\nFolder path: `./data`\n\nRaw inputs")
        );
        assert_eq!(fs.dirs(), vec![PathBuf::from("./data")]);
    }

    // ── minimal mode ──────────────────────────────────────────────────────

    #[test]
    fn minimal_build_skips_non_minimal_records() {
        let mut b = builder(vec![
            rec("data", "root").minimal(true),
            rec("scratch", "root").minimal(false),
        ]);
        b.build_tree(true).unwrap();
        assert_eq!(b.count(), 2); // root + data
        assert!(b.node("scratch").is_none());
    }

    #[test]
    fn minimal_candidate_with_excluded_parent_fails() {
        let mut b = builder(vec![
            rec("data", "root").minimal(false),
            rec("raw", "data").minimal(true),
        ]);
        let err = b.build_tree(true).unwrap_err();
        assert_eq!(
            err,
            TreeError::Domain(DomainError::MinimalExclusion {
                parent: "data".into()
            })
        );
    }

    #[test]
    fn minimal_chain_builds_all_ancestors() {
        let mut b = builder(vec![
            rec("data", "root").minimal(true),
            rec("raw", "data").minimal(true),
        ]);
        b.build_tree(true).unwrap();
        assert_eq!(b.count(), 3);
        assert_eq!(b.node("raw").unwrap().folder_path(), "./data/raw");
    }

    // ── failure modes ─────────────────────────────────────────────────────

    #[test]
    fn missing_parent_aborts_build() {
        let mut b = builder(vec![rec("raw", "data")]);
        let err = b.build_tree(false).unwrap_err();
        assert_eq!(
            err,
            TreeError::Domain(DomainError::MissingParent {
                parent: "data".into()
            })
        );
    }

    #[test]
    fn direct_cycle_detected() {
        let mut b = builder(vec![rec("a", "b"), rec("b", "a")]);
        let err = b.build_tree(false).unwrap_err();
        assert!(matches!(
            err,
            TreeError::Domain(DomainError::CircularReference { .. })
        ));
    }

    #[test]
    fn multi_level_cycle_detected() {
        let mut b = builder(vec![rec("a", "c"), rec("b", "a"), rec("c", "b")]);
        let err = b.build_tree(false).unwrap_err();
        assert!(matches!(
            err,
            TreeError::Domain(DomainError::CircularReference { .. })
        ));
    }

    #[test]
    fn failure_stops_processing_later_records() {
        // "orphan" fails first; "data" appears later and must not be built.
        let mut b = builder(vec![rec("orphan", "nowhere"), rec("data", "root")]);
        assert!(b.build_tree(false).is_err());
        assert!(b.node("data").is_none());
        assert_eq!(b.count(), 1);
    }

    #[test]
    fn reserved_name_in_record_aborts_build() {
        let mut b = builder(vec![rec("bad|name", "root")]);
        let err = b.build_tree(false).unwrap_err();
        assert!(matches!(
            err,
            TreeError::Domain(DomainError::ReservedCharacter { .. })
        ));
        assert_eq!(b.count(), 1);
    }

    // ── explored-set isolation ────────────────────────────────────────────

    #[test]
    fn shared_ancestor_does_not_trip_cycle_detection() {
        // Two siblings under the same deep chain: resolving the first
        // candidate explores the chain; the second candidate must not see a
        // stale explored set.
        let mut b = builder(vec![
            rec("left", "shared"),
            rec("right", "shared"),
            rec("shared", "root"),
        ]);
        b.build_tree(false).unwrap();
        assert_eq!(b.count(), 4);
    }

    #[test]
    fn rerun_with_existing_directories_succeeds() {
        let mut b = builder(vec![rec("data", "root")]);
        b.build_tree(false).unwrap();
        // Same registry, same stub: directories now exist, second run must
        // treat AlreadyExists as non-fatal.
        b.build_tree(false).unwrap();
        assert_eq!(b.count(), 2);
    }
}
