//! Append-only fragment storage.
//!
//! Each `persist` writes one new, immutable Turtle file. Files are never
//! rewritten, appended to or removed, so the directory listing is the full
//! write history of the catalog.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
    time::{SystemTime, UNIX_EPOCH},
};

use tracing::{debug, info, warn};

use crate::{
    core::Graph,
    error::{CatalogError, Result},
    parsing::turtle_codec::serialize_fragment,
    storage::{
        filter::FragmentFilter,
        loader::{CatalogSource, DirectoryLoader},
        util::{FragmentId, FragmentNaming, StoreConfig},
    },
};

/// Upper bound on name collisions tolerated by a single persist.
const MAX_NAME_ATTEMPTS: usize = 64;

#[derive(Debug, Default)]
struct WriterState {
    /// Highest stamp issued or seen on disk; `None` until the first persist
    last_stamp: Option<u64>,
}

pub struct FragmentStore {
    config: StoreConfig,
    naming: FragmentNaming,
    writer: Mutex<WriterState>,
}

impl FragmentStore {
    /// Creates a store over `config.directory`. No I/O happens until the
    /// first persist; the directory is created then.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let naming = FragmentNaming::new(&config.prefix, &config.extension)?;
        Ok(Self { config, naming, writer: Mutex::new(WriterState::default()) })
    }

    /// Store with default naming over `directory`.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self> {
        Self::new(StoreConfig::with_directory(directory))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Writes `facts` as a new fragment and returns its id.
    ///
    /// The whole create-directory/write/publish sequence runs under this
    /// store's writer lock. The fragment is written to a hidden temporary
    /// file first and only published under its final name once complete, so
    /// a concurrent load sees either the whole fragment or nothing.
    ///
    /// Names sort in creation order for fragments written through one
    /// store. Two stores open on the same directory never overwrite each
    /// other's files, but their fragments may interleave out of creation
    /// order. Fails with [`CatalogError::IoFailure`] when no free name is
    /// found; nothing is left on disk in that case.
    pub fn persist(&self, facts: &Graph) -> Result<FragmentId> {
        let payload = serialize_fragment(facts)?;

        let mut state = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let dir = self.directory();

        fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".bagcat-")
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(|e| CatalogError::io(dir, e))?;
        tmp.write_all(&payload).map_err(|e| CatalogError::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| CatalogError::io(tmp.path(), e))?;

        let mut last = match state.last_stamp {
            Some(stamp) => stamp,
            None => self.highest_stamp_on_disk()?,
        };

        for _ in 0..MAX_NAME_ATTEMPTS {
            let stamp = next_stamp(last);
            let name = self.naming.file_name(stamp);
            let path = dir.join(&name);

            match tmp.persist_noclobber(&path) {
                Ok(_) => {
                    state.last_stamp = Some(stamp);
                    info!(fragment = %name, facts = facts.len(), "persisted fragment");
                    return Ok(FragmentId { stamp, name, path });
                }
                Err(err) if err.error.kind() == ErrorKind::AlreadyExists => {
                    warn!(fragment = %name, "fragment name taken, retrying with a later stamp");
                    last = stamp;
                    tmp = err.file;
                }
                // Dropping `err.file` removes the temporary file.
                Err(err) => return Err(CatalogError::io(&path, err.error)),
            }
        }

        Err(CatalogError::io(
            dir,
            std::io::Error::new(ErrorKind::AlreadyExists, "could not find a free fragment name"),
        ))
    }

    /// Fragments written under this store's naming convention, oldest first.
    pub fn fragments(&self) -> Result<Vec<FragmentId>> {
        let dir = self.directory();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CatalogError::io(dir, e)),
        };

        let mut fragments = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::io(dir, e))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if let Some(stamp) = self.naming.parse(&name) {
                fragments.push(FragmentId { stamp, path: entry.path(), name });
            }
        }
        fragments.sort();
        Ok(fragments)
    }

    fn highest_stamp_on_disk(&self) -> Result<u64> {
        let highest = self.fragments()?.last().map_or(0, |f| f.stamp);
        debug!(directory = %self.directory().display(), highest, "seeded fragment stamp");
        Ok(highest)
    }

    fn loader(&self) -> DirectoryLoader {
        DirectoryLoader::new(self.directory())
            .with_filter(FragmentFilter::new([self.naming.extension()]))
    }
}

impl CatalogSource for FragmentStore {
    fn load(&self) -> Result<Graph> {
        self.loader().load()
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Wall-clock nanoseconds, bumped past `last` when the clock has not moved
/// (or moved backwards) since the previous fragment.
fn next_stamp(last: u64) -> u64 {
    current_timestamp().max(last.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fact, Literal, Node};
    use crate::vocabulary::BagCat;

    fn one_fact(name: &str) -> Graph {
        std::iter::once(Fact::new(
            Node::iri(format!("http://ex.org/{}", name)),
            BagCat::TopicName,
            Literal::string(name),
        ))
        .collect()
    }

    #[test]
    fn test_next_stamp_is_strictly_increasing() {
        let far_future = u64::MAX - 10;
        assert_eq!(next_stamp(far_future), far_future + 1);
        assert!(next_stamp(0) > 0);
    }

    #[test]
    fn test_persist_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FragmentStore::open(dir.path().join("a/b/meta")).unwrap();
        let id = store.persist(&one_fact("x")).unwrap();
        assert!(id.path.is_file());
        assert!(id.name.starts_with("BagCAT_"));
    }

    #[test]
    fn test_rapid_persists_get_distinct_increasing_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FragmentStore::open(dir.path()).unwrap();

        let ids: Vec<_> = (0..20).map(|i| store.persist(&one_fact(&i.to_string())).unwrap()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0].stamp < pair[1].stamp);
            assert!(pair[0].name < pair[1].name);
        }
        assert_eq!(store.fragments().unwrap(), ids);
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FragmentStore::open(dir.path()).unwrap();
        store.persist(&one_fact("x")).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with(".ttl"));
    }

    #[test]
    fn test_new_store_continues_after_existing_fragments() {
        let dir = tempfile::tempdir().unwrap();
        let naming = FragmentNaming::new("BagCAT", "ttl").unwrap();
        let future = current_timestamp() + 3_600_000_000_000;
        fs::write(dir.path().join(naming.file_name(future)), "").unwrap();

        let store = FragmentStore::open(dir.path()).unwrap();
        let id = store.persist(&one_fact("x")).unwrap();
        assert!(id.stamp > future);
    }

    #[test]
    fn test_persist_into_file_path_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = FragmentStore::open(blocker.join("meta")).unwrap();
        assert!(matches!(store.persist(&one_fact("x")), Err(CatalogError::IoFailure { .. })));
    }

    #[test]
    fn test_exhausted_names_fail_without_leaving_files() {
        let dir = tempfile::tempdir().unwrap();
        let naming = FragmentNaming::new("BagCAT", "ttl").unwrap();
        let future = current_timestamp() + 3_600_000_000_000;
        fs::write(dir.path().join(naming.file_name(future)), "").unwrap();

        let store = FragmentStore::open(dir.path()).unwrap();
        let first = store.persist(&one_fact("x")).unwrap();
        assert_eq!(first.stamp, future + 1);
        for offset in 1..=MAX_NAME_ATTEMPTS as u64 {
            fs::write(dir.path().join(naming.file_name(first.stamp + offset)), "").unwrap();
        }

        let err = store.persist(&one_fact("y")).unwrap_err();
        assert!(matches!(err, CatalogError::IoFailure { .. }), "{:?}", err);

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".part")), "{:?}", names);
        assert_eq!(names.len(), 2 + MAX_NAME_ATTEMPTS);
        assert_eq!(fs::read(&first.path).unwrap(), serialize_fragment(&one_fact("x")).unwrap());
    }
}
