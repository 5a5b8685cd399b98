use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::{LogEntry, RevList};
use crate::errors::RepositoryResult;
use std::io::Write;

impl Repository {
    /// First-parent history from HEAD back to the root commit, newest first
    ///
    /// The walk is lazy; clone the iterator to restart it.
    pub fn log(&self) -> RepositoryResult<RevList<'_>> {
        self.ensure_initialized()?;

        Ok(RevList::new(self.database(), self.refs().read_head()?))
    }

    /// Every stored commit, in store order (by id), regardless of reachability
    pub fn global_log(&self) -> RepositoryResult<Vec<LogEntry>> {
        self.ensure_initialized()?;

        self.database()
            .commit_ids()?
            .into_iter()
            .map(|oid| -> RepositoryResult<LogEntry> {
                let commit = self.database().load_commit(&oid)?;
                Ok(LogEntry::new(oid, commit))
            })
            .collect()
    }

    pub fn show_log(&self) -> RepositoryResult<()> {
        for entry in self.log()? {
            self.display_log_entry(&entry?)?;
        }

        Ok(())
    }

    pub fn show_global_log(&self) -> RepositoryResult<()> {
        for entry in self.global_log()? {
            self.display_log_entry(&entry)?;
        }

        Ok(())
    }

    fn display_log_entry(&self, entry: &LogEntry) -> RepositoryResult<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {}", entry.oid)?;
        writeln!(writer, "Date: {}", entry.commit.readable_timestamp())?;
        writeln!(writer, "{}", entry.commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
