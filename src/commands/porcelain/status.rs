use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusReport};
use crate::errors::RepositoryResult;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> RepositoryResult<StatusReport> {
        self.ensure_initialized()?;

        Status::new(self).initialize()
    }

    pub fn show_status(&self) -> RepositoryResult<()> {
        let report = self.status()?;
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for branch in &report.branches {
            if *branch == report.current_branch {
                writeln!(writer, "*{branch}")?;
            } else {
                writeln!(writer, "{branch}")?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for name in &report.staged {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for name in &report.removed {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (name, change) in &report.modified {
            writeln!(writer, "{name} ({change})")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for name in &report.untracked {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
