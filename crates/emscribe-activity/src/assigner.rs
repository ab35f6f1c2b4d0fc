//! Two-pointer assignment of files to boundary slots

use emscribe_core::{Activity, FileRecord, PipelineError};

/// Accumulates completed activities, only ever appending non-empty ones
#[derive(Debug, Default)]
struct ActivityBuilder {
    current: Option<Activity>,
    completed: Vec<Activity>,
}

impl ActivityBuilder {
    fn add(&mut self, file: FileRecord) {
        match self.current.as_mut() {
            Some(activity) => activity.push(file),
            None => self.current = Some(Activity::starting_with(file)),
        }
    }

    /// Close the in-progress activity; a slot that received no files
    /// produces nothing.
    fn close_slot(&mut self) {
        if let Some(activity) = self.current.take() {
            self.completed.push(activity);
        }
    }

    fn finish(mut self) -> Vec<Activity> {
        self.close_slot();
        self.completed
    }
}

/// Partition `files` (ascending by mtime) into activities at `boundaries`.
///
/// The terminal sentinel boundary (the last file's mtime) is appended
/// here, giving `boundaries.len() + 1` candidate slots. A file belongs to
/// the current slot when its mtime is at or below the slot's boundary;
/// otherwise the slot closes and the same file is retested against the
/// next one. Linear in `files.len() + boundaries.len()`.
pub fn assign(
    files: Vec<FileRecord>,
    boundaries: &[f64],
) -> Result<Vec<Activity>, PipelineError> {
    let last_mtime = match files.last() {
        Some(file) => file.mtime,
        None => return Err(PipelineError::NoFilesInRange),
    };

    let mut bounds = boundaries.to_vec();
    bounds.push(last_mtime);

    let mut builder = ActivityBuilder::default();
    let mut slot = 0;
    for file in files {
        while slot + 1 < bounds.len() && file.mtime > bounds[slot] {
            builder.close_slot();
            slot += 1;
        }
        builder.add(file);
    }
    Ok(builder.finish())
}
