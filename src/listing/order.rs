//! Ordering of collected entries

use std::cmp::Ordering;

use crate::error::Result;

use super::entry::Entry;

/// Sort entries by name (byte-wise ascending) or, with `by_time`, by
/// modification time with the newest first.
///
/// In time mode every entry's metadata is fetched before any comparison, so a
/// failing `lstat` aborts the sort instead of leaving it half done. Equal
/// timestamps fall back to name order.
pub fn sort(mut entries: Vec<Entry>, by_time: bool) -> Result<Vec<Entry>> {
    if !by_time {
        entries.sort_by(by_name);
        return Ok(entries);
    }

    let mut keyed = entries
        .into_iter()
        .map(|entry| -> Result<_> { Ok((entry.modified()?, entry)) })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(time_a, a), (time_b, b)| time_b.cmp(time_a).then_with(|| by_name(a, b)));

    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

/// Invert the order of a sorted sequence.
pub fn reverse(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.reverse();
    entries
}

fn by_name(a: &Entry, b: &Entry) -> Ordering {
    a.name_bytes().cmp(b.name_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListError;
    use filetime::{FileTime, set_symlink_file_times};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<String> {
        entries.iter().map(Entry::display_name).collect()
    }

    fn unsorted(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .map(|n| Entry::new(*n, Path::new("/nonexistent").join(n)))
            .collect()
    }

    /// Create files whose mtimes are `base + offset` seconds.
    fn timed_files(dir: &Path, files: &[(&str, i64)]) -> Vec<Entry> {
        files
            .iter()
            .map(|(name, offset)| {
                let path = dir.join(name);
                fs::write(&path, name).unwrap();
                let time = FileTime::from_unix_time(1_700_000_000 + offset, 0);
                set_symlink_file_times(&path, time, time).unwrap();
                Entry::new(*name, path)
            })
            .collect()
    }

    #[test]
    fn test_sort_by_name_bytewise() {
        let entries = unsorted(&["b.txt", "B.txt", "a.txt", ".hidden", "..", ".", "_x", "10", "9"]);
        let sorted = sort(entries, false).unwrap();
        assert_eq!(
            names(&sorted),
            vec![".", "..", ".hidden", "10", "9", "B.txt", "_x", "a.txt", "b.txt"]
        );
    }

    #[test]
    fn test_sort_by_name_never_queries_metadata() {
        // Paths don't exist; name mode must not lstat them
        let sorted = sort(unsorted(&["z", "y"]), false).unwrap();
        assert_eq!(names(&sorted), vec!["y", "z"]);
    }

    #[test]
    fn test_sort_by_name_multibyte() {
        let sorted = sort(unsorted(&["é", "e", "z", "日"]), false).unwrap();
        assert_eq!(names(&sorted), vec!["e", "z", "é", "日"]);
    }

    #[test]
    fn test_sort_by_time_newest_first() {
        let dir = TempDir::new().unwrap();
        let entries = timed_files(dir.path(), &[("old", 0), ("newest", 300), ("middle", 100)]);

        let sorted = sort(entries, true).unwrap();
        assert_eq!(names(&sorted), vec!["newest", "middle", "old"]);

        let times: Vec<_> = sorted.iter().map(|e| e.modified().unwrap()).collect();
        assert!(times.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_by_time_ties_use_name() {
        let dir = TempDir::new().unwrap();
        let entries = timed_files(dir.path(), &[("c", 5), ("a", 5), ("b", 5), ("new", 9)]);

        let sorted = sort(entries, true).unwrap();
        assert_eq!(names(&sorted), vec!["new", "a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_time_missing_file_is_fatal() {
        let err = sort(unsorted(&["a", "b"]), true).unwrap_err();
        assert!(matches!(err, ListError::Metadata { op: "lstat", .. }));
    }

    #[test]
    fn test_sort_empty_and_single() {
        assert!(sort(Vec::new(), true).unwrap().is_empty());
        let single = sort(unsorted(&["only"]), false).unwrap();
        assert_eq!(names(&single), vec!["only"]);
    }

    #[test]
    fn test_reverse_after_sort() {
        let sorted = sort(unsorted(&["b", "c", "a"]), false).unwrap();
        let reversed = reverse(sorted);
        assert_eq!(names(&reversed), vec!["c", "b", "a"]);

        let dir = TempDir::new().unwrap();
        let entries = timed_files(dir.path(), &[("old", 0), ("new", 60)]);
        let reversed = reverse(sort(entries, true).unwrap());
        assert_eq!(names(&reversed), vec!["old", "new"]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let original = names(&unsorted(&["q", "a", "m", "b"]));
        let twice = reverse(reverse(unsorted(&["q", "a", "m", "b"])));
        assert_eq!(names(&twice), original);
        assert!(reverse(Vec::new()).is_empty());
    }
}
