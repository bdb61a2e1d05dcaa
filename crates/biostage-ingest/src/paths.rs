//! Lexical path normalization and relativization.
//!
//! Discovery anchors every emitted path to the invocation's working
//! directory, so these helpers resolve `.`/`..` and diff paths without
//! touching the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` components lexically.
///
/// Leading `..` components of a relative path are preserved; `..` above the
/// root of an absolute path is dropped.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(Component::ParentDir),
            },
            other => parts.push(other),
        }
    }
    let mut normalized = PathBuf::new();
    for part in parts {
        normalized.push(part.as_os_str());
    }
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Express `path` relative to `base`, walking up with `..` where the target
/// lies outside `base`.
///
/// A relative `path` is interpreted as being relative to `base` already and
/// comes back normalized.
#[must_use]
pub fn relative_from(path: &Path, base: &Path) -> PathBuf {
    let target = if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    };
    let base = normalize(base);

    let mut target_parts = target.components().peekable();
    let mut base_parts = base.components().peekable();
    while let (Some(lhs), Some(rhs)) = (target_parts.peek(), base_parts.peek()) {
        if lhs != rhs {
            break;
        }
        target_parts.next();
        base_parts.next();
    }

    let mut relative = PathBuf::new();
    for _ in base_parts {
        relative.push("..");
    }
    for part in target_parts {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resolves_dot_and_dotdot() {
        assert_eq!(normalize(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
        assert_eq!(normalize(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn relative_from_inside_base() {
        let rel = relative_from(Path::new("/work/study/meta_cna.txt"), Path::new("/work"));
        assert_eq!(rel, PathBuf::from("study/meta_cna.txt"));
    }

    #[test]
    fn relative_from_outside_base_walks_up() {
        let rel = relative_from(Path::new("/data/study/file.txt"), Path::new("/work/run"));
        assert_eq!(rel, PathBuf::from("../../data/study/file.txt"));
    }

    #[test]
    fn relative_input_resolves_against_base() {
        let rel = relative_from(Path::new("study/../study/data.txt"), Path::new("/work"));
        assert_eq!(rel, PathBuf::from("study/data.txt"));
    }
}
