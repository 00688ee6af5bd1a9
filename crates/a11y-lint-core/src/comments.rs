//! Per-file comment-proximity cache.
//!
//! The first query against a file merges its script and template comments,
//! sorts them by position and stores the result. Entries are keyed by the
//! address of the file's `Arc` and hold only a `Weak` back-reference, so the
//! cache never keeps a file alive; dead entries are dropped whenever a new
//! file is inserted.
//!
//! The cache uses interior mutability without locking and is `!Sync`. Hosts
//! that lint files in parallel give each worker its own cache.

use crate::node::{CommentKind, SourceFile, Span};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::{Deref, Range};
use std::rc::Rc;
use std::sync::{Arc, Weak};
use tracing::debug;

/// A comment as stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    /// Comment syntax.
    pub kind: CommentKind,
    /// Comment body without delimiters.
    pub text: String,
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

#[derive(Debug)]
struct CachedFile {
    file: Weak<SourceFile>,
    comments: Rc<[CommentEntry]>,
}

/// Comments of one file that lie near a span.
#[derive(Debug, Clone)]
pub struct NearbyComments {
    comments: Rc<[CommentEntry]>,
    range: Range<usize>,
}

impl Deref for NearbyComments {
    type Target = [CommentEntry];

    fn deref(&self) -> &Self::Target {
        &self.comments[self.range.clone()]
    }
}

/// Cache of sorted comments, one entry per live file.
#[derive(Debug, Default)]
pub struct CommentCache {
    files: RefCell<HashMap<usize, CachedFile>>,
}

impl CommentCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All comments of `file`, sorted by start offset.
    #[must_use]
    pub fn comments(&self, file: &Arc<SourceFile>) -> Rc<[CommentEntry]> {
        let key = Arc::as_ptr(file) as usize;

        if let Some(cached) = self.files.borrow().get(&key) {
            // The address may have been reused by a new file after the old one died.
            if cached.file.strong_count() > 0 && std::ptr::eq(cached.file.as_ptr(), Arc::as_ptr(file)) {
                return Rc::clone(&cached.comments);
            }
        }

        let comments = extract_comments(file);
        debug!(
            "Cached {} comments for {}",
            comments.len(),
            file.path.display()
        );

        let mut files = self.files.borrow_mut();
        files.retain(|_, cached| cached.file.strong_count() > 0);
        files.insert(
            key,
            CachedFile {
                file: Arc::downgrade(file),
                comments: Rc::clone(&comments),
            },
        );
        comments
    }

    /// Comments within `window` bytes of `span`, in source order.
    ///
    /// A comment is near when it ends no earlier than `span.start - window`
    /// and starts no later than `span.end + window`.
    #[must_use]
    pub fn comments_near(&self, file: &Arc<SourceFile>, span: Span, window: usize) -> NearbyComments {
        let comments = self.comments(file);
        let lower = span.start.saturating_sub(window);
        let upper = span.end.saturating_add(window);

        // Comments never overlap, so end offsets are sorted too.
        let first = comments.partition_point(|c| c.end < lower);
        let mut last = first;
        while last < comments.len() && comments[last].start <= upper {
            last += 1;
        }

        NearbyComments {
            comments,
            range: first..last,
        }
    }

    /// Number of files with live cache entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files
            .borrow()
            .values()
            .filter(|cached| cached.file.strong_count() > 0)
            .count()
    }

    /// Returns true if no live file is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn extract_comments(file: &SourceFile) -> Rc<[CommentEntry]> {
    let mut comments: Vec<CommentEntry> = file
        .comments
        .iter()
        .chain(&file.template_comments)
        .map(|c| CommentEntry {
            kind: c.kind,
            text: c.text.clone(),
            start: c.span.start,
            end: c.span.end,
        })
        .collect();
    comments.sort_by_key(|c| (c.start, c.end));
    comments.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Comment;

    fn file() -> Arc<SourceFile> {
        Arc::new(
            SourceFile::new("App.vue", " ".repeat(200))
                .with_comment(Comment::new(CommentKind::Block, "c", Span::new(100, 110)))
                .with_comment(Comment::new(CommentKind::Line, "a", Span::new(0, 10)))
                .with_comment(Comment::new(CommentKind::Html, "b", Span::new(40, 50)))
                .with_comment(Comment::new(CommentKind::Line, "d", Span::new(150, 160))),
        )
    }

    fn texts(comments: &[CommentEntry]) -> Vec<&str> {
        comments.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn merges_and_sorts_both_comment_lists() {
        let cache = CommentCache::new();
        let comments = cache.comments(&file());
        assert_eq!(texts(&comments), ["a", "b", "c", "d"]);
    }

    #[test]
    fn window_bounds_both_sides() {
        let cache = CommentCache::new();
        let file = file();

        let near = cache.comments_near(&file, Span::new(60, 90), 10);
        assert_eq!(texts(&near), ["b", "c"]);

        let near = cache.comments_near(&file, Span::new(60, 90), 0);
        assert!(near.is_empty());

        let near = cache.comments_near(&file, Span::new(0, 200), 0);
        assert_eq!(near.len(), 4);
    }

    #[test]
    fn warm_and_cold_queries_agree() {
        let file = file();
        let spans = [Span::new(60, 90), Span::new(0, 5), Span::new(155, 158)];

        let cold: Vec<Vec<CommentEntry>> = spans
            .iter()
            .map(|span| CommentCache::new().comments_near(&file, *span, 20).to_vec())
            .collect();

        let warm_cache = CommentCache::new();
        for span in spans.iter().rev() {
            let _ = warm_cache.comments_near(&file, *span, 20);
        }
        for (span, expected) in spans.iter().zip(&cold) {
            assert_eq!(&warm_cache.comments_near(&file, *span, 20).to_vec(), expected);
        }
    }

    #[test]
    fn second_query_reuses_sorted_comments() {
        let cache = CommentCache::new();
        let file = file();
        let first = cache.comments(&file);
        let second = cache.comments(&file);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn does_not_keep_files_alive() {
        let cache = CommentCache::new();
        let file = file();
        let weak = Arc::downgrade(&file);
        let _ = cache.comments(&file);
        assert_eq!(cache.len(), 1);

        drop(file);
        assert!(weak.upgrade().is_none());
        assert!(cache.is_empty());

        let other = Arc::new(SourceFile::new("Other.tsx", ""));
        let _ = cache.comments(&other);
        assert_eq!(cache.files.borrow().len(), 1);
    }
}
