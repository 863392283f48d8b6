//! Editor hooks for cleaning up interactive rebase workflows.
//!
//! Two independent utilities, each a file-in/file-out filter over the path
//! git hands to its editor hooks:
//!
//! - `downcase-subject` (`GIT_EDITOR` while rewording): lowercases the first
//!   word after the `<prefix>: ` separator in a commit message's summary
//!   line.
//! - `reword-marked` (`GIT_SEQUENCE_EDITOR`): flips marked `pick` lines in a
//!   rebase instruction list to `reword`.
//!
//! The binaries are thin clap wrappers; the transforms live here so they can
//! be unit tested without touching the filesystem.

pub mod error;
pub mod file;
pub mod subject;
pub mod todo;
