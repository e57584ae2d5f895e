//! Edit-annotated reconstructions of edit graph paths
//!
//! Every path explored by a search is rendered as a `TaggedString`: the characters
//! of both sequences the path has consumed, each tagged with the side(s) it came
//! from. Kept characters carry both `FROM_NEW` and `FROM_OLD`, insertions carry
//! `FROM_NEW` only and deletions carry `FROM_OLD | DELETED`.

use crate::artifacts::diff::edit::Edit;
use crate::artifacts::geometry::path::Path;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Tag: u8 {
        const FROM_OLD = 0b0001;
        const FROM_NEW = 0b0010;
        const DELETED = 0b0100;
        const RECENT = 0b1000; // Set on the character produced by the latest move only
        const KEPT = Self::FROM_OLD.bits() | Self::FROM_NEW.bits();
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(Tag::FROM_OLD) {
            flags.push("OLD");
        }
        if self.contains(Tag::FROM_NEW) {
            flags.push("NEW");
        }
        if self.contains(Tag::DELETED) {
            flags.push("DELETED");
        }
        if self.contains(Tag::RECENT) {
            flags.push("RECENT");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaggedChar {
    pub char: char,
    pub tag: Tag,
}

impl TaggedChar {
    pub fn new(char: char, tag: Tag) -> Self {
        Self { char, tag }
    }

    pub fn is_kept(&self) -> bool {
        self.tag.contains(Tag::KEPT)
    }

    pub fn is_inserted(&self) -> bool {
        self.tag.contains(Tag::FROM_NEW) && !self.tag.contains(Tag::FROM_OLD)
    }

    pub fn is_deleted(&self) -> bool {
        self.tag.contains(Tag::FROM_OLD) && !self.tag.contains(Tag::FROM_NEW)
    }

    pub fn as_edit(&self) -> Edit<char> {
        let value = self.char;
        if self.is_kept() {
            Edit::Equal { value }
        } else if self.is_inserted() {
            Edit::Insert { value }
        } else {
            Edit::Delete { value }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TaggedString {
    text: Vec<TaggedChar>,
}

impl TaggedString {
    /// Reconstructs the annotated output of `path` over the `old` (rows) and `new`
    /// (columns) sequences
    ///
    /// Points outside the grid, such as the `{0, -1}` sentinel, are skipped. Old
    /// characters past the path's last row are appended as trailing deletions.
    pub fn reconstruct(path: &Path, old: &[char], new: &[char]) -> Self {
        let path = path.trimmed(new.len() as isize, old.len() as isize);
        let mut text = Vec::with_capacity(path.len() + old.len());

        for pair in path.points().windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let goes_right = to.x > from.x;
            let goes_down = to.y > from.y;

            let tagged = match (goes_right, goes_down) {
                (true, true) => TaggedChar::new(new[from.x as usize], Tag::KEPT),
                (true, false) => TaggedChar::new(new[from.x as usize], Tag::FROM_NEW),
                (false, true) => {
                    TaggedChar::new(old[from.y as usize], Tag::FROM_OLD | Tag::DELETED)
                }
                (false, false) => unreachable!("paths never repeat a point"),
            };
            text.push(tagged);
        }

        if let Some(last) = text.last_mut() {
            last.tag |= Tag::RECENT;
        }

        let consumed = if path.is_empty() {
            0
        } else {
            path.end().y as usize
        };
        text.extend(
            old[consumed..]
                .iter()
                .map(|char| TaggedChar::new(*char, Tag::FROM_OLD | Tag::DELETED)),
        );

        Self { text }
    }

    pub fn chars(&self) -> &[TaggedChar] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn reversed(&self) -> Self {
        Self {
            text: self.text.iter().rev().copied().collect(),
        }
    }

    pub fn edit_script(&self) -> Vec<Edit<char>> {
        self.text.iter().map(TaggedChar::as_edit).collect()
    }

    pub fn old_text(&self) -> String {
        self.text
            .iter()
            .filter(|tagged| tagged.tag.contains(Tag::FROM_OLD))
            .map(|tagged| tagged.char)
            .collect()
    }

    pub fn new_text(&self) -> String {
        self.text
            .iter()
            .filter(|tagged| tagged.tag.contains(Tag::FROM_NEW))
            .map(|tagged| tagged.char)
            .collect()
    }
}

impl fmt::Display for TaggedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tagged in &self.text {
            if tagged.is_kept() {
                write!(f, "[{}]", tagged.char)?;
            } else if tagged.is_inserted() {
                write!(f, "+{}", tagged.char)?;
            } else {
                write!(f, "-{}", tagged.char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TaggedString};
    use crate::artifacts::diff::edit::Edit;
    use crate::artifacts::geometry::path::Path;
    use crate::artifacts::geometry::point::Point;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[fixture]
    fn insert_then_delete() -> Path {
        Path::from_points(vec![
            Point::new(0, -1),
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
        ])
    }

    #[rstest]
    fn reconstruction_follows_the_moves(insert_then_delete: Path) {
        let tagged = TaggedString::reconstruct(&insert_then_delete, &chars("a"), &chars("b"));

        assert_eq!(
            tagged.edit_script(),
            vec![Edit::Insert { value: 'b' }, Edit::Delete { value: 'a' }]
        );
        assert_eq!(tagged.old_text(), "a");
        assert_eq!(tagged.new_text(), "b");
    }

    #[rstest]
    fn only_the_latest_move_is_recent(insert_then_delete: Path) {
        let tagged = TaggedString::reconstruct(&insert_then_delete, &chars("a"), &chars("b"));

        assert!(!tagged.chars()[0].tag.contains(Tag::RECENT));
        assert!(tagged.chars()[1].tag.contains(Tag::RECENT));
    }

    #[test]
    fn partial_paths_complete_with_trailing_deletions() {
        let path = Path::from_points(vec![Point::new(0, -1), Point::new(0, 0), Point::new(1, 1)]);
        let tagged = TaggedString::reconstruct(&path, &chars("xyz"), &chars("x"));

        assert_eq!(tagged.to_string(), "[x]-y-z");
    }

    #[test]
    fn sentinel_only_path_deletes_everything() {
        let path = Path::start(Point::SENTINEL);
        let tagged = TaggedString::reconstruct(&path, &chars("ab"), &chars(""));

        assert_eq!(tagged.to_string(), "-a-b");
    }
}
