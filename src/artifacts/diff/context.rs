use crate::artifacts::diff::endpoints::EndpointStore;
use crate::artifacts::diff::step_record::StepRecord;
use crate::artifacts::geometry::path::Path;
use crate::artifacts::geometry::point::Point;
use crate::artifacts::geometry::segment::Segment;
use crate::artifacts::geometry::transform::Transform;
use crate::artifacts::tagged::TaggedString;

/// State of one greedy search over an edit graph
///
/// A forward context walks `old`/`new` as given. A reverse context walks both
/// sequences back to front and remaps every record it emits into forward
/// coordinates through its `frame` (a flip about `(N, M)`).
#[derive(Debug, Clone)]
pub struct SearchContext {
    old: Vec<char>,
    new: Vec<char>,
    store: EndpointStore,
    frame: Transform,
    reverse: bool,
    trace: Vec<StepRecord>,
}

impl SearchContext {
    pub fn forward(old: &[char], new: &[char]) -> Self {
        Self::with_frame(old.to_vec(), new.to_vec(), Transform::identity(), false)
    }

    pub fn reverse(old: &[char], new: &[char]) -> Self {
        let corner = Point::new(new.len() as isize, old.len() as isize);
        Self::with_frame(
            old.iter().rev().copied().collect(),
            new.iter().rev().copied().collect(),
            Transform::flip(corner),
            true,
        )
    }

    fn with_frame(old: Vec<char>, new: Vec<char>, frame: Transform, reverse: bool) -> Self {
        // diagonal 1 holds the sentinel, so the store spans at least ±1
        let mut store = EndpointStore::new(old.len() + new.len() + 1);
        store.set(1, Path::start(Point::SENTINEL));

        Self {
            old,
            new,
            store,
            frame,
            reverse,
            trace: Vec::new(),
        }
    }

    pub fn width(&self) -> isize {
        self.new.len() as isize
    }

    pub fn height(&self) -> isize {
        self.old.len() as isize
    }

    /// The old sequence as this context walks it (reversed for a reverse context)
    pub fn old_chars(&self) -> &[char] {
        &self.old
    }

    pub fn new_chars(&self) -> &[char] {
        &self.new
    }

    pub fn store(&self) -> &EndpointStore {
        &self.store
    }

    pub fn frame(&self) -> &Transform {
        &self.frame
    }

    pub fn trace(&self) -> &[StepRecord] {
        &self.trace
    }

    pub fn drain_trace(&mut self) -> Vec<StepRecord> {
        std::mem::take(&mut self.trace)
    }

    /// Trimmed endpoint paths mapped into the frame's coordinates
    pub fn frame_endpoints(&self) -> Vec<Path> {
        self.store
            .trimmed(self.width(), self.height())
            .iter()
            .map(|path| self.frame.path(path))
            .collect()
    }

    /// Extends `diagonal` by one move plus its snake during outer step `step`
    ///
    /// Returns the stored path, or `None` when the move left the grid. In that case
    /// the off-grid path is still stored so that neighbouring diagonals can compare
    /// against it on the next step. `opposing` is attached to every emitted record.
    pub fn extend(&mut self, step: isize, diagonal: isize, opposing: &[Path]) -> Option<Path> {
        let go_down = if diagonal == -step {
            true
        } else if diagonal == step {
            false
        } else {
            self.store.get(diagonal - 1).end().x < self.store.get(diagonal + 1).end().x
        };

        let candidates = self.candidates(step, diagonal);
        let source = if go_down { diagonal + 1 } else { diagonal - 1 };
        let from = self.store.get(source).end();
        let to = if go_down {
            from.moved(0, 1)
        } else {
            from.moved(1, 0)
        };
        let mut path = self.store.get(source).append(to);

        // `>` rather than `>=`: the last row and column are still on the grid
        if to.x > self.width() || to.y > self.height() {
            self.store.set(diagonal, path);
            return None;
        }

        let mut highlights = vec![Segment::new(from, to)];
        self.record(diagonal, &path, &highlights, &candidates, true, opposing);

        let mut end = to;
        while end.x < self.width()
            && end.y < self.height()
            && self.new[end.x as usize] == self.old[end.y as usize]
        {
            let next = end.moved(1, 1);
            path = path.append(next);
            highlights.push(Segment::new(end, next));
            self.record(diagonal, &path, &highlights, &candidates, false, opposing);
            end = next;
        }

        self.store.set(diagonal, path.clone());
        Some(path)
    }

    fn candidates(&self, step: isize, diagonal: isize) -> Vec<Segment> {
        let down = |store: &EndpointStore| {
            let from = store.get(diagonal + 1).end();
            Segment::new(from, from.moved(0, 1))
        };
        let right = |store: &EndpointStore| {
            let from = store.get(diagonal - 1).end();
            Segment::new(from, from.moved(1, 0))
        };

        if diagonal == -step {
            vec![down(&self.store)]
        } else if diagonal == step {
            vec![right(&self.store)]
        } else {
            vec![down(&self.store), right(&self.store)]
        }
    }

    fn record(
        &mut self,
        diagonal: isize,
        path: &Path,
        highlights: &[Segment],
        candidates: &[Segment],
        top_level: bool,
        opposing: &[Path],
    ) {
        let local = StepRecord {
            diagonal,
            endpoints: self.store.trimmed(self.width(), self.height()),
            opposing: Vec::new(),
            path: path.trimmed(self.width(), self.height()),
            tagged: TaggedString::reconstruct(path, &self.old, &self.new),
            highlights: highlights.to_vec(),
            candidates: candidates.to_vec(),
            top_level,
            reverse: self.reverse,
            focus_rects: Vec::new(),
        };

        self.trace
            .push(local.transformed(&self.frame).with_opposing(opposing.to_vec()));
    }
}
