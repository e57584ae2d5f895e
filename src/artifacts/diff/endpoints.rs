use crate::artifacts::geometry::path::Path;

/// Furthest-reaching path per diagonal
///
/// Diagonals range over `-bound..=bound`, stored in a flat vector offset by `bound`.
/// Reading a diagonal that was never written is a contract violation: the searches
/// only read `d - 1` and `d + 1` after an earlier step wrote them.
#[derive(Debug, Clone)]
pub struct EndpointStore {
    bound: isize,
    paths: Vec<Option<Path>>,
}

impl EndpointStore {
    pub fn new(bound: usize) -> Self {
        Self {
            bound: bound as isize,
            paths: vec![None; 2 * bound + 1],
        }
    }

    fn slot(&self, diagonal: isize) -> usize {
        assert!(
            (-self.bound..=self.bound).contains(&diagonal),
            "diagonal {} outside of the store bounds ±{}",
            diagonal,
            self.bound
        );
        (diagonal + self.bound) as usize
    }

    pub fn get(&self, diagonal: isize) -> &Path {
        self.paths[self.slot(diagonal)]
            .as_ref()
            .unwrap_or_else(|| panic!("diagonal {diagonal} read before it was written"))
    }

    pub fn try_get(&self, diagonal: isize) -> Option<&Path> {
        if (-self.bound..=self.bound).contains(&diagonal) {
            self.paths[self.slot(diagonal)].as_ref()
        } else {
            None
        }
    }

    pub fn set(&mut self, diagonal: isize, path: Path) {
        let slot = self.slot(diagonal);
        self.paths[slot] = Some(path);
    }

    /// Stored paths by increasing diagonal, cut down to the `[0, width] x [0, height]` grid
    pub fn trimmed(&self, width: isize, height: isize) -> Vec<Path> {
        self.paths
            .iter()
            .flatten()
            .map(|path| path.trimmed(width, height))
            .collect()
    }

    /// `(diagonal, end x)` for every stored diagonal, off-grid endpoints included
    pub fn frontier(&self) -> Vec<(isize, isize)> {
        self.paths
            .iter()
            .enumerate()
            .filter_map(|(slot, path)| {
                path.as_ref()
                    .map(|path| (slot as isize - self.bound, path.end().x))
            })
            .collect()
    }
}
