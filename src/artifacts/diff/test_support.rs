/// Classic O(NM) insert/delete distance, independent of the edit graph searches
pub fn dp_distance(old: &str, new: &str) -> usize {
    let old = old.chars().collect::<Vec<_>>();
    let new = new.chars().collect::<Vec<_>>();

    let mut row = (0..=new.len()).collect::<Vec<_>>();
    for y in 1..=old.len() {
        let mut next = vec![y; new.len() + 1];
        for x in 1..=new.len() {
            next[x] = if old[y - 1] == new[x - 1] {
                row[x - 1]
            } else {
                row[x].min(next[x - 1]) + 1
            };
        }
        row = next;
    }

    row[new.len()]
}

#[test]
fn dp_distance_counts_inserts_and_deletes() {
    assert_eq!(dp_distance("ABCABBA", "CBABAC"), 5);
    assert_eq!(dp_distance("", "abc"), 3);
    assert_eq!(dp_distance("ab", "ba"), 2);
}
