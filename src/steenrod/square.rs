//! Combinatorial Steenrod square on a pair of simplices.

/// Decide whether the pair {a, b} contributes their union to Sq^k
///
/// `a` and `b` are distinct sorted vertex lists of equal length. Their
/// sorted union is written into `union`; the caller checks its length
/// against d + k + 1 and its presence in the filtration.
///
/// Every vertex v of the symmetric difference gets the label
/// `(pos(v in union) + pos(v in symmetric difference)) mod 2`. The pair
/// contributes iff all vertices of a \ b share one label and all vertices
/// of b \ a share the other.
pub fn square_contribution(a: &[usize], b: &[usize], union: &mut Vec<usize>) -> bool {
    union.clear();

    // Label seen on each side: bit 0 for label 0, bit 1 for label 1
    let mut labels_a = 0u8;
    let mut labels_b = 0u8;
    let mut pos_bar = 0usize;
    let (mut i, mut j) = (0, 0);

    while i < a.len() || j < b.len() {
        let pos = union.len();
        let take_a = j == b.len() || (i < a.len() && a[i] < b[j]);
        let take_b = i == a.len() || (j < b.len() && b[j] < a[i]);

        if take_a {
            labels_a |= 1 << ((pos + pos_bar) % 2);
            pos_bar += 1;
            union.push(a[i]);
            i += 1;
        } else if take_b {
            labels_b |= 1 << ((pos + pos_bar) % 2);
            pos_bar += 1;
            union.push(b[j]);
            j += 1;
        } else {
            union.push(a[i]);
            i += 1;
            j += 1;
        }
    }

    matches!((labels_a, labels_b), (0b01, 0b10) | (0b10, 0b01))
}
