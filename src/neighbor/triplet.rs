//! Context windows over one element of a sequence.

/// A `(previous, current, next)` window around one element occurrence.
///
/// Missing neighbors at the edges of a sequence are `None`, never a default
/// value of `T`, so `0` or `""` remain ordinary data.
///
/// # Examples
///
/// ```rust
/// use multiseq::neighbor::Triplet;
///
/// let triplets = Triplet::windows(vec![1, 0, 2]);
/// assert_eq!(triplets[0], Triplet::new(None, 1, Some(0)));
/// assert_eq!(triplets[1], Triplet::new(Some(1), 0, Some(2)));
/// assert_eq!(triplets[2], Triplet::new(Some(0), 2, None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triplet<T> {
    previous: Option<T>,
    current: T,
    next: Option<T>,
}

impl<T> Triplet<T> {
    /// Creates a triplet from its three parts.
    #[inline]
    #[must_use]
    pub const fn new(previous: Option<T>, current: T, next: Option<T>) -> Self {
        Self {
            previous,
            current,
            next,
        }
    }

    /// The element before `current`, if any.
    #[inline]
    #[must_use]
    pub const fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    /// The element the window is centered on.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> &T {
        &self.current
    }

    /// The element after `current`, if any.
    #[inline]
    #[must_use]
    pub const fn next(&self) -> Option<&T> {
        self.next.as_ref()
    }

    /// Consumes the triplet and returns `(previous, current, next)`.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, T, Option<T>) {
        (self.previous, self.current, self.next)
    }

    /// Number of missing neighbors: 0 inside a sequence, 2 for a sequence
    /// of length one.
    #[inline]
    #[must_use]
    pub fn absent_neighbors(&self) -> usize {
        usize::from(self.previous.is_none()) + usize::from(self.next.is_none())
    }

    /// Applies `function` to all three parts.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, mut function: F) -> Triplet<U> {
        Triplet {
            previous: self.previous.map(&mut function),
            current: function(self.current),
            next: self.next.map(&mut function),
        }
    }

    /// Returns `true` if one window's previous key equals the other
    /// window's next key, in either direction.
    ///
    /// Such occurrences belong to different logical chains and are never
    /// grouped together. Missing neighbors never match, so triplets without
    /// neighbors never cross.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiseq::neighbor::Triplet;
    ///
    /// let ending = Triplet::new(Some("A"), "B", None);
    /// let inside = Triplet::new(Some("C"), "B", Some("A"));
    /// assert!(ending.crosses_by(&inside, |value| *value));
    ///
    /// let repeated = Triplet::new(Some("A"), "B", Some("A"));
    /// assert!(repeated.crosses_by(&repeated.clone(), |value| *value));
    ///
    /// let aligned = Triplet::new(Some("A"), "B", Some("C"));
    /// assert!(!ending.crosses_by(&aligned, |value| *value));
    /// ```
    #[must_use]
    pub fn crosses_by<K, F>(&self, other: &Self, key_selector: F) -> bool
    where
        K: Eq,
        F: Fn(&T) -> K,
    {
        let this = NeighborKeys::of(self, &key_selector);
        let other = NeighborKeys::of(other, &key_selector);
        this.crosses(&other)
    }
}

impl<T: Clone> Triplet<T> {
    /// Builds one triplet per element of `sequence`, in order.
    ///
    /// The sequence is consumed once.
    #[must_use]
    pub fn windows<S: IntoIterator<Item = T>>(sequence: S) -> Vec<Self> {
        let elements: Vec<T> = sequence.into_iter().collect();
        let last = elements.len().saturating_sub(1);
        elements
            .iter()
            .enumerate()
            .map(|(index, current)| Self {
                previous: index.checked_sub(1).map(|before| elements[before].clone()),
                current: current.clone(),
                next: (index < last).then(|| elements[index + 1].clone()),
            })
            .collect()
    }
}

/// The neighbor keys of one triplet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NeighborKeys<K> {
    pub(crate) previous: Option<K>,
    pub(crate) next: Option<K>,
}

impl<K: Eq> NeighborKeys<K> {
    pub(crate) fn of<T, F: Fn(&T) -> K>(triplet: &Triplet<T>, key_selector: &F) -> Self {
        Self {
            previous: triplet.previous.as_ref().map(key_selector),
            next: triplet.next.as_ref().map(key_selector),
        }
    }

    pub(crate) fn crosses(&self, other: &Self) -> bool {
        self.crosses_towards(other) || other.crosses_towards(self)
    }

    fn crosses_towards(&self, other: &Self) -> bool {
        matches!((&self.previous, &other.next), (Some(previous), Some(next)) if previous == next)
    }

    /// `true` when the keys agree or either one is missing.
    pub(crate) fn side_compatible(left: Option<&K>, right: Option<&K>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => left == right,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_windows_of_single_element() {
        let triplets = Triplet::windows(["only"]);
        assert_eq!(triplets, vec![Triplet::new(None, "only", None)]);
        assert_eq!(triplets[0].absent_neighbors(), 2);
    }

    #[rstest]
    fn test_windows_of_empty_sequence() {
        assert!(Triplet::windows(Vec::<i32>::new()).is_empty());
    }

    #[rstest]
    fn test_windows_keep_default_values() {
        let triplets = Triplet::windows([0, 0]);
        assert_eq!(triplets[0], Triplet::new(None, 0, Some(0)));
        assert_eq!(triplets[1], Triplet::new(Some(0), 0, None));
    }

    #[rstest]
    #[case(Triplet::new(Some("A"), "B", None), Triplet::new(Some("C"), "B", Some("A")), true)]
    #[case(Triplet::new(Some("C"), "B", Some("A")), Triplet::new(Some("A"), "B", None), true)]
    #[case(Triplet::new(Some("A"), "B", None), Triplet::new(Some("A"), "B", Some("C")), false)]
    #[case(Triplet::new(Some("A"), "B", Some("A")), Triplet::new(Some("A"), "B", Some("A")), true)]
    #[case(Triplet::new(Some("A"), "B", Some("A")), Triplet::new(None, "B", Some("A")), true)]
    #[case(Triplet::new(Some("A"), "B", Some("A")), Triplet::new(Some("A"), "B", Some("C")), true)]
    #[case(Triplet::new(None, "B", None), Triplet::new(Some("A"), "B", Some("A")), false)]
    #[case(Triplet::new(None, "B", Some("A")), Triplet::new(Some("A"), "B", None), true)]
    fn test_crosses_by(
        #[case] left: Triplet<&str>,
        #[case] right: Triplet<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(left.crosses_by(&right, |value| *value), expected);
    }

    #[rstest]
    fn test_crosses_by_uses_keys() {
        let upper = Triplet::new(Some("A".to_string()), "b".to_string(), None);
        let lower = Triplet::new(None, "B".to_string(), Some("a".to_string()));
        assert!(upper.crosses_by(&lower, |value| value.to_lowercase()));
        assert!(!upper.crosses_by(&lower, String::clone));
    }

    #[rstest]
    fn test_map_and_into_parts() {
        let triplet = Triplet::new(Some(1), 2, None).map(|value| value * 10);
        assert_eq!(triplet.into_parts(), (Some(10), 20, None));
    }

    #[rstest]
    fn test_side_compatible() {
        assert!(NeighborKeys::side_compatible(Some(&1), Some(&1)));
        assert!(NeighborKeys::side_compatible(None, Some(&1)));
        assert!(NeighborKeys::<i32>::side_compatible(None, None));
        assert!(!NeighborKeys::side_compatible(Some(&1), Some(&2)));
    }
}
