use crate::puzzle::Value;

/// A set of candidate cell values over `1..=max`.
#[derive(Clone, PartialEq, Eq)]
pub struct ValueSet {
    len: usize,
    domain: Vec<bool>,
}

impl ValueSet {
    /// An empty set over `1..=max`.
    pub fn new(max: Value) -> Self {
        Self {
            len: 0,
            domain: vec![false; max as usize],
        }
    }

    /// The full set `1..=max`.
    pub fn with_all(max: Value) -> Self {
        Self {
            len: max as usize,
            domain: vec![true; max as usize],
        }
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no value remains.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value`, returning whether it was absent.
    pub fn insert(&mut self, value: Value) -> bool {
        let slot = &mut self.domain[value as usize - 1];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: Value) -> bool {
        let slot = &mut self.domain[value as usize - 1];
        if !*slot {
            return false;
        }
        *slot = false;
        self.len -= 1;
        true
    }

    /// Whether `value` is in the set.
    pub fn contains(&self, value: Value) -> bool {
        self.domain[value as usize - 1]
    }

    /// The sole value, if exactly one remains.
    pub fn single_value(&self) -> Option<Value> {
        match self.len {
            1 => self.iter().next(),
            _ => None,
        }
    }

    /// Keeps only values also present in `other`. Values beyond `other`'s
    /// domain count as absent, so the sets may range over different maxima.
    pub fn intersect(&mut self, other: &ValueSet) {
        for (i, present) in self.domain.iter_mut().enumerate() {
            if *present && other.domain.get(i) != Some(&true) {
                *present = false;
                self.len -= 1;
            }
        }
    }

    /// Iterates values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.domain
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(i, _)| i as Value + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::ValueSet;

    #[test]
    fn insert_remove_result() {
        let mut set = ValueSet::new(4);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
    }

    #[test]
    fn iter_is_sorted() {
        let mut set = ValueSet::new(4);
        set.insert(3);
        set.insert(1);
        let values: Vec<_> = set.iter().collect();
        assert_eq!(vec![1, 3], values);
    }

    #[test]
    fn single_value() {
        let mut set = ValueSet::with_all(2);
        assert_eq!(None, set.single_value());
        set.remove(1);
        assert_eq!(Some(2), set.single_value());
        set.remove(2);
        assert_eq!(None, set.single_value());
    }

    #[test]
    fn intersect_with_shorter_domain() {
        let mut set = ValueSet::with_all(4);
        let other = ValueSet::with_all(2);
        set.intersect(&other);
        assert_eq!(vec![1, 2], set.iter().collect::<Vec<_>>());
        assert_eq!(2, set.len());
    }

    #[test]
    fn intersect_drops_values() {
        let mut set = ValueSet::with_all(4);
        let mut other = ValueSet::new(4);
        other.insert(2);
        other.insert(4);
        set.intersect(&other);
        assert_eq!(vec![2, 4], set.iter().collect::<Vec<_>>());
        assert_eq!(2, set.len());
    }
}
