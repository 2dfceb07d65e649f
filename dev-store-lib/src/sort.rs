use std::cmp::Ordering;

/// Direction of a list sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// A column a list can be sorted by.
pub trait SortKey: Copy + Eq {
    /// Direction used when the user switches to this key.
    fn default_direction(self) -> SortDirection;
}

/// Current key and direction of a sortable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    key: K,
    direction: SortDirection,
}

impl<K: SortKey> SortState<K> {
    /// Sort by `key` in its default direction.
    pub fn new(key: K) -> Self {
        Self {
            key,
            direction: key.default_direction(),
        }
    }

    pub fn with_direction(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Select `key`: the same key flips direction, a different key starts
    /// over in that key's default direction.
    pub fn toggle(&mut self, key: K) {
        if key == self.key {
            self.direction = self.direction.flipped();
        } else {
            *self = Self::new(key);
        }
    }
}

/// Compare display names the way a person expects: case-insensitively
/// first, falling back to exact code-point order so the result is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
