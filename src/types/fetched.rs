//! Explicit "absent payload" result for upstream fetches.

/// The outcome of a fetch whose upstream payload may be missing entirely.
///
/// `Data` carries whatever the API returned, including an empty list;
/// `Empty` means there was no payload at all (empty body, `null`, or the
/// expected field was absent). Callers that need the legacy envelope use
/// [`Fetched::into_data_or_default`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Data(T),
    Empty,
}

impl<T> Fetched<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Empty => None,
        }
    }
}

impl<T: Default> Fetched<T> {
    pub fn into_data_or_default(self) -> T {
        match self {
            Self::Data(data) => data,
            Self::Empty => T::default(),
        }
    }
}

impl<T> From<Option<T>> for Fetched<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_falls_back_to_default() {
        let fetched: Fetched<Vec<u8>> = Fetched::Empty;
        assert!(fetched.is_empty());
        assert_eq!(fetched.into_data_or_default(), Vec::<u8>::new());
    }

    #[test]
    fn test_data_is_kept() {
        let fetched = Fetched::from(Some(vec![1, 2]));
        assert_eq!(fetched.as_data(), Some(&vec![1, 2]));
        assert_eq!(fetched.into_data_or_default(), vec![1, 2]);
    }
}
