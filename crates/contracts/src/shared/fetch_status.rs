/// Lifecycle of one list fetch as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    NoResults,
}

impl FetchStatus {
    /// `loaded_once` distinguishes "nothing requested yet" from "empty result"
    pub fn from_parts(loading: bool, loaded_once: bool, len: usize) -> Self {
        match (loading, loaded_once, len) {
            (true, _, _) => Self::Loading,
            (false, false, _) => Self::Idle,
            (false, true, 0) => Self::NoResults,
            (false, true, _) => Self::Loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        assert_eq!(FetchStatus::from_parts(false, false, 0), FetchStatus::Idle);
        assert_eq!(FetchStatus::from_parts(true, true, 5), FetchStatus::Loading);
        assert_eq!(FetchStatus::from_parts(false, true, 0), FetchStatus::NoResults);
        assert_eq!(FetchStatus::from_parts(false, true, 3), FetchStatus::Loaded);
    }
}
