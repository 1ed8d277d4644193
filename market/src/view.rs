/// Presentation state of one view-model record.
///
/// Rendering shows a placeholder for `Loading`, the record for `Ready`, and
/// an error (optionally over the last good record) for `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed {
        reason: String,
        last_good: Option<T>,
    },
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T: Clone> ViewState<T> {
    /// Failed state that keeps whatever data this state was showing.
    pub fn fail(&self, reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            last_good: self.data().cloned(),
        }
    }
}

impl<T> ViewState<T> {
    /// Latest good record, fresh or stale.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(v) => Some(v),
            Self::Failed { last_good, .. } => last_good.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
