/// Accumulates attribute errors across all fields of a record so that a
/// single expansion reports every problem at once.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    combined: Option<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.combined {
            Some(combined) => combined.combine(err),
            None => self.combined = Some(err),
        }
    }

    /// Records the error of `res`, if any, and returns its value.
    pub(crate) fn check<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        res.map_err(|err| self.push(err)).ok()
    }

    /// Returns `value` when no error was recorded.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.combined {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
