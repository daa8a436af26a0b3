/// Three-state update for an optional field.
///
/// - `NoChange`: keep the existing value
/// - `Set(value)`: replace with `value`
/// - `Clear`: reset to `None`
///
/// ```
/// use collabgrid_domain::FieldUpdate;
/// use chrono::{TimeZone, Utc};
///
/// let mut due = Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
/// FieldUpdate::NoChange.apply_to(&mut due);
/// assert!(due.is_some());
///
/// FieldUpdate::Clear.apply_to(&mut due);
/// assert_eq!(due, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets, `None` clears.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}
