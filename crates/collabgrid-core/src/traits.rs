/// A partial-update form for an entity.
///
/// `from_entity` captures the editable fields of an entity so a caller can
/// present them for editing; `apply_to` writes the form back.
pub trait Editable<T>: Sized {
    fn from_entity(entity: &T) -> Self;
    fn apply_to(self, entity: &mut T);
}
