use crate::runtime::Effects;

/// Replaces `value` only when it differs, reporting whether anything changed.
#[inline]
pub fn eq_update<T: PartialEq>(value: &mut T, next_value: T) -> Effects {
    if *value != next_value {
        *value = next_value;
        Effects::none()
    } else {
        Effects::none().unchanged()
    }
}
