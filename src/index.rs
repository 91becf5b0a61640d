use crate::error::{Error, Result};

/// Parses a user-supplied 1-based index token and checks it against
/// `[1, length]`.
///
/// Returns the zero-based position. `label` names the argument in error
/// messages (e.g. `item_idx`, `src_idx`) but does not change the validation.
///
/// # Errors
///
/// Returns a usage error if the token is not an integer or is out of range.
pub fn resolve_index(token: &str, length: usize, label: &str) -> Result<usize> {
    // Parsed as i64 so "-1" reads as out of range, not as a non-number.
    let index: i64 = token
        .parse()
        .map_err(|_| Error::Usage(format!("{label} must be a number (got '{token}').")))?;

    let in_range = usize::try_from(index).is_ok_and(|index| 1 <= index && index <= length);
    if !in_range {
        return Err(Error::Usage(format!(
            "{label} out of range. Must be between 1 and {length}."
        )));
    }

    #[allow(clippy::cast_sign_loss)]
    let position = index as usize - 1;
    Ok(position)
}
