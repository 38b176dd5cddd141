use crate::server::error::{internal::InternalError, AppError};

/// Parses an i32 record id from a path segment
///
/// # Arguments
/// - `value` - The string to parse, surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::InternalErr(ParseStringId))` - The value is not a valid id
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    let result = value
        .trim()
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Splits a comma separated id list such as `"1,2,3"` into its non-empty segments.
pub fn split_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
