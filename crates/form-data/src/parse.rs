use indexmap::IndexMap;
use nordstern_form_path::{parse_path, set_in_place, PathError, PathStep};
use nordstern_form_value::FormValue;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::form_data::{FormData, FormDataValue};
use crate::options::{DuplicateKeys, ParseOptions, ReservedKeys};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("reserved key in form field {key:?}")]
    ReservedKey { key: String },
    #[error("array index {index} in form field {key:?} exceeds limit of {max}")]
    IndexOutOfRange { key: String, index: usize, max: usize },
    #[error("malformed urlencoded body: {0}")]
    Decode(String),
}

/// Structure form data with the default [`ParseOptions`].
///
/// # Example
///
/// ```
/// use nordstern_form_data::{parse, FormData};
/// use serde_json::json;
///
/// let form: FormData = [
///     ("tasks[0].content", "Write code"),
///     ("tasks[0].completed", "true"),
///     ("tasks[1].content", "Test code"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(
///     serde_json::Value::from(&parse(&form).unwrap()),
///     json!({"tasks": [{"content": "Write code", "completed": "true"}, {"content": "Test code"}]})
/// );
/// ```
pub fn parse(form_data: &FormData) -> Result<FormValue, ParseError> {
    parse_with(form_data, &ParseOptions::default())
}

/// Structure form data into a nested value.
///
/// Every distinct name is tokenized as a form path and its value folded into
/// an initially empty mapping with [`set_in_place`], so names sharing a prefix
/// build up the same container. A name submitted once maps to its value; a
/// repeated name is handled per [`DuplicateKeys`]. Indices that skip
/// positions leave holes in the resulting sequence.
///
/// # Errors
///
/// - `ParseError::Path` if a name is not a valid path or clashes with the
///   shape built so far (`a=1&a.b=2`)
/// - `ParseError::ReservedKey` under [`ReservedKeys::Reject`]
/// - `ParseError::IndexOutOfRange` if a name addresses an index above
///   [`ParseOptions::max_index`]
pub fn parse_with(form_data: &FormData, options: &ParseOptions) -> Result<FormValue, ParseError> {
    let mut grouped: IndexMap<&str, Vec<&FormDataValue>> = IndexMap::new();
    for (key, value) in form_data.entries() {
        grouped.entry(key).or_default().push(value);
    }

    let mut root = FormValue::empty_map();
    for (key, values) in &grouped {
        let steps = parse_path(key)?;

        if steps.iter().any(PathStep::is_reserved) {
            match options.reserved_keys {
                ReservedKeys::Keep => {}
                ReservedKeys::Skip => {
                    warn!(key = %key, "dropping form field with reserved key");
                    continue;
                }
                ReservedKeys::Reject => {
                    return Err(ParseError::ReservedKey {
                        key: key.to_string(),
                    })
                }
            }
        }

        if let Some(index) = steps
            .iter()
            .filter_map(PathStep::as_index)
            .find(|index| *index > options.max_index)
        {
            return Err(ParseError::IndexOutOfRange {
                key: key.to_string(),
                index,
                max: options.max_index,
            });
        }

        let value = match values.as_slice() {
            [single] => FormValue::from(*single),
            many => {
                trace!(key = %key, count = many.len(), policy = ?options.duplicate_keys, "repeated form field");
                match options.duplicate_keys {
                    DuplicateKeys::Collect => {
                        FormValue::list(many.iter().map(|v| FormValue::from(*v)))
                    }
                    DuplicateKeys::Last => many
                        .last()
                        .map_or(FormValue::Undefined, |v| FormValue::from(*v)),
                }
            }
        };

        set_in_place(&mut root, &steps, value)?;
    }

    debug!(fields = grouped.len(), entries = form_data.len(), "structured form data");
    Ok(root)
}
