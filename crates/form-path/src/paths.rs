use nordstern_form_value::FormValue;

use crate::{format_path, Path, PathStep};

/// List the path of every leaf in `root`, in iteration order.
///
/// Scalars, blobs and empty containers are leaves. Holes and `undefined`
/// members are skipped. A root that is itself a leaf has no paths.
///
/// # Example
///
/// ```
/// use nordstern_form_path::collect_paths;
/// use nordstern_form_value::FormValue;
/// use serde_json::json;
///
/// let doc = FormValue::from(json!({"name": "x", "tasks": [{"done": true}, "a"]}));
/// assert_eq!(collect_paths(&doc), vec!["name", "tasks[0].done", "tasks[1]"]);
/// ```
pub fn collect_paths(root: &FormValue) -> Vec<String> {
    let mut out = Vec::new();
    let mut prefix = Path::new();
    match root {
        FormValue::Map(_) | FormValue::List(_) => walk(root, &mut prefix, &mut out),
        _ => {}
    }
    out
}

fn walk(node: &FormValue, prefix: &mut Path, out: &mut Vec<String>) {
    match node {
        FormValue::Map(map) if !map.is_empty() => {
            for (key, child) in map.iter() {
                prefix.push(PathStep::Key(key.clone()));
                walk(child, prefix, out);
                prefix.pop();
            }
        }
        FormValue::List(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                prefix.push(PathStep::Index(index));
                walk(child, prefix, out);
                prefix.pop();
            }
        }
        FormValue::Undefined => {}
        _ => {
            if !prefix.is_empty() {
                out.push(format_path(prefix));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_nested() {
        let doc = FormValue::from(json!({
            "address": {"street": "1", "city": "2"},
            "matrix": [[1, 2], [{"g": 3}]]
        }));
        assert_eq!(
            collect_paths(&doc),
            vec![
                "address.street",
                "address.city",
                "matrix[0][0]",
                "matrix[0][1]",
                "matrix[1][0].g"
            ]
        );
    }

    #[test]
    fn test_collect_skips_holes_keeps_empty_containers() {
        let doc = FormValue::map([
            ("items", FormValue::list([FormValue::from("a"), FormValue::Undefined, FormValue::from("c")])),
            ("tags", FormValue::list([])),
            ("gone", FormValue::Undefined),
            ("nothing", FormValue::Null),
        ]);
        assert_eq!(collect_paths(&doc), vec!["items[0]", "items[2]", "tags", "nothing"]);
    }

    #[test]
    fn test_collect_scalar_root() {
        assert!(collect_paths(&FormValue::from("x")).is_empty());
        assert!(collect_paths(&FormValue::empty_map()).is_empty());
    }
}
