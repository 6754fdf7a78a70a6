use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or does not hold json
pub fn check_readable_json(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(path)
}

/// Course files are an object with `course_name` and `holes`; history files are an array of
/// objects each carrying `date` and `total_score`.
///
/// # Errors
///
/// Will return `Err` if the json is neither shape
fn validate_json_format(json: &Value) -> Result<(), String> {
    match json {
        Value::Object(obj) => {
            if !obj.get("course_name").is_some_and(Value::is_string) {
                return Err(
                    "The json key course_name is not in the correct format. Expected a string."
                        .to_string(),
                );
            }
            let Some(holes) = obj.get("holes").and_then(Value::as_array) else {
                return Err(
                    "The json key holes is not in the correct format. Expected an array."
                        .to_string(),
                );
            };
            for hole in holes {
                for key in ["hole_number", "par", "yards"] {
                    if !hole.get(key).is_some_and(Value::is_u64) {
                        return Err(format!(
                            "The json key {key} is not in the correct format. Expected a positive number."
                        ));
                    }
                }
            }
            Ok(())
        }
        Value::Array(games) => {
            for game in games {
                if !game.get("date").is_some_and(Value::is_string) {
                    return Err(
                        "The json key date is not in the correct format. Expected a string."
                            .to_string(),
                    );
                }
                if !game.get("total_score").is_some_and(Value::is_u64) {
                    return Err(
                        "The json key total_score is not in the correct format. Expected a number."
                            .to_string(),
                    );
                }
            }
            Ok(())
        }
        _ => Err("The json file is not in the correct format.".to_string()),
    }
}
