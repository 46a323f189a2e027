//! get_current_time: current UTC time

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;
use toolbelt_application::ExecutionError;
use toolbelt_domain::{ToolArguments, ToolDefinition};

pub const GET_CURRENT_TIME: &str = "get_current_time";

pub fn get_current_time_definition() -> ToolDefinition {
    ToolDefinition::new(GET_CURRENT_TIME, "Get the current date and time in UTC").with_property(
        "format",
        json!({
            "type": "string",
            "enum": ["rfc3339", "unix"],
            "description": "Output format (default: rfc3339)"
        }),
        false,
    )
}

pub fn execute_get_current_time(args: &ToolArguments) -> Result<String, ExecutionError> {
    format_time(Utc::now(), args.optional_str("format")?)
}

fn format_time(now: DateTime<Utc>, format: Option<&str>) -> Result<String, ExecutionError> {
    match format.unwrap_or("rfc3339") {
        "rfc3339" => Ok(now.to_rfc3339_opts(SecondsFormat::Secs, true)),
        "unix" => Ok(now.timestamp().to_string()),
        other => Err(ExecutionError::Failed {
            message: format!("unsupported time format '{}'", other),
            detail: "expected 'rfc3339' or 'unix'".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

        assert_eq!(format_time(now, None).unwrap(), "2024-05-01T12:30:00Z");
        assert_eq!(format_time(now, Some("unix")).unwrap(), "1714566600");

        let err = format_time(now, Some("iso")).unwrap_err();
        assert_eq!(err.model_message(), "unsupported time format 'iso'");
    }
}
