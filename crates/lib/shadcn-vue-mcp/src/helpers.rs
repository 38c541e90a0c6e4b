use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use shadcn_vue_core::control::ControlError;
use tracing::error;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Maps control-plane failures onto MCP error codes, logging each one.
pub fn map_err(err: ControlError) -> ErrorData {
    error!(error = %err, "tool call failed");
    let code = match &err {
        ControlError::InvalidInput(_) => ErrorCode::INVALID_PARAMS,
        ControlError::NotFound(_) => ErrorCode::RESOURCE_NOT_FOUND,
        ControlError::Source(_) | ControlError::Io(_) => ErrorCode::INTERNAL_ERROR,
    };
    mcp_err(code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_errors_map_to_protocol_codes() {
        let invalid = map_err(ControlError::InvalidInput("name".to_string()));
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(invalid.message, "Invalid input: name");

        let missing = map_err(ControlError::NotFound("x.vue".to_string()));
        assert_eq!(missing.code, ErrorCode::RESOURCE_NOT_FOUND);

        let io = map_err(ControlError::Io(std::io::Error::other("disk")));
        assert_eq!(io.code, ErrorCode::INTERNAL_ERROR);
    }
}
