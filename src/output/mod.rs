
use crate::ResponseBody;

/// Printed in place of a body when the peer sent an empty entity.
pub const NO_BODY: &str = "<no body>";

pub fn render(body: &ResponseBody, pretty: bool) -> String {
    match body {
        ResponseBody::Text(text) if pretty => prettify_response_body(text),
        ResponseBody::Text(text) => text.clone(),
        ResponseBody::NoBody => String::from(NO_BODY),
    }
}

fn prettify_response_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) | Ok(value @ serde_json::Value::Array(_)) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| String::from(body))
        }
        _ => String::from(body),
    }
}
