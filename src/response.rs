//! The response envelope every book endpoint answers with.

use serde::Serialize;

/// Uniform JSON wrapper: `{isSuccess, message, data?}`. The `data` key is
/// absent (not null) when an operation has nothing to return.
#[derive(Serialize)]
pub struct Envelope<T> {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Envelope { is_success: true, message: message.into(), data: Some(data) }
    }
}

impl Envelope<()> {
    /// Success with no payload (delete).
    pub fn ok(message: impl Into<String>) -> Self {
        Envelope { is_success: true, message: message.into(), data: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Envelope { is_success: false, message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_camel_case_flag_and_data() {
        let e = Envelope::success("fetched book successfully", json!({"id": 1}));
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["isSuccess"], json!(true));
        assert_eq!(v["message"], "fetched book successfully");
        assert_eq!(v["data"]["id"], 1);
    }

    #[test]
    fn ok_and_failure_omit_data() {
        let v = serde_json::to_value(Envelope::ok("Delete book successfully")).unwrap();
        assert_eq!(v["isSuccess"], json!(true));
        assert!(v.get("data").is_none());

        let v = serde_json::to_value(Envelope::failure("boom")).unwrap();
        assert_eq!(v["isSuccess"], json!(false));
        assert_eq!(v["message"], "boom");
        assert!(v.get("data").is_none());
    }
}
