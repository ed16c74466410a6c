//! Files and profile photos.
//!
//! `getFile` returns a `file_path`; pass it to [`Bot::file_url`] to get a
//! download link valid for at least one hour.

use telecast_core::{ApiResult, CapabilitySet, Request, params};

use super::Bot;

impl Bot {
    /// `getFile`
    pub fn get_file(&self, file_id: &str) -> ApiResult<Request> {
        Ok(self.request(
            "getFile",
            params! { "file_id" => file_id },
            CapabilitySet::EMPTY,
        ))
    }

    /// `getUserProfilePhotos`
    pub fn get_user_profile_photos(
        &self,
        user_id: i64,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<Request> {
        Ok(self.request(
            "getUserProfilePhotos",
            params! { "user_id" => user_id, "offset" => offset, "limit" => limit },
            CapabilitySet::EMPTY,
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::testing::{body, bot};

    #[test]
    fn test_get_file() {
        let request = bot().get_file("AgADBAAD").unwrap();
        assert_eq!(request.method(), "getFile");
        assert_eq!(body(&request), json!({ "file_id": "AgADBAAD" }));
    }

    #[test]
    fn test_get_user_profile_photos() {
        let request = bot().get_user_profile_photos(7, None, Some(10)).unwrap();
        assert_eq!(body(&request), json!({ "user_id": 7, "limit": 10 }));
    }
}
