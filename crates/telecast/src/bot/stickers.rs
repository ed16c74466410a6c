//! Sticker sets.

use telecast_core::{ApiResult, CapabilitySet, MaskPosition, ParamValue, Request, params};

use super::Bot;

impl Bot {
    /// `getStickerSet`
    pub fn get_sticker_set(&self, name: &str) -> ApiResult<Request> {
        Ok(self.request(
            "getStickerSet",
            params! { "name" => name },
            CapabilitySet::EMPTY,
        ))
    }

    /// `uploadStickerFile`: `png_sticker` is a file id or URL of a PNG image.
    pub fn upload_sticker_file(&self, user_id: i64, png_sticker: &str) -> ApiResult<Request> {
        Ok(self.request(
            "uploadStickerFile",
            params! { "user_id" => user_id, "png_sticker" => png_sticker },
            CapabilitySet::EMPTY,
        ))
    }

    /// `createNewStickerSet` owned by `user_id`.
    ///
    /// Passing a `mask_position` creates a set of masks
    /// (`contains_masks = true`).
    pub fn create_new_sticker_set(
        &self,
        user_id: i64,
        name: &str,
        title: &str,
        png_sticker: &str,
        emojis: &str,
        mask_position: Option<MaskPosition>,
    ) -> ApiResult<Request> {
        let contains_masks = mask_position.is_some().then_some(true);
        Ok(self.request(
            "createNewStickerSet",
            params! {
                "user_id" => user_id,
                "name" => name,
                "title" => title,
                "png_sticker" => png_sticker,
                "emojis" => emojis,
                "contains_masks" => contains_masks,
                "mask_position" => mask_position.map(ParamValue::object),
            },
            CapabilitySet::EMPTY,
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use telecast_core::MaskPoint;

    use super::super::testing::{body, bot};
    use super::*;

    #[test]
    fn test_create_plain_set() {
        let request = bot()
            .create_new_sticker_set(7, "cats_by_test_bot", "Cats", "file-id", "🐱", None)
            .unwrap();
        assert_eq!(request.method(), "createNewStickerSet");
        assert_eq!(
            body(&request),
            json!({
                "user_id": 7,
                "name": "cats_by_test_bot",
                "title": "Cats",
                "png_sticker": "file-id",
                "emojis": "🐱",
            })
        );
    }

    #[test]
    fn test_create_mask_set() {
        let mask = MaskPosition::new(MaskPoint::Eyes, -0.5, 0.25, 1.5);
        let request = bot()
            .create_new_sticker_set(7, "masks", "Masks", "file-id", "😎", Some(mask))
            .unwrap();
        let body = body(&request);
        assert_eq!(body["contains_masks"], json!(true));
        assert_eq!(
            body["mask_position"],
            json!({ "point": "eyes", "x_shift": -0.5, "y_shift": 0.25, "scale": 1.5 })
        );
    }

    #[test]
    fn test_sticker_lookups() {
        let get = bot().get_sticker_set("cats").unwrap();
        assert_eq!(body(&get), json!({ "name": "cats" }));

        let upload = bot().upload_sticker_file(7, "png").unwrap();
        assert_eq!(upload.method(), "uploadStickerFile");
        assert_eq!(body(&upload), json!({ "user_id": 7, "png_sticker": "png" }));
    }
}
