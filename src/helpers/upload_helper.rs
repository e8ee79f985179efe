// classifieds/src/helpers/upload_helper.rs
use actix_multipart::Multipart;
use futures::TryStreamExt;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::configs::category_fields::MAX_IMAGES;
use crate::error::ClassifiedsError;

/// Name of the file input carrying listing photos.
pub const IMAGES_FIELD: &str = "images";

/// Upper bound for one text part; the longest field allows 5000 characters.
pub const MAX_TEXT_PART_BYTES: usize = 64 * 1024;

/// A decoded post-ad submission: text inputs plus the names of accepted
/// photos. Photo contents are read and dropped.
#[derive(Debug, Default, PartialEq)]
pub struct PostedForm {
    pub fields: HashMap<String, String>,
    pub images: Vec<String>,
}

fn looks_like_image(file_name: &str, declared_image: Option<bool>) -> bool {
    match declared_image {
        Some(true) => true,
        _ => mime_guess::from_path(file_name)
            .first_raw()
            .map_or(false, |mime| mime.starts_with("image/")),
    }
}

fn bad_part(err: impl std::fmt::Display) -> ClassifiedsError {
    ClassifiedsError::BadRequest(format!("invalid form data: {}", err))
}

pub async fn read_post_ad_payload(mut payload: Multipart) -> Result<PostedForm, ClassifiedsError> {
    let mut posted = PostedForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(bad_part)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let declared_image = field
            .content_type()
            .map(|mime| mime.essence_str().starts_with("image/"));

        match file_name {
            Some(file_name) => {
                let mut size = 0usize;
                while let Some(chunk) = field.try_next().await.map_err(bad_part)? {
                    size += chunk.len();
                }

                // An untouched file input still sends an empty part.
                if name != IMAGES_FIELD || file_name.is_empty() {
                    continue;
                }
                if !looks_like_image(&file_name, declared_image) {
                    warn!("Ignoring non-image upload '{}'", file_name);
                    continue;
                }
                if posted.images.len() >= MAX_IMAGES {
                    warn!("Ignoring photo '{}': limit of {} reached", file_name, MAX_IMAGES);
                    continue;
                }
                debug!("Accepted photo '{}' ({} bytes)", file_name, size);
                posted.images.push(file_name);
            }
            None => {
                let mut data = Vec::new();
                while let Some(chunk) = field.try_next().await.map_err(bad_part)? {
                    if data.len() + chunk.len() > MAX_TEXT_PART_BYTES {
                        return Err(ClassifiedsError::BadRequest(format!("field '{}' is too large", name)));
                    }
                    data.extend_from_slice(&chunk);
                }
                posted.fields.insert(name, String::from_utf8_lossy(&data).into_owned());
            }
        }
    }

    Ok(posted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::PayloadError;
    use actix_web::http::header::{self, HeaderMap, HeaderValue};
    use actix_web::web::Bytes;

    const BOUNDARY: &str = "classifieds-test-boundary";

    fn part(name: &str, file: Option<(&str, &str)>, body: &str) -> String {
        match file {
            Some((file_name, content_type)) => format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n{}\r\n",
                BOUNDARY, name, file_name, content_type, body
            ),
            None => format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, body
            ),
        }
    }

    async fn read(parts: Vec<String>) -> Result<PostedForm, ClassifiedsError> {
        let body = format!("{}--{}--\r\n", parts.concat(), BOUNDARY);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&format!("multipart/form-data; boundary={}", BOUNDARY)).unwrap(),
        );
        let stream = futures::stream::once(async move { Ok::<_, PayloadError>(Bytes::from(body)) });
        read_post_ad_payload(Multipart::new(&headers, stream)).await
    }

    #[actix_rt::test]
    async fn test_text_fields_and_photo_names_are_collected() {
        let posted = read(vec![
            part("title", None, "Toyota Camry 2020"),
            part("videoUrl", None, "https://youtu.be/abc"),
            part(IMAGES_FIELD, Some(("front.jpg", "image/jpeg")), "jpegbytes"),
            part(IMAGES_FIELD, Some(("side.png", "application/octet-stream")), "pngbytes"),
        ])
        .await
        .unwrap();

        assert_eq!(posted.fields["title"], "Toyota Camry 2020");
        assert_eq!(posted.fields["videoUrl"], "https://youtu.be/abc");
        assert_eq!(posted.images, vec!["front.jpg", "side.png"]);
    }

    #[actix_rt::test]
    async fn test_photos_are_capped_and_non_images_skipped() {
        let mut parts = vec![
            part(IMAGES_FIELD, Some(("notes.txt", "text/plain")), "hello"),
            part(IMAGES_FIELD, Some(("", "application/octet-stream")), ""),
        ];
        for i in 0..10 {
            let file_name = format!("photo-{}.jpg", i);
            parts.push(part(IMAGES_FIELD, Some((&file_name, "image/jpeg")), "bytes"));
        }
        let posted = read(parts).await.unwrap();

        assert_eq!(posted.images.len(), MAX_IMAGES);
        assert_eq!(posted.images[0], "photo-0.jpg");
        assert_eq!(posted.images[MAX_IMAGES - 1], "photo-7.jpg");
    }

    #[actix_rt::test]
    async fn test_oversized_text_part_is_rejected() {
        let huge = "a".repeat(MAX_TEXT_PART_BYTES + 1);
        let result = read(vec![part("description", None, &huge)]).await;
        assert!(matches!(result, Err(ClassifiedsError::BadRequest(_))));
    }

    #[test]
    fn test_image_detection_falls_back_to_extension() {
        assert!(looks_like_image("a.webp", None));
        assert!(looks_like_image("scan", Some(true)));
        assert!(!looks_like_image("a.pdf", Some(false)));
    }
}
