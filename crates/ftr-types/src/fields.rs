use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::notification::NewImage;

/// Image attribute holding the destination file name.
pub const FIELD_FILE_NAME: &str = "filename";
/// Image attribute holding the content type of the payload.
pub const FIELD_MIME_TYPE: &str = "mime-type";
/// Image attribute holding the lookup key for the full-text payload.
pub const FIELD_FULLTEXT_REF: &str = "fulltext-ref";

/// The validated fields the pipeline needs from a notification image.
///
/// Extraction checks presence explicitly — a missing key is a
/// [`FieldError::MissingField`], never an unchecked fault. Empty values are
/// allowed; the path classifier handles an empty file name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    /// Destination file name, used for path classification and the object key.
    pub file_name: String,
    /// Content type recorded on the stored object.
    pub mime_type: String,
    /// Lookup key into the full-text collection.
    pub fulltext_ref: String,
}

impl RecordFields {
    /// Extract the required fields from a new-state image.
    pub fn from_image(image: &NewImage) -> Result<Self, FieldError> {
        Ok(Self {
            file_name: required(image, FIELD_FILE_NAME)?,
            mime_type: required(image, FIELD_MIME_TYPE)?,
            fulltext_ref: required(image, FIELD_FULLTEXT_REF)?,
        })
    }
}

fn required(image: &NewImage, field: &'static str) -> Result<String, FieldError> {
    image
        .get(field)
        .cloned()
        .ok_or(FieldError::MissingField(field))
}
