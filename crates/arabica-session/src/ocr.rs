//! Image-to-text collaborator interface.

/// Failure classes of a text-recognition request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OcrError {
    #[error("OCR rate limited")]
    RateLimited,
    #[error("OCR quota exhausted")]
    QuotaExhausted,
    #[error("no text found in image")]
    NoTextFound,
    #[error("OCR failed: {0}")]
    Generic(String),
}

impl OcrError {
    /// Classify an HTTP failure from the recognition service.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            429 => OcrError::RateLimited,
            402 => OcrError::QuotaExhausted,
            _ => OcrError::Generic(message.into()),
        }
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            OcrError::RateLimited => "Rate limit exceeded. Please wait a moment and try again.",
            OcrError::QuotaExhausted => "AI credits exhausted. Please add credits to continue.",
            OcrError::NoTextFound => {
                "Could not detect Arabic text in the image. Try a clearer image."
            }
            OcrError::Generic(_) => "An error occurred while processing the image.",
        }
    }
}

/// Recognizes Arabic text in an encoded image.
pub trait OcrService: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;
}
