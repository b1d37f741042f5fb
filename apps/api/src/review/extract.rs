//! Resume text extraction for uploaded files.

use anyhow::anyhow;
use bytes::Bytes;
use tracing::debug;

use crate::errors::{AppError, FieldError};

/// Whether an upload should be treated as a PDF document.
pub fn is_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let by_type = content_type
        .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    let by_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    by_type || by_name
}

/// Extracts plain text from an uploaded resume.
///
/// PDFs are parsed with `pdf-extract` on a blocking thread; anything else must be UTF-8 text.
pub async fn extract_resume_text(
    field: &str,
    data: Bytes,
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<String, AppError> {
    let text = if is_pdf(content_type, file_name) {
        let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?;
        extracted.map_err(|e| {
            AppError::field(FieldError::new(
                field,
                format!("Could not read PDF: {e}"),
                "pdf_invalid",
            ))
        })?
    } else {
        String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::field(FieldError::new(
                field,
                "Resume file must be a PDF or UTF-8 text",
                "unsupported_file",
            ))
        })?
    };

    let text = collapse_blank_lines(&text);
    debug!("Extracted {} chars of resume text", text.len());

    if text.is_empty() {
        return Err(AppError::field(FieldError::blank(field)));
    }
    Ok(text)
}

/// Trims trailing whitespace per line and squeezes runs of blank lines, which PDF extraction produces.
fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 || out.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
