use crate::notice::Notice;

pub const DEFAULT_MAX_UPLOAD_MB: f64 = 16.0;
pub const EMPTY_FILE_LABEL: &str =
  "Choose file";

const BYTES_PER_MB: f64 =
  1024.0 * 1024.0;

/// Upper bound on a chosen file, in MiB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileSizeLimit {
  max_mb: f64
}

impl Default for FileSizeLimit {
  fn default() -> Self {
    Self {
      max_mb: DEFAULT_MAX_UPLOAD_MB
    }
  }
}

impl FileSizeLimit {
  /// Non-positive or non-finite ceilings
  /// fall back to the default.
  pub fn new(max_mb: f64) -> Self {
    if max_mb.is_finite() && max_mb > 0.0
    {
      Self { max_mb }
    } else {
      Self::default()
    }
  }

  pub fn max_mb(&self) -> f64 {
    self.max_mb
  }

  /// A file exactly at the ceiling passes.
  pub fn check(
    &self,
    size_bytes: f64
  ) -> Result<(), Notice> {
    let size_mb = size_bytes / BYTES_PER_MB;
    if size_mb > self.max_mb {
      return Err(Notice::danger(format!(
        "File size must be less than {}MB",
        self.max_mb
      )));
    }
    Ok(())
  }
}

/// Text for the label next to a file input.
pub fn file_label(
  file_name: Option<&str>
) -> &str {
  match file_name {
    | Some(name) if !name.is_empty() => name,
    | _ => EMPTY_FILE_LABEL
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::notice::Severity;

  const MB: f64 = 1024.0 * 1024.0;

  #[test]
  fn rejects_files_over_the_default_ceiling()
  {
    let limit = FileSizeLimit::default();
    let notice = limit
      .check(17.0 * MB)
      .expect_err("17MB is over 16MB");
    assert_eq!(
      notice.severity,
      Severity::Danger
    );
    assert_eq!(
      notice.message,
      "File size must be less than 16MB"
    );

    assert!(limit.check(15.0 * MB).is_ok());
    assert!(limit.check(16.0 * MB).is_ok());
  }

  #[test]
  fn custom_ceiling_formats_fractional_sizes()
  {
    let limit = FileSizeLimit::new(2.5);
    let notice = limit
      .check(3.0 * MB)
      .expect_err("3MB is over 2.5MB");
    assert_eq!(
      notice.message,
      "File size must be less than 2.5MB"
    );
  }

  #[test]
  fn invalid_ceiling_uses_default() {
    assert_eq!(
      FileSizeLimit::new(0.0).max_mb(),
      16.0
    );
    assert_eq!(
      FileSizeLimit::new(f64::NAN).max_mb(),
      16.0
    );
  }

  #[test]
  fn label_falls_back_when_no_file() {
    assert_eq!(
      file_label(Some("cv.pdf")),
      "cv.pdf"
    );
    assert_eq!(file_label(None), "Choose file");
    assert_eq!(
      file_label(Some("")),
      "Choose file"
    );
  }
}
