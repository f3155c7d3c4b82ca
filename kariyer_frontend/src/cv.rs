use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::Color32;
use log::{info, warn};

use crate::api::ApiError;
use crate::i18n::{self, Text};
use crate::models::AnalysisResult;

pub const MAX_CV_BYTES: u64 = 16 * 1024 * 1024;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOC_MEDIA_TYPE: &str = "application/msword";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = [PDF_MEDIA_TYPE, DOC_MEDIA_TYPE, DOCX_MEDIA_TYPE];
/// File-picker filter; kept in step with [`ACCEPTED_MEDIA_TYPES`].
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// A resume picked by the user. `size` is the declared size on disk; files
/// over [`MAX_CV_BYTES`] are never read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        let mut size = metadata.len();
        let bytes = if size > MAX_CV_BYTES {
            Vec::new()
        } else {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            size = bytes.len() as u64;
            bytes
        };
        Ok(Self {
            name,
            media_type,
            size,
            bytes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    UnsupportedType(String),
    TooLarge(u64),
}

impl FileRejection {
    pub fn message(&self) -> &'static str {
        match self {
            FileRejection::UnsupportedType(_) => Text::CvUnsupportedType.tr(),
            FileRejection::TooLarge(_) => Text::CvFileTooLarge.tr(),
        }
    }
}

pub fn validate_file(file: &UploadedFile) -> Result<(), FileRejection> {
    if !ACCEPTED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
        return Err(FileRejection::UnsupportedType(file.media_type.clone()));
    }
    if file.size > MAX_CV_BYTES {
        return Err(FileRejection::TooLarge(file.size));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBucket {
    Excellent,
    VeryGood,
    Good,
    Medium,
    Low,
}

impl MatchBucket {
    pub fn from_score(score: u32) -> Self {
        match score {
            90..=u32::MAX => MatchBucket::Excellent,
            80..=89 => MatchBucket::VeryGood,
            70..=79 => MatchBucket::Good,
            60..=69 => MatchBucket::Medium,
            _ => MatchBucket::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchBucket::Excellent => Text::MatchExcellent.tr(),
            MatchBucket::VeryGood => Text::MatchVeryGood.tr(),
            MatchBucket::Good => Text::MatchGood.tr(),
            MatchBucket::Medium => Text::MatchMedium.tr(),
            MatchBucket::Low => Text::MatchLow.tr(),
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            MatchBucket::Excellent => Color32::from_rgb(22, 163, 74),
            MatchBucket::VeryGood => Color32::from_rgb(37, 99, 235),
            MatchBucket::Good => Color32::from_rgb(13, 148, 136),
            MatchBucket::Medium => Color32::from_rgb(217, 119, 6),
            MatchBucket::Low => Color32::from_rgb(220, 38, 38),
        }
    }
}

pub fn format_match_score(score: u32) -> &'static str {
    MatchBucket::from_score(score).label()
}

pub fn summary_text(result: &AnalysisResult) -> String {
    i18n::match_summary(result.total_jobs_found, result.top_matches.len())
}

/// What came back from the native file dialog.
#[derive(Debug)]
pub enum PickOutcome {
    Cancelled,
    Picked(UploadedFile),
    Unreadable(String),
}

/// Upload form and analysis result for one CV analyzer view.
#[derive(Debug, Default)]
pub struct CvAnalyzerState {
    selected: Option<UploadedFile>,
    picking: bool,
    loading: bool,
    error: Option<String>,
    result: Option<AnalysisResult>,
}

impl CvAnalyzerState {
    pub fn selected(&self) -> Option<&UploadedFile> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_picking(&self) -> bool {
        self.picking
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Replaces the selection when the file passes validation. A rejected
    /// file leaves the previous selection in place.
    pub fn select_file(&mut self, file: UploadedFile) -> Result<(), FileRejection> {
        if let Err(rejection) = validate_file(&file) {
            warn!("rejected CV file {}: {rejection:?}", file.name);
            self.error = Some(rejection.message().to_string());
            return Err(rejection);
        }
        self.selected = Some(file);
        self.error = None;
        Ok(())
    }

    /// Returns `true` when the caller should open the file dialog. Only one
    /// dialog is open at a time and none while an upload is running.
    pub fn begin_pick(&mut self) -> bool {
        if self.picking || self.loading {
            return false;
        }
        self.picking = true;
        true
    }

    pub fn finish_pick(&mut self, outcome: PickOutcome) {
        self.picking = false;
        match outcome {
            PickOutcome::Cancelled => {}
            PickOutcome::Picked(file) => {
                // Rejections are stored on the state for the view to show.
                let _ = self.select_file(file);
            }
            PickOutcome::Unreadable(reason) => self.file_unreadable(&reason),
        }
    }

    /// Reports a file that could not be read from disk.
    pub fn file_unreadable(&mut self, reason: &str) {
        self.error = Some(format!("{} ({reason})", Text::CvFileUnreadable.tr()));
    }

    /// Hands the selected file to the caller for upload. `None` means no
    /// request must be sent: either nothing is selected or one is in flight.
    pub fn begin_submit(&mut self) -> Option<UploadedFile> {
        if self.loading {
            return None;
        }
        let Some(file) = self.selected.take() else {
            self.error = Some(Text::CvFileRequired.tr().to_string());
            return None;
        };
        self.loading = true;
        self.error = None;
        Some(file)
    }

    pub fn finish_submit(&mut self, outcome: Result<AnalysisResult, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                info!(
                    "CV analysis finished: {} of {} jobs listed",
                    result.top_matches.len(),
                    result.total_jobs_found
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                warn!("CV analysis failed: {err}");
                self.result = None;
                self.error = Some(err.user_message(Text::CvGenericError));
            }
        }
    }

    pub fn reset_analysis(&mut self) {
        self.result = None;
        self.selected = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pdf(size: usize) -> UploadedFile {
        UploadedFile::new("cv.pdf", PDF_MEDIA_TYPE, vec![0; size])
    }

    #[test]
    fn buckets_have_no_gaps_at_boundaries() {
        let cases = [
            (0, "Düşük Uyum"),
            (59, "Düşük Uyum"),
            (60, "Orta Uyum"),
            (69, "Orta Uyum"),
            (70, "İyi Uyum"),
            (79, "İyi Uyum"),
            (80, "Çok İyi Uyum"),
            (89, "Çok İyi Uyum"),
            (90, "Mükemmel Uyum"),
            (100, "Mükemmel Uyum"),
        ];
        for (score, label) in cases {
            assert_eq!(format_match_score(score), label, "score {score}");
        }
    }

    #[test]
    fn every_score_lands_in_exactly_one_bucket() {
        let mut previous = MatchBucket::from_score(0);
        let mut changes = 0;
        for score in 1..=100 {
            let bucket = MatchBucket::from_score(score);
            if bucket != previous {
                changes += 1;
                previous = bucket;
            }
        }
        assert_eq!(changes, 4);
        assert_eq!(previous, MatchBucket::Excellent);
    }

    #[test]
    fn accepts_all_three_document_types() {
        for media_type in ACCEPTED_MEDIA_TYPES {
            let file = UploadedFile::new("cv", media_type, vec![1, 2, 3]);
            assert_eq!(validate_file(&file), Ok(()));
        }
    }

    #[test]
    fn rejected_type_keeps_previous_selection() {
        let mut state = CvAnalyzerState::default();
        state.select_file(pdf(10)).unwrap();

        let png = UploadedFile::new("photo.png", "image/png", vec![0; 10]);
        let rejection = state.select_file(png).unwrap_err();

        assert_eq!(rejection, FileRejection::UnsupportedType("image/png".into()));
        assert_eq!(state.selected().map(|f| f.name.as_str()), Some("cv.pdf"));
        assert_eq!(state.error(), Some(Text::CvUnsupportedType.tr()));
    }

    #[test]
    fn oversized_file_is_rejected_whatever_its_type() {
        let mut state = CvAnalyzerState::default();
        let mut big = pdf(0);
        big.size = MAX_CV_BYTES + 1;

        assert_eq!(state.select_file(big), Err(FileRejection::TooLarge(MAX_CV_BYTES + 1)));
        assert!(state.selected().is_none());
        assert_eq!(state.error(), Some(Text::CvFileTooLarge.tr()));

        let mut exact = pdf(0);
        exact.size = MAX_CV_BYTES;
        assert!(state.select_file(exact).is_ok());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn submit_without_file_fails_fast() {
        let mut state = CvAnalyzerState::default();
        assert!(state.begin_submit().is_none());
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(Text::CvFileRequired.tr()));
    }

    #[test]
    fn second_submit_while_loading_is_refused() {
        let mut state = CvAnalyzerState::default();
        state.select_file(pdf(10)).unwrap();
        assert!(state.begin_submit().is_some());
        assert!(state.is_loading());

        state.select_file(pdf(20)).unwrap();
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn rejection_surfaces_message_and_clears_loading() {
        let mut state = CvAnalyzerState::default();
        state.select_file(pdf(10)).unwrap();
        state.begin_submit();
        state.finish_submit(Err(ApiError::Rejected {
            status: 422,
            message: Some("CV okunamadı".into()),
        }));

        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert_eq!(state.error(), Some("CV okunamadı"));
    }

    #[test]
    fn reset_returns_to_upload_view() {
        let mut state = CvAnalyzerState::default();
        state.select_file(pdf(10)).unwrap();
        state.begin_submit();
        state.finish_submit(Ok(AnalysisResult::default()));
        assert!(state.result().is_some());

        state.reset_analysis();
        assert!(state.result().is_none());
        assert!(state.selected().is_none());
    }

    #[test]
    fn from_path_guesses_media_type_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ozgecmis.docx");
        fs::write(&path, b"PK\x03\x04").unwrap();

        let file = UploadedFile::from_path(&path).unwrap();
        assert_eq!(file.name, "ozgecmis.docx");
        assert_eq!(file.media_type, DOCX_MEDIA_TYPE);
        assert_eq!(file.size, 4);
        assert_eq!(file.size, file.bytes.len() as u64);
        assert_eq!(file.bytes, b"PK\x03\x04".to_vec());
    }

    #[test]
    fn only_one_file_dialog_at_a_time() {
        let mut state = CvAnalyzerState::default();
        assert!(state.begin_pick());
        assert!(!state.begin_pick());

        state.finish_pick(PickOutcome::Cancelled);
        assert!(!state.is_picking());
        assert!(state.selected().is_none());
        assert!(state.begin_pick());

        state.finish_pick(PickOutcome::Picked(pdf(10)));
        assert_eq!(state.selected().map(|f| f.name.as_str()), Some("cv.pdf"));
    }

    #[test]
    fn unreadable_pick_shows_the_reason() {
        let mut state = CvAnalyzerState::default();
        state.begin_pick();
        state.finish_pick(PickOutcome::Unreadable("failed to read cv.pdf".into()));

        assert!(!state.is_picking());
        assert_eq!(
            state.error(),
            Some(format!("{} (failed to read cv.pdf)", Text::CvFileUnreadable.tr()).as_str())
        );
    }
}
