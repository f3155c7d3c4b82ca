//! User-facing strings. Every label the views show is looked up here so the
//! flow logic never carries literal wording.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    // Shell
    AppTitle,
    NavCvAnalyzer,
    NavInterview,
    NavForum,
    NavSettings,
    Dismiss,
    Retry,

    // CV analyzer
    CvHeading,
    CvIntro,
    CvChooseFile,
    CvNoFileSelected,
    CvAnalyze,
    CvAnalyzing,
    CvNewAnalysis,
    CvFileRequired,
    CvUnsupportedType,
    CvFileTooLarge,
    CvFileUnreadable,
    CvGenericError,
    CvProfileHeading,
    CvSkills,
    CvExperience,
    CvEducation,
    CvLanguages,
    CvJobAreas,
    CvMatchesHeading,
    CvMatchReasons,
    CvMissingSkills,
    CvRecommendations,
    CvRequirements,
    CvOpenPosting,
    CvAnalysisDate,
    CvNoMatches,

    // Score buckets
    MatchExcellent,
    MatchVeryGood,
    MatchGood,
    MatchMedium,
    MatchLow,

    // Interview
    InterviewHeading,
    InterviewIntro,
    InterviewStart,
    InterviewLoadingQuestion,
    InterviewQuestion,
    InterviewAnswerHint,
    InterviewSubmit,
    InterviewEvaluating,
    InterviewAnswerRequired,
    InterviewResultHeading,
    InterviewFeedback,
    InterviewScore,
    InterviewRestart,
    InterviewQuestionError,
    InterviewEvaluateError,

    // Forum
    ForumHeading,
    ForumRefresh,
    ForumEmpty,
    ForumLoadError,
    ForumSignInToLike,
    ForumAdminBadge,
    ForumSolvedBadge,
    ForumSolvedBy,
    ForumShowMore,
    ForumShowLess,
    ForumLike,
    ForumUnlike,
    ForumComment,
    ForumView,
    ForumViews,
    ForumComments,
    ForumCommentsHeading,
    ForumClose,
    PostAnnouncement,
    PostQuestion,
    PostResource,
    PostTutorial,
    PostDiscussion,

    // Settings
    SettingsHeading,
    SettingsBackendUrl,
    SettingsApply,
    SettingsReset,
    SettingsUrlUpdated,
    SettingsUrlInvalid,
    SettingsSignedInAs,
    SettingsAnonymous,

    // Shared
    ConnectionError,
}

impl Text {
    pub fn tr(self) -> &'static str {
        match self {
            Text::AppTitle => "Kariyer Asistanı",
            Text::NavCvAnalyzer => "📄 CV Analizi",
            Text::NavInterview => "🎤 Mülakat Simülasyonu",
            Text::NavForum => "💬 Forum",
            Text::NavSettings => "⚙ Ayarlar",
            Text::Dismiss => "Kapat",
            Text::Retry => "Tekrar Dene",

            Text::CvHeading => "Gelişmiş CV Analizi ve İş Eşleştirme",
            Text::CvIntro => "CV'nizi yükleyin, yapay zeka becerilerinizi analiz etsin ve size en uygun iş ilanlarını bulsun.",
            Text::CvChooseFile => "Dosya Seç (PDF, DOC, DOCX)",
            Text::CvNoFileSelected => "Henüz dosya seçilmedi",
            Text::CvAnalyze => "CV'yi Analiz Et",
            Text::CvAnalyzing => "Analiz ediliyor...",
            Text::CvNewAnalysis => "Yeni Analiz",
            Text::CvFileRequired => "Lütfen bir CV dosyası seçin.",
            Text::CvUnsupportedType => "Sadece PDF, DOC ve DOCX dosyaları kabul edilir.",
            Text::CvFileTooLarge => "Dosya boyutu 16MB'dan küçük olmalıdır.",
            Text::CvFileUnreadable => "Dosya okunamadı.",
            Text::CvGenericError => "CV analizi sırasında bir hata oluştu.",
            Text::CvProfileHeading => "CV Analiz Sonuçları",
            Text::CvSkills => "Beceriler",
            Text::CvExperience => "Deneyim",
            Text::CvEducation => "Eğitim",
            Text::CvLanguages => "Diller",
            Text::CvJobAreas => "Uygun İş Alanları",
            Text::CvMatchesHeading => "En Uygun İş İlanları",
            Text::CvMatchReasons => "Eşleşme Nedenleri",
            Text::CvMissingSkills => "Eksik Beceriler",
            Text::CvRecommendations => "Öneriler",
            Text::CvRequirements => "Gereksinimler",
            Text::CvOpenPosting => "İlana Git",
            Text::CvAnalysisDate => "Analiz tarihi",
            Text::CvNoMatches => "Uygun iş ilanı bulunamadı.",

            Text::MatchExcellent => "Mükemmel Uyum",
            Text::MatchVeryGood => "Çok İyi Uyum",
            Text::MatchGood => "İyi Uyum",
            Text::MatchMedium => "Orta Uyum",
            Text::MatchLow => "Düşük Uyum",

            Text::InterviewHeading => "Mülakat Simülasyonu",
            Text::InterviewIntro => "Yapay zeka destekli mülakat sorusu alın, cevabınızı yazın ve geri bildirim alın.",
            Text::InterviewStart => "Mülakata Başla",
            Text::InterviewLoadingQuestion => "Soru hazırlanıyor...",
            Text::InterviewQuestion => "Soru",
            Text::InterviewAnswerHint => "Cevabınızı buraya yazın...",
            Text::InterviewSubmit => "Cevabı Gönder",
            Text::InterviewEvaluating => "Değerlendiriliyor...",
            Text::InterviewAnswerRequired => "Lütfen cevabınızı yazın.",
            Text::InterviewResultHeading => "Değerlendirme Sonucu",
            Text::InterviewFeedback => "Geri Bildirim",
            Text::InterviewScore => "Puan",
            Text::InterviewRestart => "Yeni Mülakat",
            Text::InterviewQuestionError => "Mülakat sorusu alınamadı.",
            Text::InterviewEvaluateError => "Cevap değerlendirilemedi.",

            Text::ForumHeading => "Forum",
            Text::ForumRefresh => "Yenile",
            Text::ForumEmpty => "Henüz gönderi yok.",
            Text::ForumLoadError => "Gönderiler yüklenemedi.",
            Text::ForumSignInToLike => "Beğenmek için giriş yapın",
            Text::ForumAdminBadge => "Yönetici",
            Text::ForumSolvedBadge => "Çözüldü",
            Text::ForumSolvedBy => "Çözen",
            Text::ForumShowMore => "Devamını oku",
            Text::ForumShowLess => "Daha az göster",
            Text::ForumLike => "Beğen",
            Text::ForumUnlike => "Beğenmekten vazgeç",
            Text::ForumComment => "Yorum Yap",
            Text::ForumView => "Görüntüle",
            Text::ForumViews => "görüntülenme",
            Text::ForumComments => "yorum",
            Text::ForumCommentsHeading => "Yorumlar",
            Text::ForumClose => "Kapat",
            Text::PostAnnouncement => "Duyuru",
            Text::PostQuestion => "Soru",
            Text::PostResource => "Kaynak",
            Text::PostTutorial => "Öğretici",
            Text::PostDiscussion => "Tartışma",

            Text::SettingsHeading => "⚙ Ayarlar",
            Text::SettingsBackendUrl => "Sunucu adresi:",
            Text::SettingsApply => "Uygula",
            Text::SettingsReset => "Varsayılana Dön",
            Text::SettingsUrlUpdated => "Sunucu adresi güncellendi",
            Text::SettingsUrlInvalid => "Geçersiz sunucu adresi",
            Text::SettingsSignedInAs => "Giriş yapan kullanıcı:",
            Text::SettingsAnonymous => "Giriş yapılmadı",

            Text::ConnectionError => "Sunucuya bağlanılamadı. Lütfen internet bağlantınızı kontrol edin.",
        }
    }
}

pub fn match_summary(total_jobs_found: u32, shown: usize) -> String {
    format!("{total_jobs_found} iş ilanı bulundu, en uygun {shown} tanesi listeleniyor.")
}

pub fn experience_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{years:.0} yıl")
    } else {
        format!("{years:.1} yıl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_wording() {
        assert_eq!(
            match_summary(50, 3),
            "50 iş ilanı bulundu, en uygun 3 tanesi listeleniyor."
        );
    }

    #[test]
    fn experience_drops_trailing_zero() {
        assert_eq!(experience_years(4.0), "4 yıl");
        assert_eq!(experience_years(2.5), "2.5 yıl");
    }
}
