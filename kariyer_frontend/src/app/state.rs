use crate::i18n::Text;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    CvAnalyzer,
    Interview,
    Forum,
    Settings,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::CvAnalyzer,
        ViewState::Interview,
        ViewState::Forum,
        ViewState::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewState::CvAnalyzer => Text::NavCvAnalyzer.tr(),
            ViewState::Interview => Text::NavInterview.tr(),
            ViewState::Forum => Text::NavForum.tr(),
            ViewState::Settings => Text::NavSettings.tr(),
        }
    }
}
