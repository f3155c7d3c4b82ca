use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobPosting,
    pub match_score: u32,
    #[serde(default)]
    pub match_reasons: Vec<String>,
    #[serde(default)]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

/// Response of `/advanced_cv_job_search`. `top_matches` arrives already
/// ranked and is displayed in server order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub cv_analysis: CvAnalysis,
    #[serde(default)]
    pub job_areas: Vec<String>,
    #[serde(default)]
    pub top_matches: Vec<JobMatch>,
    #[serde(default)]
    pub total_jobs_found: u32,
    #[serde(default)]
    pub analysis_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluateAnswerInput {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub feedback: String,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Announcement,
    Question,
    Resource,
    Tutorial,
    #[default]
    #[serde(other)]
    Discussion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub comments_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub post_type: PostType,
    #[serde(default)]
    pub is_admin_post: bool,
    #[serde(default)]
    pub is_solved: bool,
    #[serde(default)]
    pub solved_by: Option<String>,
    #[serde(default)]
    pub solved_at: Option<String>,
    #[serde(default)]
    pub user_liked: bool,
}

/// The forum listing is served either as a bare array or wrapped in `posts`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ForumPostsResponse {
    Wrapped { posts: Vec<ForumPost> },
    Bare(Vec<ForumPost>),
}

impl ForumPostsResponse {
    pub fn into_posts(self) -> Vec<ForumPost> {
        match self {
            Self::Wrapped { posts } | Self::Bare(posts) => posts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserResponse {
    Wrapped { user: User },
    Bare(User),
}

impl UserResponse {
    pub fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}
