use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct BlogImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: String,
    pub name: String,
}

// Post shape shared with the upstream CMS, so these fields keep its
// camelCase names on the wire.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<BlogImage>,
    pub category: BlogCategory,
    pub published_at: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogList {
    pub contents: Vec<BlogPost>,
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostResponse {
    pub success: bool,
    pub err: String,
    pub contents: Vec<BlogPost>,
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Default, Serialize)]
pub struct ViewPostResponse {
    pub success: bool,
    pub err: String,
    pub post: Option<BlogPost>,
}

crate::impl_err_response! {
    ListPostResponse,
    ViewPostResponse,
}
