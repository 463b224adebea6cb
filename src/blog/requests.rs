use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListPostRequest {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Deserialize)]
pub struct ViewPostRequest {
    pub id: String,
}
