mod demo;
mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::bail;
use serde::de::DeserializeOwned;

use crate::config::MicroCmsConfig;

use self::{requests::*, responses::*};

const DEFAULT_PAGE_SIZE: usize = 10;
const MICROCMS_API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_post).service(view_post);
}

/// Article source for the marketing pages. Reads from the hosted CMS when
/// credentials are present and falls back to the built-in demo articles on
/// any miss, so the site never renders an empty blog.
#[derive(Clone)]
pub struct BlogFeed {
    config: MicroCmsConfig,
    client: reqwest::Client,
}

impl BlogFeed {
    pub fn new(config: MicroCmsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn list(&self, limit: usize, offset: usize) -> BlogList {
        match self.fetch_list(limit, offset).await {
            Some(list) => list,
            None => demo::demo_list(limit, offset),
        }
    }

    pub async fn get(&self, id: &str) -> Option<BlogPost> {
        match self.fetch_one(id).await {
            Some(post) => Some(post),
            None => demo::demo_post(id),
        }
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.config.service_domain, &self.config.api_key) {
            (Some(domain), Some(key)) => Some((domain.as_str(), key.as_str())),
            _ => None,
        }
    }

    async fn fetch_list(&self, limit: usize, offset: usize) -> Option<BlogList> {
        let (domain, key) = self.credentials()?;
        let url = format!("https://{}.microcms.io/api/v1/blog", domain);
        let req = self
            .client
            .get(&url)
            .header(MICROCMS_API_KEY_HEADER, key)
            .query(&[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("orders", "-publishedAt".to_string()),
            ]);
        self.fetch(req).await
    }

    async fn fetch_one(&self, id: &str) -> Option<BlogPost> {
        let (domain, key) = self.credentials()?;
        let url = format!("https://{}.microcms.io/api/v1/blog/{}", domain, id);
        let req = self.client.get(&url).header(MICROCMS_API_KEY_HEADER, key);
        self.fetch(req).await
    }

    async fn fetch<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Option<T> {
        let res = match req.send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::warn!("microCMS fetch error: {}", err);
                return None;
            }
        };
        if !res.status().is_success() {
            tracing::warn!("microCMS API error: {}", res.status());
            return None;
        }
        match res.json().await {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::warn!("microCMS fetch error: {}", err);
                None
            }
        }
    }
}

#[post("/list_post")]
async fn list_post(
    feed: web::Data<BlogFeed>,
    info: web::Json<ListPostRequest>,
) -> impl Responder {
    let response = match list_post_impl(feed, info).await {
        Ok(response) => response,
        Err(err) => ListPostResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

async fn list_post_impl(
    feed: web::Data<BlogFeed>,
    info: web::Json<ListPostRequest>,
) -> anyhow::Result<ListPostResponse> {
    let info = info.into_inner();
    let limit = info.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = info.offset.unwrap_or(0);

    let list = feed.list(limit, offset).await;
    Ok(ListPostResponse {
        success: true,
        err: "".to_string(),
        contents: list.contents,
        total_count: list.total_count,
        offset: list.offset,
        limit: list.limit,
    })
}

#[post("/view_post")]
async fn view_post(
    feed: web::Data<BlogFeed>,
    info: web::Json<ViewPostRequest>,
) -> impl Responder {
    let response = match view_post_impl(feed, info).await {
        Ok(response) => response,
        Err(err) => ViewPostResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

async fn view_post_impl(
    feed: web::Data<BlogFeed>,
    info: web::Json<ViewPostRequest>,
) -> anyhow::Result<ViewPostResponse> {
    let info = info.into_inner();

    let post = match feed.get(&info.id).await {
        Some(post) => post,
        None => bail!("No such post"),
    };
    Ok(ViewPostResponse {
        success: true,
        err: "".to_string(),
        post: Some(post),
    })
}
