//! Requests against the admin REST API.
//!
//! Every call goes through `finish_read` or `finish_write`, which turn the raw
//! response into `Result<_, ApiError>` using the envelope rules of the
//! contracts crate. Failures are logged here once; callers only decide how to
//! show them.

use super::api_utils::{api_url, with_query};
use contracts::shared::{
    error_from_status, parse_ack, parse_payload, Ack, ApiError, ListQuery, Relation,
    RelationRequest, Resource, UpdateVerb,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

async fn finish_read<T: DeserializeOwned>(
    url: &str,
    sent: Result<Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let result = match sent {
        Ok(response) => {
            let ok = response.ok();
            let (status, body) = read_body(response).await?;
            if ok {
                parse_payload::<T>(&body)
            } else {
                Err(error_from_status(status, &body))
            }
        }
        Err(e) => Err(ApiError::Network(e.to_string())),
    };
    if let Err(e) = &result {
        log::error!("GET {} failed: {}", url, e);
    }
    result
}

async fn finish_write(
    method: &str,
    url: &str,
    sent: Result<Response, gloo_net::Error>,
) -> Result<Ack, ApiError> {
    let result = match sent {
        Ok(response) => {
            let ok = response.ok();
            let (status, body) = read_body(response).await?;
            if ok {
                parse_ack(&body)
            } else {
                Err(error_from_status(status, &body))
            }
        }
        Err(e) => Err(ApiError::Network(e.to_string())),
    };
    match &result {
        Ok(_) => log::debug!("{} {} ok", method, url),
        Err(e) => log::error!("{} {} failed: {}", method, url, e),
    }
    result
}

async fn send_json<B: Serialize>(
    method: &str,
    builder: RequestBuilder,
    url: &str,
    body: &B,
) -> Result<Ack, ApiError> {
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    finish_write(method, url, request.send().await).await
}

/// `GET /api/admin/<resource>?<query>`
pub async fn get_list<T: DeserializeOwned>(
    resource: Resource,
    query: &ListQuery,
) -> Result<Vec<T>, ApiError> {
    let url = api_url(&with_query(&resource.collection(), query));
    finish_read(&url, Request::get(&url).send().await).await
}

/// `GET /api/admin/<resource>/<id>`
pub async fn get_one<T: DeserializeOwned>(resource: Resource, id: i64) -> Result<T, ApiError> {
    let url = api_url(&resource.item(id));
    finish_read(&url, Request::get(&url).send().await).await
}

/// `GET /api/admin/<resource>/<id>/<relation>`
pub async fn get_related<T: DeserializeOwned>(
    resource: Resource,
    id: i64,
    relation: Relation,
) -> Result<Vec<T>, ApiError> {
    let url = api_url(&resource.relation(id, relation));
    finish_read(&url, Request::get(&url).send().await).await
}

/// `POST /api/admin/<resource>`
pub async fn create<B: Serialize>(resource: Resource, body: &B) -> Result<Ack, ApiError> {
    let url = api_url(&resource.collection());
    send_json("POST", Request::post(&url), &url, body).await
}

/// `PATCH` or `PUT /api/admin/<resource>/<id>`, whichever the resource expects.
pub async fn update<B: Serialize>(resource: Resource, id: i64, body: &B) -> Result<Ack, ApiError> {
    let url = api_url(&resource.item(id));
    match resource.update_verb() {
        UpdateVerb::Patch => send_json("PATCH", Request::patch(&url), &url, body).await,
        UpdateVerb::Put => send_json("PUT", Request::put(&url), &url, body).await,
    }
}

/// Create when `id` is `None`, update otherwise.
pub async fn save<B: Serialize>(
    resource: Resource,
    id: Option<i64>,
    body: &B,
) -> Result<Ack, ApiError> {
    match id {
        Some(id) => update(resource, id, body).await,
        None => create(resource, body).await,
    }
}

/// `DELETE /api/admin/<resource>/<id>`
pub async fn delete(resource: Resource, id: i64) -> Result<Ack, ApiError> {
    let url = api_url(&resource.item(id));
    finish_write("DELETE", &url, Request::delete(&url).send().await).await
}

/// `POST /api/admin/<resource>/<id>/<relation>` with `{relatedIds}`
pub async fn associate(
    resource: Resource,
    id: i64,
    relation: Relation,
    related_ids: Vec<i64>,
) -> Result<Ack, ApiError> {
    let url = api_url(&resource.relation(id, relation));
    let body = RelationRequest { related_ids };
    send_json("POST", Request::post(&url), &url, &body).await
}

/// `DELETE /api/admin/<resource>/<id>/<relation>/<relatedId>`
pub async fn disassociate(
    resource: Resource,
    id: i64,
    relation: Relation,
    related_id: i64,
) -> Result<Ack, ApiError> {
    let url = api_url(&resource.relation_item(id, relation, related_id));
    finish_write("DELETE", &url, Request::delete(&url).send().await).await
}
