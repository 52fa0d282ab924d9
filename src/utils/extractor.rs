//! 路径参数提取器
//!
//! 在进入服务层之前校验路径参数，不合法时直接返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{1,128}$").expect("Invalid slug regex"));

fn bad_request(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 解析正整数 ID
pub fn parse_positive_id(raw: &str) -> Result<i64, String> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("无效的 ID: '{raw}'")),
    }
}

/// 校验 slug：仅允许字母、数字和连字符，长度 1 到 128
pub fn validate_slug(raw: &str) -> Result<(), String> {
    if SLUG_RE.is_match(raw) {
        Ok(())
    } else {
        Err(format!("无效的链接标识: '{raw}'"))
    }
}

/// 路径中的 `{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(parse_positive_id(raw).map(SafeIDI64).map_err(bad_request))
    }
}

/// 路径中的 `{slug}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeSlug(pub String);

impl FromRequest for SafeSlug {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("slug").unwrap_or_default();
        ready(
            validate_slug(raw)
                .map(|_| SafeSlug(raw.to_string()))
                .map_err(bad_request),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    async fn echo_id(id: SafeIDI64) -> HttpResponse {
        HttpResponse::Ok().body(id.0.to_string())
    }

    async fn echo_slug(slug: SafeSlug) -> HttpResponse {
        HttpResponse::Ok().body(slug.0)
    }

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42"), Ok(42));
        assert!(parse_positive_id("0").is_err());
        assert!(parse_positive_id("-3").is_err());
        assert!(parse_positive_id("abc").is_err());
        assert!(parse_positive_id("").is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("demo-cliente-slug").is_ok());
        assert!(validate_slug("ABC123").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("under_score").is_err());
        assert!(validate_slug(&"a".repeat(129)).is_err());
    }

    #[actix_web::test]
    async fn test_id_extractor() {
        let app = actix_test::init_service(App::new().route("/items/{id}", web::get().to(echo_id))).await;

        let req = actix_test::TestRequest::get().uri("/items/17").to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "17");

        let req = actix_test::TestRequest::get().uri("/items/zero").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_slug_extractor() {
        let app =
            actix_test::init_service(App::new().route("/client/{slug}", web::get().to(echo_slug))).await;

        let req = actix_test::TestRequest::get()
            .uri("/client/demo-cliente-slug")
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "demo-cliente-slug");

        let req = actix_test::TestRequest::get().uri("/client/bad%20slug").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
