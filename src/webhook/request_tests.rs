//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

fn webhook_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/services/T000/B000/XXXX").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_creates_bodyless_post() {
        let req = HttpRequest::post(webhook_url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, webhook_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn json_body_declares_type_and_length() {
        let body = br#"{"text":"hello"}"#.to_vec();
        let req = HttpRequest::post(webhook_url()).with_json_body(body.clone());

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(req.headers.get(http::header::CONTENT_LENGTH).unwrap(), "16");
        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn content_length_counts_bytes_not_characters() {
        let body = "{\"text\":\"🚀\"}".as_bytes().to_vec();
        let expected = body.len().to_string();
        let req = HttpRequest::post(webhook_url()).with_json_body(body);

        assert_eq!(
            req.headers.get(http::header::CONTENT_LENGTH).unwrap(),
            expected.as_str()
        );
        assert_ne!(expected, "{\"text\":\"🚀\"}".chars().count().to_string());
    }

    #[test]
    fn with_header_appends_values() {
        let req = HttpRequest::post(webhook_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_covers_2xx_only() {
        for code in [200, 201, 204, 299] {
            let status = http::StatusCode::from_u16(code).unwrap();
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_success(), "Expected {code} to be success");
        }

        for code in [100, 301, 400, 404, 500, 503] {
            let status = http::StatusCode::from_u16(code).unwrap();
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_success(), "Expected {code} to be failure");
        }
    }

    #[test]
    fn body_text_decodes_utf8() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), b"ok".to_vec());
        assert_eq!(resp.body_text(), "ok");
    }

    #[test]
    fn body_text_replaces_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![b'o', 0xFF, b'k'],
        );
        assert_eq!(resp.body_text(), "o\u{FFFD}k");
    }
}
