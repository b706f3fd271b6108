use lambda_http::{
    http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    Body, Error, Response,
};

pub fn ok(body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET,OPTIONS")
        .body(Body::Text(body))?)
}

pub fn bad_request(body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(400)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET,OPTIONS")
        .body(Body::Text(body))?)
}

pub fn server_error(body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(500)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET,OPTIONS")
        .body(Body::Text(body))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_carries_the_cors_header_set() {
        let response = ok("https://example.com".to_string()).unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET,OPTIONS"
        );
    }

    #[test]
    fn bad_request_keeps_the_body_verbatim() {
        let response = bad_request("Email parameter missing".to_string()).unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.body(),
            &Body::Text("Email parameter missing".to_string())
        );
    }

    #[test]
    fn server_error_is_a_500() {
        let response = server_error("boom".to_string()).unwrap();
        assert_eq!(response.status(), 500);
    }
}
