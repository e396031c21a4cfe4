//! ZE 题库客户端
//!
//! 负责构造 ZE 接口请求、解析响应并归一化为 [`Answer`]

use super::SearchProvider;
use crate::config::Config;
use crate::error::SearchError;
use crate::models::{get_type_int, Answer, SearchRequest};
use crate::utils::logging::truncate_text;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tracing::debug;

/// ZE 题库默认地址
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/query";

/// 单次请求超时时间
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// ZE 接口请求体
#[derive(Debug, Clone, Serialize)]
struct ZeRequestBody<'a> {
    title: &'a str,
    options: &'a [String],
    #[serde(rename = "type")]
    question_type: i32,
}

impl<'a> From<&'a SearchRequest> for ZeRequestBody<'a> {
    fn from(req: &'a SearchRequest) -> Self {
        Self {
            title: &req.question,
            options: &req.options,
            question_type: get_type_int(req.question_type),
        }
    }
}

/// ZE 接口响应中的 data 字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ZeResponseData {
    /// 原始题目
    #[serde(default, alias = "Question", deserialize_with = "null_as_default")]
    pub question: String,
    /// 答案文本
    #[serde(default, alias = "Answer", deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(default, alias = "IsAI", alias = "Is_ai", alias = "IS_AI", deserialize_with = "null_as_default")]
    pub is_ai: bool,
}

/// ZE 接口响应
///
/// 字段名兼容首字母大写等常见写法
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ZeResponse {
    /// 0 表示失败或未找到
    #[serde(default, alias = "Code", alias = "CODE", deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, alias = "Message", alias = "MESSAGE", deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, alias = "Data", alias = "DATA", deserialize_with = "null_as_default")]
    pub data: ZeResponseData,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 将 ZE 响应归一化为答案
///
/// code 为 0 时返回携带题库原始 message 的错误；
/// answer 为空不是错误，返回空答案
pub fn normalize(res: ZeResponse) -> Result<Answer, SearchError> {
    if res.code == 0 {
        return Err(SearchError::Provider(res.message));
    }

    let mut answer = Answer::new();
    if !res.data.answer.is_empty() {
        answer.push(vec![res.data.answer]);
    }
    Ok(answer)
}

/// 解析响应体并归一化
///
/// 响应体为 `null` 或字符串、数字等标量时按解析失败处理
pub fn parse_response(body: &[u8]) -> Result<Answer, SearchError> {
    let res: ZeResponse = serde_json::from_slice(body)?;
    normalize(res)
}

/// ZE 题库客户端
#[derive(Debug, Clone)]
pub struct ZeClient {
    enabled: bool,
    endpoint: String,
    timeout: Duration,
}

impl Default for ZeClient {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ZeClient {
    /// 创建新的 ZE 客户端
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// 从配置创建 ZE 客户端
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ze_enabled).with_endpoint(config.ze_api_url.clone())
    }

    /// 指定接口地址
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// 指定请求超时
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // 每次调用新建一个 HTTP 客户端
    fn http_client(&self) -> Result<reqwest::Client, SearchError> {
        Ok(reqwest::Client::builder().timeout(self.timeout).build()?)
    }
}

#[async_trait]
impl SearchProvider for ZeClient {
    fn name(&self) -> &str {
        "ze"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn search_answer(&self, req: &SearchRequest) -> Result<Answer, SearchError> {
        if !self.enabled {
            return Ok(Answer::new());
        }

        debug!(
            "ZE 题库搜索: {} (题型: {}, 选项数: {})",
            truncate_text(&req.question, 40),
            req.question_type,
            req.options.len()
        );

        let client = self.http_client()?;
        let resp = client
            .post(&self.endpoint)
            .json(&ZeRequestBody::from(req))
            .send()
            .await?;
        let body = resp.bytes().await?;

        let answer = parse_response(&body)?;
        debug!("ZE 题库返回 {} 组答案", answer.len());

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;
    use crate::utils::logging;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fill_in_request() -> SearchRequest {
        SearchRequest::new("2+2=?", Vec::new(), QuestionType::Completion)
    }

    fn client_for(server: &MockServer) -> ZeClient {
        ZeClient::new(true).with_endpoint(format!("{}/query", server.uri()))
    }

    #[test]
    fn test_normalize_answer() {
        let res = ZeResponse {
            code: 1,
            message: "ok".to_string(),
            data: ZeResponseData {
                question: "2+2=?".to_string(),
                answer: "4".to_string(),
                is_ai: false,
            },
        };
        assert_eq!(normalize(res).unwrap(), vec![vec!["4".to_string()]]);
    }

    #[test]
    fn test_normalize_empty_answer_is_not_error() {
        let res = ZeResponse {
            code: 200,
            ..Default::default()
        };
        assert!(normalize(res).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_code_zero_surfaces_message() {
        let res = ZeResponse {
            code: 0,
            message: "not found".to_string(),
            data: ZeResponseData {
                answer: "ignored".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(
            normalize(res),
            Err(SearchError::Provider("not found".to_string()))
        );
    }

    #[test]
    fn test_negative_code_counts_as_success() {
        let answer = parse_response(br#"{"code":-1,"message":"","data":{"answer":"A"}}"#).unwrap();
        assert_eq!(answer, vec![vec!["A".to_string()]]);
    }

    #[test]
    fn test_parse_response_tolerates_missing_and_null_fields() {
        assert_eq!(
            parse_response(br#"{"code":0,"message":"not found"}"#),
            Err(SearchError::Provider("not found".to_string()))
        );
        assert!(parse_response(br#"{"code":1,"message":null,"data":null}"#)
            .unwrap()
            .is_empty());
        assert_eq!(
            parse_response(br#"{"message":"no code"}"#),
            Err(SearchError::Provider("no code".to_string()))
        );
    }

    #[test]
    fn test_parse_response_accepts_capitalized_keys() {
        assert_eq!(
            parse_response(br#"{"Code":1,"Message":"ok","Data":{"Answer":"4","IsAI":true}}"#),
            Ok(vec![vec!["4".to_string()]])
        );
        assert_eq!(
            parse_response(r#"{"CODE":0,"MESSAGE":"题目不存在"}"#.as_bytes()),
            Err(SearchError::Provider("题目不存在".to_string()))
        );

        let res: ZeResponse =
            serde_json::from_str(r#"{"Code":2,"Data":{"Question":"q","Answer":"a","IsAI":true}}"#)
                .unwrap();
        assert!(res.data.is_ai);
        assert_eq!(res.data.question, "q");
    }

    #[test]
    fn test_parse_response_rejects_malformed_body() {
        assert_eq!(parse_response(b"<html>502</html>"), Err(SearchError::ParseJson));
        assert_eq!(parse_response(b""), Err(SearchError::ParseJson));
        assert_eq!(parse_response(b"null"), Err(SearchError::ParseJson));
        assert_eq!(parse_response(br#""ok""#), Err(SearchError::ParseJson));
        assert_eq!(
            parse_response(br#"{"code":"one","message":"ok"}"#),
            Err(SearchError::ParseJson)
        );
    }

    #[test]
    fn test_request_body_shape() {
        let req = SearchRequest::new(
            "下列哪项正确",
            vec!["A".to_string(), "B".to_string()],
            QuestionType::Multiple,
        );
        let body = serde_json::to_value(ZeRequestBody::from(&req)).unwrap();
        assert_eq!(
            body,
            json!({ "title": "下列哪项正确", "options": ["A", "B"], "type": 1 })
        );
    }

    #[test]
    fn test_client_defaults() {
        let client = ZeClient::default();
        assert!(client.is_enabled());
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.timeout(), Duration::from_secs(3));
        assert_eq!(client.name(), "ze");
    }

    #[tokio::test]
    async fn test_disabled_client_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ZeClient::new(false).with_endpoint(format!("{}/query", server.uri()));
        let answer = client.search_answer(&fill_in_request()).await.unwrap();
        assert!(answer.is_empty());
    }

    #[tokio::test]
    async fn test_search_answer_found() {
        logging::init_test();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .and(body_json(json!({ "title": "2+2=?", "options": [], "type": 2 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 1,
                "message": "ok",
                "data": { "answer": "4" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let answer = client.search_answer(&fill_in_request()).await.unwrap();
        assert_eq!(answer, vec![vec!["4".to_string()]]);
    }

    #[tokio::test]
    async fn test_search_answer_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "code": 0, "message": "not found" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .search_answer(&fill_in_request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "not found");
    }

    #[tokio::test]
    async fn test_search_answer_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/query"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .search_answer(&fill_in_request())
            .await
            .unwrap_err();
        assert_eq!(err, SearchError::ParseJson);
    }

    #[tokio::test]
    async fn test_search_answer_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "code": 1, "data": { "answer": "4" } }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).with_timeout(Duration::from_millis(200));
        let err = client
            .search_answer(&fill_in_request())
            .await
            .unwrap_err();
        assert_eq!(err, SearchError::Request);
    }
}
