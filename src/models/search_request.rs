use super::question_type::QuestionType;
use serde::{Deserialize, Serialize};

/// 搜题请求
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// 题干
    pub question: String,
    /// 选项，可以为空
    #[serde(default)]
    pub options: Vec<String>,
    /// 题型
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
}

impl SearchRequest {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            question_type,
        }
    }
}

/// 归一化后的答案
///
/// 外层每一项是一个答案组，内层是该组的等价答案；为空表示没有找到答案
pub type Answer = Vec<Vec<String>>;
