use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 题型枚举
///
/// 判别值即题库接口使用的整数编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 单选题
    #[default]
    Single = 0,
    /// 多选题
    Multiple = 1,
    /// 填空题
    Completion = 2,
    /// 判断题
    Judgement = 3,
    /// 简答题
    ShortAnswer = 4,
    /// 其他题型
    Other = 5,
}

impl QuestionType {
    /// 获取题型代码
    pub fn code(self) -> i32 {
        self as i32
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::Single => "单选题",
            QuestionType::Multiple => "多选题",
            QuestionType::Completion => "填空题",
            QuestionType::Judgement => "判断题",
            QuestionType::ShortAnswer => "简答题",
            QuestionType::Other => "其他",
        }
    }

    /// 从代码解析题型
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(QuestionType::Single),
            1 => Some(QuestionType::Multiple),
            2 => Some(QuestionType::Completion),
            3 => Some(QuestionType::Judgement),
            4 => Some(QuestionType::ShortAnswer),
            5 => Some(QuestionType::Other),
            _ => None,
        }
    }

    /// 尝试从字符串解析题型（精确匹配）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "单选题" | "单选" | "single" | "single-choice" | "single_choice" => {
                Some(QuestionType::Single)
            }
            "多选题" | "多选" | "multiple" | "multi-choice" | "multiple_choice" => {
                Some(QuestionType::Multiple)
            }
            "填空题" | "填空" | "completion" | "fill-in" | "fill_in" => {
                Some(QuestionType::Completion)
            }
            "判断题" | "判断" | "judgement" | "judgment" | "true-false" => {
                Some(QuestionType::Judgement)
            }
            "简答题" | "简答" | "问答题" | "short_answer" | "short-answer" => {
                Some(QuestionType::ShortAnswer)
            }
            "其他" | "other" => Some(QuestionType::Other),
            _ => None,
        }
    }

    /// 智能查找题型（支持模糊匹配），无法识别时归为 Other
    pub fn find(s: &str) -> Self {
        if let Some(t) = Self::from_str(s) {
            return t;
        }

        let s_lower = s.to_lowercase();
        if s_lower.contains("多选") || s_lower.contains("multi") {
            return QuestionType::Multiple;
        }
        if s_lower.contains("单选") || s_lower.contains("single") {
            return QuestionType::Single;
        }
        if s_lower.contains("填空") || s_lower.contains("fill") {
            return QuestionType::Completion;
        }
        if s_lower.contains("判断") || s_lower.contains("judg") {
            return QuestionType::Judgement;
        }
        if s_lower.contains("简答") || s_lower.contains("问答") {
            return QuestionType::ShortAnswer;
        }

        QuestionType::Other
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题型转换为题库接口的整数编码
pub fn get_type_int(t: QuestionType) -> i32 {
    t.code()
}

// type 既可能是整数编码，也可能是题型名称
impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TypeVisitor;

        impl<'de> Visitor<'de> for TypeVisitor {
            type Value = QuestionType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a question type code or name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(QuestionType::find(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                QuestionType::from_code(value)
                    .ok_or_else(|| E::custom(format!("unknown question type code: {}", value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let code = i64::try_from(value)
                    .map_err(|_| E::custom(format!("unknown question type code: {}", value)))?;
                self.visit_i64(code)
            }
        }

        deserializer.deserialize_any(TypeVisitor)
    }
}
