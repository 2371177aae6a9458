use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PreconditionError;

/// 日期参数格式（YYYYMMDD）
pub const DATE_FORMAT: &str = "%Y%m%d";

/// 列表接口的分页与过滤参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageOptions {
    /// 起始序号（从1开始）
    pub first_index: u32,
    /// 每页条数
    pub record_count_per_page: u32,
    /// 记录类型过滤
    #[serde(rename = "type")]
    pub qna_type: u32,
    /// 检索类型过滤
    pub search_type: u32,
    /// 登记日期下限（含）
    pub reg_from: String,
    /// 登记日期上限（含）
    pub reg_to: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            first_index: 1,
            record_count_per_page: 10,
            qna_type: 1,
            search_type: 1,
            reg_from: "20220101".to_string(),
            reg_to: chrono::Local::now().format(DATE_FORMAT).to_string(),
        }
    }
}

impl PageOptions {
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.record_count_per_page = size;
        self
    }

    pub fn with_date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.reg_from = from.into();
        self.reg_to = to.into();
        self
    }

    /// 校验日期范围：两端都是合法日期，且起始不晚于结束
    pub fn validate(&self) -> Result<(), PreconditionError> {
        let from = parse_date("regFrom", &self.reg_from)?;
        let to = parse_date("regTo", &self.reg_to)?;

        if from > to {
            return Err(PreconditionError::InvalidDateRange {
                field: "regFrom".to_string(),
                value: self.reg_from.clone(),
            });
        }

        Ok(())
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, PreconditionError> {
    // chrono 允许不补零的数字，这里要求严格 8 位
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PreconditionError::InvalidDateRange {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| PreconditionError::InvalidDateRange {
        field: field.to_string(),
        value: value.to_string(),
    })
}
