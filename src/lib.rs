//! # Policy QnA Rank
//!
//! 按关键词检索民愿政策问答，并通过三个阶段选出最相关的一条记录
//!
//! ## 架构设计
//!
//! ### ① 接口层（Clients）
//! - `clients/` - 远程列表 / 详情接口，`QnaApi` 是唯一的接缝
//! - `PolicyQnaClient` - 基于 reqwest 的实现
//! - `MockQnaApi` - 可编排的假实现
//!
//! ### ② 业务能力层（Services）
//! - `similarity` - 分词 + TF-IDF 打分
//! - `SearchService` - 搜索并保留前 3 条候选
//! - `EnrichService` - 并发查询详情并重新打分
//! - `select_best` - 取最高分
//!
//! ### ③ 流程层（Workflow）
//! - `SessionState` - 阶段之间共享的会话状态
//! - `QnaFlow` - 流程编排（search → enrich → select_best）
//!
//! ### ④ 应用层
//! - `App` - 配置 → 客户端 → 流程

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{MockQnaApi, PolicyQnaClient, QnaApi};
pub use config::Config;
pub use error::{AppError, AppResult, PreconditionError, UpstreamError};
pub use models::{Candidate, EnrichedRecord, PageOptions, QnaDetail, QnaKey, QnaSummary};
pub use workflow::{QnaFlow, SessionState};
