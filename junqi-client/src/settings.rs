//! 游戏设置模块
//!
//! 提供设置数据结构和持久化。设置在创建控制器时传入一次，之后只读。

use std::path::{Path, PathBuf};

use junqi_board::Side;
use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::error::SettingsError;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// tracing 过滤指令中的级别名
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 人机对战；关闭时为同一设备双人轮流
    pub single_player: bool,
    /// 玩家阵营，未设置时随机分配
    pub player_side: Option<Side>,
    /// 进入布阵阶段后立即完成布阵
    pub auto_complete_setup: bool,
    /// 棋盘布局
    pub layout: BoardLayout,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            single_player: true,
            player_side: None,
            auto_complete_setup: true,
            layout: BoardLayout::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("junqi");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    ///
    /// 不输出日志，日志系统可能还没初始化。文件不存在时返回 `None`。
    pub fn load() -> Result<Option<Self>, SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        Self::read(&path)
    }

    /// 读取设置文件，文件不存在时返回 `None`
    pub fn read(path: &Path) -> Result<Option<Self>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    /// 从指定文件加载设置，失败时使用默认设置
    pub fn load_or_default(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(settings)) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Ok(None) => {
                tracing::info!("设置文件不存在，使用默认设置");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存设置到默认位置
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
