//! UI 接口
//!
//! 控制器只发出单向通知，不关心返回值

use tracing::info;

use crate::game::GameResult;

/// UI 管理器
pub trait UiManager {
    /// 显示主菜单
    fn show_menu(&mut self);

    /// 更新回合指示
    fn update_turn_indicator(&mut self, message: &str);

    /// 显示游戏结束界面
    fn show_game_over_screen(&mut self, result: &GameResult);
}

/// 只输出日志的 UI，用于无界面运行
#[derive(Debug, Default)]
pub struct LogUi;

impl UiManager for LogUi {
    fn show_menu(&mut self) {
        info!("UI: 显示主菜单");
    }

    fn update_turn_indicator(&mut self, message: &str) {
        info!("UI: 回合指示更新 - {}", message);
    }

    fn show_game_over_screen(&mut self, result: &GameResult) {
        info!("UI: 游戏结束 - {} 获胜", result.winner());
    }
}
