//! 无界面运行一局演示对局
//!
//! 用日志输出 UI 通知，AI 和规则检查都是最简单的占位实现

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use junqi_board::{BoardGraph, Coordinate, Side};
use junqi_client::game::{AiPlayer, MoveToken, PhaseController, PhaseEvent, RuleChecker};
use junqi_client::settings::GameSettings;
use junqi_client::ui::LogUi;
use junqi_client::GamePhase;
use rand::seq::IteratorRandom;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 演示对局的最大步数
const MAX_MOVES: usize = 6;

/// 随机选一条己方半场的边
struct RandomWalkAi;

impl AiPlayer for RandomWalkAi {
    fn begin_turn(&mut self, board: Arc<BoardGraph>, side: Side) -> Option<MoveToken> {
        random_move(&board, side)
    }
}

/// 走满步数即判定胜负
struct MoveLimit {
    moves: usize,
}

impl RuleChecker for MoveLimit {
    fn check_win_condition(&mut self) -> bool {
        self.moves += 1;
        self.moves >= MAX_MOVES
    }
}

fn random_move(board: &BoardGraph, side: Side) -> Option<MoveToken> {
    let mut rng = rand::thread_rng();
    let from = board
        .cells()
        .filter(|c| c.coordinate().side() == side && !c.neighbors().is_empty())
        .choose(&mut rng)?;
    let to: Coordinate = *from.neighbors().iter().choose(&mut rng)?;
    Some(MoveToken::new(from.coordinate(), to))
}

fn main() -> Result<()> {
    // 先读设置拿到日志级别，加载结果等日志初始化后再输出
    let loaded = match std::env::args().nth(1) {
        Some(path) => Ok(Some(GameSettings::load_from(Path::new(&path))?)),
        None => GameSettings::load(),
    };
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => GameSettings::default(),
    };

    // 初始化日志
    let level = settings.log_level.as_directive();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("junqi_client={level}").parse()?)
                .add_directive(format!("junqi_board={level}").parse()?),
        )
        .init();

    info!("军棋客户端启动中...");
    match loaded {
        Ok(Some(_)) => info!("已加载设置"),
        Ok(None) => info!("设置文件不存在，使用默认设置"),
        Err(e) => warn!("无法读取设置: {}，使用默认设置", e),
    }

    let mut controller = PhaseController::builder(settings)
        .ui(LogUi)
        .rule_checker(MoveLimit { moves: 0 })
        .ai(RandomWalkAi)
        .build()?;

    controller.dispatch(PhaseEvent::new_game())?;

    while controller.phase() != GamePhase::GameOver {
        let event = match controller.phase() {
            GamePhase::PlayerTurn => {
                let board = controller.board().ok_or_else(|| anyhow::anyhow!("棋盘未构建"))?;
                let side = controller
                    .session()
                    .map(|s| s.side_to_move)
                    .unwrap_or(Side::Red);
                let token = random_move(&board, side)
                    .ok_or_else(|| anyhow::anyhow!("{} 没有可走的格点", side))?;
                PhaseEvent::MoveSelected(token)
            }
            GamePhase::MoveExecution => {
                let token = controller
                    .session()
                    .and_then(|s| s.pending_move)
                    .map(|p| p.token)
                    .ok_or_else(|| anyhow::anyhow!("没有执行中的走法"))?;
                PhaseEvent::MoveApplied(token)
            }
            phase => anyhow::bail!("演示对局停在 {} 阶段", phase),
        };
        controller.dispatch(event)?;
    }

    if let Some(session) = controller.session() {
        info!("对局结束，共 {} 步", session.move_count);
    }
    Ok(())
}
