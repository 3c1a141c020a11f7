//! 阶段控制器
//!
//! 游戏阶段的唯一来源。外部事件经由 `dispatch` 进入单消费者队列，
//! 进入动作产生的后续事件排在队尾，当前切换完成后再处理，不会重入。
//!
//! 控制器不判断走法是否合法，也不判断胜负：前者由外部在发出
//! `MoveSelected` 之前完成，后者只读取 `RuleChecker` 给出的结果。

use std::collections::VecDeque;
use std::sync::Arc;

use junqi_board::{BoardGraph, BoardTopology, Side};
use rand::Rng;
use tracing::{debug, error, info, warn};

use super::{
    AiPlayer, GameMode, GameResult, GameSession, MoveToken, PendingMove, PhaseEvent,
    PhaseTransition, RuleChecker,
};
use crate::error::ControllerError;
use crate::settings::GameSettings;
use crate::ui::UiManager;
use crate::GamePhase;

/// 棋盘构建函数
pub type BoardBuilder = fn() -> junqi_board::Result<BoardGraph>;

/// 玩家回合提示
pub const PLAYER_TURN_MESSAGE: &str = "Player Turn";

/// AI 回合提示
pub const AI_TURN_MESSAGE: &str = "AI is Thinking...";

type Result<T> = std::result::Result<T, ControllerError>;

fn missing(name: &'static str) -> ControllerError {
    ControllerError::MissingCollaborator { name }
}

/// 阶段控制器构建器
///
/// UI 和规则检查器必须提供；人机模式下 AI 也必须提供。
pub struct PhaseControllerBuilder {
    settings: GameSettings,
    ui: Option<Box<dyn UiManager>>,
    rule_checker: Option<Box<dyn RuleChecker>>,
    ai: Option<Box<dyn AiPlayer>>,
    board_builder: BoardBuilder,
}

impl PhaseControllerBuilder {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            ui: None,
            rule_checker: None,
            ai: None,
            board_builder: BoardTopology::build,
        }
    }

    pub fn ui(mut self, ui: impl UiManager + 'static) -> Self {
        self.ui = Some(Box::new(ui));
        self
    }

    pub fn rule_checker(mut self, rule_checker: impl RuleChecker + 'static) -> Self {
        self.rule_checker = Some(Box::new(rule_checker));
        self
    }

    pub fn ai(mut self, ai: impl AiPlayer + 'static) -> Self {
        self.ai = Some(Box::new(ai));
        self
    }

    /// 替换棋盘构建函数（默认 `BoardTopology::build`）
    pub fn board_builder(mut self, board_builder: BoardBuilder) -> Self {
        self.board_builder = board_builder;
        self
    }

    /// 检查依赖并进入主菜单
    pub fn build(self) -> Result<PhaseController> {
        let ui = self.ui.ok_or_else(|| missing("ui"))?;
        let rule_checker = self.rule_checker.ok_or_else(|| missing("rule_checker"))?;
        if self.settings.single_player && self.ai.is_none() {
            return Err(missing("ai"));
        }

        let mut controller = PhaseController {
            phase: GamePhase::StartMenu,
            paused_from: None,
            settings: self.settings,
            ui,
            rule_checker,
            ai: self.ai,
            board_builder: self.board_builder,
            session: None,
            board_failed: false,
            queue: VecDeque::new(),
            deferred: VecDeque::new(),
        };
        info!("阶段控制器就绪");
        controller.ui.show_menu();
        Ok(controller)
    }
}

/// 回合/阶段状态机
pub struct PhaseController {
    phase: GamePhase,
    /// 暂停前的阶段
    paused_from: Option<GamePhase>,
    settings: GameSettings,
    ui: Box<dyn UiManager>,
    rule_checker: Box<dyn RuleChecker>,
    ai: Option<Box<dyn AiPlayer>>,
    board_builder: BoardBuilder,
    session: Option<GameSession>,
    /// 棋盘构建失败，在下一次新游戏之前拒绝其他触发
    board_failed: bool,
    /// 待处理事件
    queue: VecDeque<PhaseEvent>,
    /// 暂停期间到达的完成信号，恢复后按原顺序处理
    deferred: VecDeque<PhaseEvent>,
}

impl PhaseController {
    pub fn builder(settings: GameSettings) -> PhaseControllerBuilder {
        PhaseControllerBuilder::new(settings)
    }

    /// 当前阶段
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// 暂停前的阶段（仅暂停时有值）
    pub fn paused_from(&self) -> Option<GamePhase> {
        self.paused_from
    }

    /// 当前对局
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// 当前对局的棋盘图
    pub fn board(&self) -> Option<Arc<BoardGraph>> {
        self.session.as_ref().map(|s| Arc::clone(&s.board))
    }

    /// 是否接受棋盘输入
    pub fn accepts_input(&self) -> bool {
        self.phase.accepts_input()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// 处理一个外部事件，以及由它引发的全部后续事件
    ///
    /// 返回本次处理中发生的阶段切换。对当前阶段无效的事件会被忽略。
    pub fn dispatch(&mut self, event: PhaseEvent) -> Result<Vec<PhaseTransition>> {
        self.queue.push_back(event);
        let mut transitions = Vec::new();

        while let Some(event) = self.queue.pop_front() {
            if let Err(e) = self.process(event, &mut transitions) {
                self.queue.clear();
                return Err(e);
            }
        }

        Ok(transitions)
    }

    fn process(&mut self, event: PhaseEvent, transitions: &mut Vec<PhaseTransition>) -> Result<()> {
        use GamePhase::*;

        if self.board_failed && !matches!(event, PhaseEvent::NewGame { .. }) {
            warn!("棋盘构建失败后只接受新游戏，忽略 {}", event.name());
            return Ok(());
        }

        match (self.phase, event) {
            (StartMenu | GameOver, PhaseEvent::NewGame { single_player }) => {
                let single_player = single_player.unwrap_or(self.settings.single_player);
                let mode = GameMode::from_single_player(single_player);
                if mode.is_pve() && self.ai.is_none() {
                    error!("人机模式缺少 AI，无法开始新游戏");
                    return Err(missing("ai"));
                }
                self.paused_from = None;
                self.board_failed = false;
                self.deferred.clear();
                self.transition(Setup, event, transitions);
                self.enter_setup(mode)?;
            }
            (Setup, PhaseEvent::SetupComplete) => {
                self.transition(PlayerTurn, event, transitions);
                self.enter_player_turn();
            }
            (PlayerTurn, PhaseEvent::MoveSelected(token)) => {
                if self.begin_move(token, false) {
                    self.transition(MoveExecution, event, transitions);
                    debug!("输入已锁定");
                }
            }
            (EnemyTurn, PhaseEvent::AiMoveResolved(token)) => {
                if self.begin_move(token, true) {
                    self.transition(MoveExecution, event, transitions);
                }
            }
            (MoveExecution, PhaseEvent::MoveApplied(token)) => {
                self.finish_move(token, event, transitions);
            }
            (Paused, PhaseEvent::Resume) => {
                self.resume(event, transitions);
            }
            (Paused, PhaseEvent::MoveApplied(_) | PhaseEvent::AiMoveResolved(_)) => {
                debug!("暂停中，{} 延后处理", event.name());
                self.deferred.push_back(event);
            }
            (phase, PhaseEvent::Pause) if phase != Paused && !phase.is_terminal() => {
                self.paused_from = Some(phase);
                self.transition(Paused, event, transitions);
                self.enter_paused(phase);
            }
            (phase, event) => {
                warn!("忽略无效触发: {} (当前阶段 {})", event.name(), phase);
            }
        }

        Ok(())
    }

    /// 切换阶段并记录
    fn transition(
        &mut self,
        to: GamePhase,
        trigger: PhaseEvent,
        transitions: &mut Vec<PhaseTransition>,
    ) {
        let from = self.phase;
        self.phase = to;
        info!("阶段切换: {} -> {} ({})", from, to, trigger.name());
        transitions.push(PhaseTransition { from, to, trigger });
    }

    /// 进入布阵：构建棋盘并分配阵营
    fn enter_setup(&mut self, mode: GameMode) -> Result<()> {
        let board = match (self.board_builder)() {
            Ok(board) => board,
            Err(e) => {
                error!("棋盘构建失败: {}", e);
                self.session = None;
                self.board_failed = true;
                self.phase = GamePhase::StartMenu;
                self.ui.show_menu();
                return Err(e.into());
            }
        };

        let player_side = self.settings.player_side.unwrap_or_else(|| {
            if rand::thread_rng().gen_bool(0.5) {
                Side::Red
            } else {
                Side::Black
            }
        });
        info!("新对局: {:?}, 玩家执 {}", mode, player_side);
        self.session = Some(GameSession::new(board, mode, player_side));

        if self.settings.auto_complete_setup {
            self.queue.push_back(PhaseEvent::SetupComplete);
        }
        Ok(())
    }

    fn enter_player_turn(&mut self) {
        let message = self.player_turn_message();
        self.ui.update_turn_indicator(&message);
    }

    fn enter_enemy_turn(&mut self) {
        self.ui.update_turn_indicator(AI_TURN_MESSAGE);

        let (Some(ai), Some(session)) = (self.ai.as_mut(), self.session.as_ref()) else {
            error!("AI 回合缺少 AI 或对局");
            return;
        };
        if let Some(token) = ai.begin_turn(Arc::clone(&session.board), session.side_to_move) {
            debug!("AI 立即给出走法: {}", token);
            self.queue.push_back(PhaseEvent::AiMoveResolved(token));
        }
    }

    fn enter_paused(&mut self, from: GamePhase) {
        if from == GamePhase::EnemyTurn {
            if let Some(ai) = self.ai.as_mut() {
                ai.suspend();
            }
        }
        debug!("输入与 AI 已挂起");
    }

    /// 记录执行中的走法
    fn begin_move(&mut self, token: MoveToken, by_ai: bool) -> bool {
        let Some(session) = self.session.as_mut() else {
            error!("没有进行中的对局，忽略走法 {}", token);
            return false;
        };
        session.pending_move = Some(PendingMove {
            token,
            mover: session.side_to_move,
            by_ai,
        });
        true
    }

    /// 走法执行完成：询问胜负并进入下一阶段
    fn finish_move(
        &mut self,
        token: MoveToken,
        event: PhaseEvent,
        transitions: &mut Vec<PhaseTransition>,
    ) {
        let Some(session) = self.session.as_mut() else {
            error!("没有进行中的对局，忽略执行完成信号");
            return;
        };
        match session.pending_move {
            Some(pending) if pending.token == token => {}
            Some(pending) => {
                warn!("执行完成的走法 {} 与执行中的走法 {} 不一致，忽略", token, pending.token);
                return;
            }
            None => {
                warn!("没有执行中的走法，忽略 {}", token);
                return;
            }
        }
        let Some(finished) = session.finish_move() else {
            return;
        };

        if self.rule_checker.check_win_condition() {
            let result = GameResult::from_winner(finished.mover);
            session.result = Some(result);
            self.transition(GamePhase::GameOver, event, transitions);
            self.ui.show_game_over_screen(&result);
            return;
        }

        if session.mode.is_pve() && !finished.by_ai {
            self.transition(GamePhase::EnemyTurn, event, transitions);
            self.enter_enemy_turn();
        } else {
            self.transition(GamePhase::PlayerTurn, event, transitions);
            self.enter_player_turn();
        }
    }

    /// 回到暂停前的阶段，不重新执行进入动作
    fn resume(&mut self, event: PhaseEvent, transitions: &mut Vec<PhaseTransition>) {
        let Some(previous) = self.paused_from.take() else {
            warn!("暂停状态缺少之前的阶段，忽略恢复");
            return;
        };
        self.transition(previous, event, transitions);

        match previous {
            GamePhase::PlayerTurn => {
                let message = self.player_turn_message();
                self.ui.update_turn_indicator(&message);
            }
            GamePhase::EnemyTurn => {
                if let Some(ai) = self.ai.as_mut() {
                    ai.resume();
                }
                self.ui.update_turn_indicator(AI_TURN_MESSAGE);
            }
            _ => {}
        }

        while let Some(event) = self.deferred.pop_back() {
            self.queue.push_front(event);
        }
    }

    fn player_turn_message(&self) -> String {
        match &self.session {
            Some(session) if !session.mode.is_pve() => {
                format!("{} Turn", session.side_to_move)
            }
            _ => PLAYER_TURN_MESSAGE.to_string(),
        }
    }
}
