//! 规则检查协作者接口

/// 规则检查器
///
/// 走法合法性和吃子由检查器自己处理，它通过 `BoardGraph::neighbors_of` 查询棋盘。
/// 控制器只在走法执行完成后询问胜负。
pub trait RuleChecker {
    /// 刚刚完成的走法是否决出胜负
    fn check_win_condition(&mut self) -> bool;
}
