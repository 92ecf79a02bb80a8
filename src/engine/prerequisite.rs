// ==========================================
// 学位规划系统 - 先修条件表达式引擎
// ==========================================
// 职责: 先修描述文本 → 析取范式 (DNF) → 可满足性判断
// 流程: 词法扫描 (tokenizer) → 逆波兰 (rpn) → 析取范式 (formula)
// 红线: 任何输入都不报错，格式错误降级为"全部必修"子句
// ==========================================

mod formula;
mod rpn;
mod tokenizer;


pub use formula::{PrerequisiteFormula, Satisfaction};
pub use rpn::{to_rpn, RpnItem};
pub use tokenizer::{tokenize, Token};
